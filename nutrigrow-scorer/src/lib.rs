//! Scoring engines for crop and food recommendations.
//!
//! The crate provides four side-effect-free capabilities over the reference
//! tables in `nutrigrow-core`:
//! - **Crop matching** ([`CropMatcher`]) filters crop rows by climate and
//!   soil tolerance, widens to a soil-only filter when nothing survives, and
//!   ranks the candidates by nutrient distance. It also explains how well a
//!   single named crop suits a field.
//! - **Diversity assessment** ([`assess_diversity`]) grades a set of
//!   recommended crops by how many distinct types and categories it spans.
//! - **Food matching** ([`FoodMatcher`]) narrows food rows through diet, age,
//!   BMI and condition filters, ranks by protein then calories, and explains
//!   single foods with ordered rule ladders.
//! - **Regional advisory** ([`regional_advisory`]) looks up the nutrition
//!   deficiency profile of an Indian state.
//!
//! Every result type serialises to the JSON response contract.
//!
//! # Examples
//!
//! ```
//! use nutrigrow_core::{CropQuery, GrowingConditions, test_support::sample_crop_table};
//! use nutrigrow_scorer::CropMatcher;
//!
//! let matcher = CropMatcher::new(sample_crop_table());
//! let query = CropQuery::new(GrowingConditions {
//!     temperature: 29.0,
//!     humidity: 55.0,
//!     moisture: 45.0,
//!     soil_type: "loamy".into(),
//!     nitrogen: 12.0,
//!     phosphorous: 0.0,
//!     potassium: 36.0,
//! });
//! let result = matcher.recommend(&query)?;
//! assert_eq!(result.recommended_crops.first().map(String::as_str), Some("Sugarcane"));
//! # Ok::<(), nutrigrow_core::QueryError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod advisory;
mod crop;
mod diversity;
mod food;
mod numeric;

pub use advisory::{
    RegionalAdvisory, Severity, UnknownSeverity, regional_advisory, severity_colour,
};
pub use crop::{
    ClimateMatch, CriterionMatch, CropDetails, CropDetailsOutcome, CropMatcher, CropNotFound,
    CropRecommendation, MatchStatus, NutrientMatch, SoilCompatibility, SoilMatch, Suitability,
};
pub use diversity::{CropCategory, DiversityLevel, DiversityScore, assess_diversity};
pub use food::{
    AgeGroup, BmiCategory, DietaryInfo, FoodDetails, FoodDetailsOutcome, FoodMatcher,
    FoodNotFound, MatchBreakdown, NutritionPlan,
};
