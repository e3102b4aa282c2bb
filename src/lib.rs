//! Facade crate for the NutriGrow recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring engines, and
//! exposes the dataset loaders and the natural-language assistant behind
//! feature flags.

#![forbid(unsafe_code)]

pub use nutrigrow_core::{
    CompletionError, CropDetailsQuery, CropQuery, CropRecord, CropStore, CropTable,
    FoodDetailsQuery, FoodQuery, FoodRecord, FoodStore, FoodTable, QueryError, TextCompletion,
    UnavailableCompletion,
};

pub use nutrigrow_scorer::{
    CropDetailsOutcome, CropMatcher, CropRecommendation, DiversityLevel, DiversityScore,
    FoodDetailsOutcome, FoodMatcher, NutritionPlan, RegionalAdvisory, Severity, assess_diversity,
    regional_advisory, severity_colour,
};

#[cfg(feature = "datasets")]
pub use nutrigrow_data::{
    DatasetError, GeminiCompletionProvider, GeminiConfig, LoadReport, load_crop_table,
    load_food_table,
};

#[cfg(feature = "assistant")]
pub use nutrigrow_assistant::{
    AskContext, AssistError, Assistant, AssistantAnswer, AssistantDefaults, ClimateContext, Intent,
};
