//! Caller-supplied query profiles for the crop and food matchers.
//!
//! Queries are plain data. Each offers a `validate` method that rejects
//! non-finite numbers, blank text and a zero result limit before any
//! matcher sees them. When the `serde` feature is enabled, a missing
//! required field fails deserialisation; only `limit` has a default.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Npk;

/// Result limit applied to crop recommendations when none is given.
pub const DEFAULT_CROP_LIMIT: usize = 3;
/// Result limit applied to nutrition plans when none is given.
pub const DEFAULT_FOOD_LIMIT: usize = 4;

#[cfg(feature = "serde")]
const fn default_crop_limit() -> usize {
    DEFAULT_CROP_LIMIT
}

#[cfg(feature = "serde")]
const fn default_food_limit() -> usize {
    DEFAULT_FOOD_LIMIT
}

/// Errors returned by the `validate` methods on query types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A numeric field held NaN or an infinity.
    #[error("`{field}` must be a finite number")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
    /// A text field was empty or whitespace.
    #[error("`{field}` must not be blank")]
    Blank {
        /// Offending field.
        field: &'static str,
    },
    /// The result limit was zero.
    #[error("`limit` must be a positive integer")]
    ZeroLimit,
}

fn require_finite(field: &'static str, value: f64) -> Result<(), QueryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(QueryError::NonFinite { field })
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), QueryError> {
    if value.trim().is_empty() {
        Err(QueryError::Blank { field })
    } else {
        Ok(())
    }
}

const fn require_limit(limit: usize) -> Result<(), QueryError> {
    if limit == 0 {
        Err(QueryError::ZeroLimit)
    } else {
        Ok(())
    }
}

/// Climate, soil and nutrient readings describing a field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrowingConditions {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil moisture in percent.
    pub moisture: f64,
    /// Soil category, e.g. `loamy`.
    pub soil_type: String,
    /// Soil nitrogen level.
    pub nitrogen: f64,
    /// Soil phosphorous level.
    pub phosphorous: f64,
    /// Soil potassium level.
    pub potassium: f64,
}

impl GrowingConditions {
    /// The readings' nutrient levels as a triple.
    #[must_use]
    pub const fn npk(&self) -> Npk<f64> {
        Npk::new(self.nitrogen, self.phosphorous, self.potassium)
    }

    /// Check every reading is finite and the soil type is present.
    ///
    /// # Errors
    /// Returns [`QueryError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), QueryError> {
        require_finite("temperature", self.temperature)?;
        require_finite("humidity", self.humidity)?;
        require_finite("moisture", self.moisture)?;
        require_text("soil_type", &self.soil_type)?;
        require_finite("nitrogen", self.nitrogen)?;
        require_finite("phosphorous", self.phosphorous)?;
        require_finite("potassium", self.potassium)
    }
}

/// Parameters for a crop recommendation.
///
/// # Examples
/// ```
/// use nutrigrow_core::{CropQuery, GrowingConditions};
///
/// let query = CropQuery::new(GrowingConditions {
///     temperature: 25.0,
///     humidity: 60.0,
///     moisture: 45.0,
///     soil_type: "loamy".into(),
///     nitrogen: 50.0,
///     phosphorous: 40.0,
///     potassium: 45.0,
/// });
/// assert_eq!(query.limit, 3);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CropQuery {
    /// Readings for the field being planted.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub conditions: GrowingConditions,
    /// Maximum number of crop names to return.
    #[cfg_attr(feature = "serde", serde(default = "default_crop_limit"))]
    pub limit: usize,
}

impl CropQuery {
    /// Build a query with the default limit.
    #[must_use]
    pub const fn new(conditions: GrowingConditions) -> Self {
        Self {
            conditions,
            limit: DEFAULT_CROP_LIMIT,
        }
    }

    /// Replace the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Validate readings and limit.
    ///
    /// # Errors
    /// Returns [`QueryError`] for non-finite readings, a blank soil type or
    /// a zero limit.
    pub fn validate(&self) -> Result<(), QueryError> {
        self.conditions.validate()?;
        require_limit(self.limit)
    }
}

/// Parameters for explaining how well one crop suits a field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CropDetailsQuery {
    /// Crop to explain, matched case-insensitively.
    pub crop_name: String,
    /// Readings for the field being planted.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub conditions: GrowingConditions,
}

impl CropDetailsQuery {
    /// Validate the crop name and readings.
    ///
    /// # Errors
    /// Returns [`QueryError`] for a blank name or invalid readings.
    pub fn validate(&self) -> Result<(), QueryError> {
        require_text("crop_name", &self.crop_name)?;
        self.conditions.validate()
    }
}

/// A consumer's health profile.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HealthProfile {
    /// Age in whole years.
    pub age: u32,
    /// Body mass index.
    pub bmi: f64,
    /// Health condition, e.g. `diabetes`, `anemia`, `hypertension` or
    /// `none`.
    pub condition: String,
    /// Diet preference, e.g. `vegetarian`.
    pub diet: String,
}

impl HealthProfile {
    /// Lower-cased, trimmed condition used for rule selection.
    #[must_use]
    pub fn condition_key(&self) -> String {
        self.condition.trim().to_lowercase()
    }

    /// Lower-cased, trimmed diet used for rule selection.
    #[must_use]
    pub fn diet_key(&self) -> String {
        self.diet.trim().to_lowercase()
    }

    /// Report whether the profile follows a vegetarian diet.
    #[must_use]
    pub fn is_vegetarian(&self) -> bool {
        self.diet_key() == "vegetarian"
    }

    /// Check the BMI is finite and both text fields are present.
    ///
    /// # Errors
    /// Returns [`QueryError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), QueryError> {
        require_finite("bmi", self.bmi)?;
        require_text("condition", &self.condition)?;
        require_text("diet", &self.diet)
    }
}

/// Parameters for a nutrition plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoodQuery {
    /// The consumer's profile.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: HealthProfile,
    /// Maximum number of food names to return.
    #[cfg_attr(feature = "serde", serde(default = "default_food_limit"))]
    pub limit: usize,
}

impl FoodQuery {
    /// Build a query with the default limit.
    #[must_use]
    pub const fn new(profile: HealthProfile) -> Self {
        Self {
            profile,
            limit: DEFAULT_FOOD_LIMIT,
        }
    }

    /// Replace the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Validate the profile and limit.
    ///
    /// # Errors
    /// Returns [`QueryError`] for an invalid profile or a zero limit.
    pub fn validate(&self) -> Result<(), QueryError> {
        self.profile.validate()?;
        require_limit(self.limit)
    }
}

/// Parameters for explaining how well one food suits a consumer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FoodDetailsQuery {
    /// Food to explain, matched case-insensitively after trimming.
    pub food_name: String,
    /// The consumer's profile.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: HealthProfile,
}

impl FoodDetailsQuery {
    /// Validate the food name and profile.
    ///
    /// # Errors
    /// Returns [`QueryError`] for a blank name or an invalid profile.
    pub fn validate(&self) -> Result<(), QueryError> {
        require_text("food_name", &self.food_name)?;
        self.profile.validate()
    }
}
