//! Crop reference rows and soil nutrient triples.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nitrogen, phosphorous and potassium levels.
///
/// # Examples
/// ```
/// use nutrigrow_core::Npk;
///
/// let npk = Npk::new(50.0, 40.0, 45.0);
/// assert_eq!(npk.p, 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Npk<T> {
    /// Nitrogen.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    pub n: T,
    /// Phosphorous.
    #[cfg_attr(feature = "serde", serde(rename = "P"))]
    pub p: T,
    /// Potassium.
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    pub k: T,
}

impl<T> Npk<T> {
    /// Bundle three nutrient levels.
    #[must_use]
    pub const fn new(n: T, p: T, k: T) -> Self {
        Self { n, p, k }
    }
}

/// One row of the crop reference table.
///
/// Rows are validated with [`CropRecord::validate`] before they enter a
/// [`CropTable`](crate::CropTable) and are read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRecord {
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil moisture in percent.
    pub moisture: f64,
    /// Soil category, compared case-insensitively.
    pub soil_type: String,
    /// Soil nitrogen level.
    pub nitrogen: f64,
    /// Soil phosphorous level.
    pub phosphorous: f64,
    /// Soil potassium level.
    pub potassium: f64,
    /// Crop category name.
    pub crop_type: String,
}

/// Errors returned by [`CropRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropRecordError {
    /// A numeric column held NaN or an infinity.
    #[error("crop column `{field}` must be a finite number")]
    NonFinite {
        /// Offending column.
        field: &'static str,
    },
    /// A category column was blank.
    #[error("crop column `{field}` must not be blank")]
    Blank {
        /// Offending column.
        field: &'static str,
    },
}

impl CropRecord {
    /// Check that every numeric column is finite and both category columns
    /// carry text.
    ///
    /// # Errors
    /// Returns [`CropRecordError`] naming the first offending column.
    pub fn validate(self) -> Result<Self, CropRecordError> {
        let numeric = [
            ("Temperature", self.temperature),
            ("Humidity", self.humidity),
            ("Moisture", self.moisture),
            ("Nitrogen", self.nitrogen),
            ("Phosphorous", self.phosphorous),
            ("Potassium", self.potassium),
        ];
        if let Some(&(field, _)) = numeric.iter().find(|(_, value)| !value.is_finite()) {
            return Err(CropRecordError::NonFinite { field });
        }
        if self.soil_type.trim().is_empty() {
            return Err(CropRecordError::Blank { field: "Soil Type" });
        }
        if self.crop_type.trim().is_empty() {
            return Err(CropRecordError::Blank { field: "Crop Type" });
        }
        Ok(self)
    }

    /// Report whether the row's soil matches `soil_type`, ignoring case.
    #[must_use]
    pub fn soil_matches(&self, soil_type: &str) -> bool {
        self.soil_type.to_lowercase() == soil_type.to_lowercase()
    }

    /// Report whether the row's crop type matches `crop_name`, ignoring case.
    #[must_use]
    pub fn crop_matches(&self, crop_name: &str) -> bool {
        self.crop_type.to_lowercase() == crop_name.to_lowercase()
    }

    /// The row's nutrient levels as a triple.
    #[must_use]
    pub const fn npk(&self) -> Npk<f64> {
        Npk::new(self.nitrogen, self.phosphorous, self.potassium)
    }

    /// Sum of absolute nutrient differences against `target`; lower is
    /// closer.
    ///
    /// # Examples
    /// ```
    /// use nutrigrow_core::{CropRecord, Npk};
    ///
    /// let row = CropRecord {
    ///     temperature: 26.0,
    ///     humidity: 52.0,
    ///     moisture: 38.0,
    ///     soil_type: "Sandy".into(),
    ///     nitrogen: 37.0,
    ///     phosphorous: 0.0,
    ///     potassium: 0.0,
    ///     crop_type: "Maize".into(),
    /// };
    /// assert_eq!(row.npk_distance(&Npk::new(40.0, 2.0, 1.0)), 6.0);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "nutrient distance is an L1 norm over floating-point levels"
    )]
    #[must_use]
    pub fn npk_distance(&self, target: &Npk<f64>) -> f64 {
        (self.nitrogen - target.n).abs()
            + (self.phosphorous - target.p).abs()
            + (self.potassium - target.k).abs()
    }
}
