//! Food reference rows.

use thiserror::Error;

/// Category fragments that mark a row as unsuitable for a vegetarian
/// nutrition plan.
pub const NON_VEGETARIAN_MARKERS: [&str; 3] = ["meat", "fish", "chicken"];

/// One row of the food reference table, with nutrients per 100 g serving.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRecord {
    /// Display name and identity key.
    pub food_item: String,
    /// Free-text category, possibly blank.
    pub category: String,
    /// Energy in kcal.
    pub calories: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrates in grams.
    pub carbohydrates: f64,
    /// Sugars in grams.
    pub sugars: f64,
    /// Sodium in milligrams.
    pub sodium: f64,
    /// Cholesterol in milligrams.
    pub cholesterol: f64,
}

/// Errors returned by [`FoodRecord::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodRecordError {
    /// The identity column was blank.
    #[error("food row has a blank `Food_Item`")]
    BlankName,
    /// A nutrient column held NaN or an infinity.
    #[error("food column `{field}` must be a finite number")]
    NonFinite {
        /// Offending column.
        field: &'static str,
    },
}

impl FoodRecord {
    /// Check that the row has a name and finite nutrient values.
    ///
    /// # Errors
    /// Returns [`FoodRecordError`] describing the first problem found.
    pub fn validate(self) -> Result<Self, FoodRecordError> {
        if self.food_item.trim().is_empty() {
            return Err(FoodRecordError::BlankName);
        }
        let nutrients = [
            ("Calories (kcal)", self.calories),
            ("Protein (g)", self.protein),
            ("Carbohydrates (g)", self.carbohydrates),
            ("Sugars (g)", self.sugars),
            ("Sodium (mg)", self.sodium),
            ("Cholesterol (mg)", self.cholesterol),
        ];
        match nutrients.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(FoodRecordError::NonFinite { field }),
            None => Ok(self),
        }
    }

    /// Report whether the category mentions any of `markers`, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use nutrigrow_core::{FoodRecord, NON_VEGETARIAN_MARKERS};
    ///
    /// let row = FoodRecord {
    ///     food_item: "Grilled Chicken".into(),
    ///     category: "Chicken Dishes".into(),
    ///     calories: 165.0,
    ///     protein: 31.0,
    ///     carbohydrates: 0.0,
    ///     sugars: 0.0,
    ///     sodium: 74.0,
    ///     cholesterol: 85.0,
    /// };
    /// assert!(row.category_mentions(&NON_VEGETARIAN_MARKERS));
    /// ```
    #[must_use]
    pub fn category_mentions(&self, markers: &[&str]) -> bool {
        let category = self.category.to_lowercase();
        markers.iter().any(|marker| category.contains(marker))
    }

    /// Report whether the row's name equals `name`, ignoring case.
    #[must_use]
    pub fn named(&self, name: &str) -> bool {
        self.food_item.to_lowercase() == name.to_lowercase()
    }
}
