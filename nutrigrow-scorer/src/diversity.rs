//! Crop diversity grading for a recommendation set.

use std::collections::HashSet;

use serde::Serialize;

use crate::numeric::round1;

/// Qualitative diversity grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiversityLevel {
    /// No crops were recommended.
    ///
    /// The crop matcher only produces this when the soil-only fallback also
    /// finds no rows, so there is nothing to grade.
    None,
    /// A single distinct crop.
    Low,
    /// Two distinct crops.
    Medium,
    /// Three or more distinct crops.
    High,
}

impl DiversityLevel {
    /// Grade a count of distinct crop names.
    #[must_use]
    pub const fn from_unique_count(unique: usize) -> Self {
        match unique {
            0 => Self::None,
            1 => Self::Low,
            2 => Self::Medium,
            _ => Self::High,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::None => {
                "No crops matched your conditions, so crop diversity could not be assessed."
            }
            Self::Low => {
                "You are over-dependent on a single crop. Increasing crop diversity can improve \
                 soil health, reduce income risk, and enhance nutrition outcomes."
            }
            Self::Medium => {
                "Moderate crop diversity detected. Adding one more crop type would improve \
                 resilience."
            }
            Self::High => {
                "Good crop diversity improves nutrition outcomes, climate resilience, and soil \
                 health."
            }
        }
    }

    const fn recommendation(self) -> &'static str {
        match self {
            Self::None => "Check the soil type or adjust the field readings to get crop suggestions.",
            Self::Low => {
                "Consider adding 2-3 different crops from other categories (pulses, oilseeds, \
                 vegetables) to diversify."
            }
            Self::Medium => {
                "Consider adding a legume crop to fix nitrogen and improve soil health."
            }
            Self::High => {
                "Maintain this diversity pattern and consider crop rotation for optimal soil \
                 health."
            }
        }
    }

    const fn benefits(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Low => &[
                "High risk of total crop failure",
                "Soil nutrient depletion from monoculture",
                "Limited nutrition diversity in diet",
            ],
            Self::Medium => &[
                "Reduced risk compared to single crop",
                "Some soil health benefits",
                "Moderate income stability",
            ],
            Self::High => &[
                "Reduced risk of total crop failure",
                "Improved soil health through varied root systems",
                "Better nutrition diversity for family",
                "Income stability from multiple sources",
                "Natural pest management through diversity",
            ],
        }
    }
}

/// Broad agronomic family of a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CropCategory {
    /// Grain crops such as wheat or rice.
    Cereal,
    /// Legumes such as lentil or chickpea.
    Pulse,
    /// Oil-bearing crops such as groundnut or mustard.
    Oilseed,
    /// Vegetables such as tomato or okra.
    Vegetable,
    /// Commercial crops such as cotton or tea.
    #[serde(rename = "Cash Crop")]
    CashCrop,
    /// Anything not in the lookup table.
    Other,
}

const CATEGORY_TABLE: &[(&str, CropCategory)] = &[
    ("rice", CropCategory::Cereal),
    ("paddy", CropCategory::Cereal),
    ("wheat", CropCategory::Cereal),
    ("maize", CropCategory::Cereal),
    ("corn", CropCategory::Cereal),
    ("barley", CropCategory::Cereal),
    ("millet", CropCategory::Cereal),
    ("sorghum", CropCategory::Cereal),
    ("chickpea", CropCategory::Pulse),
    ("lentil", CropCategory::Pulse),
    ("pigeon pea", CropCategory::Pulse),
    ("black gram", CropCategory::Pulse),
    ("green gram", CropCategory::Pulse),
    ("kidney beans", CropCategory::Pulse),
    ("mung bean", CropCategory::Pulse),
    ("moth bean", CropCategory::Pulse),
    ("groundnut", CropCategory::Oilseed),
    ("peanut", CropCategory::Oilseed),
    ("soybean", CropCategory::Oilseed),
    ("sunflower", CropCategory::Oilseed),
    ("mustard", CropCategory::Oilseed),
    ("sesame", CropCategory::Oilseed),
    ("rapeseed", CropCategory::Oilseed),
    ("tomato", CropCategory::Vegetable),
    ("potato", CropCategory::Vegetable),
    ("onion", CropCategory::Vegetable),
    ("cabbage", CropCategory::Vegetable),
    ("cauliflower", CropCategory::Vegetable),
    ("brinjal", CropCategory::Vegetable),
    ("okra", CropCategory::Vegetable),
    ("pumpkin", CropCategory::Vegetable),
    ("cotton", CropCategory::CashCrop),
    ("sugarcane", CropCategory::CashCrop),
    ("jute", CropCategory::CashCrop),
    ("tobacco", CropCategory::CashCrop),
    ("tea", CropCategory::CashCrop),
    ("coffee", CropCategory::CashCrop),
];

impl CropCategory {
    /// Look up a crop name, ignoring case. Unknown names are
    /// [`CropCategory::Other`].
    ///
    /// # Examples
    /// ```
    /// use nutrigrow_scorer::CropCategory;
    ///
    /// assert_eq!(CropCategory::of("Paddy"), CropCategory::Cereal);
    /// assert_eq!(CropCategory::of("Oil seeds"), CropCategory::Other);
    /// ```
    #[must_use]
    pub fn of(crop_name: &str) -> Self {
        let key = crop_name.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map_or(Self::Other, |&(_, category)| category)
    }
}

/// Diversity grade of a recommendation set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityScore {
    /// Grade derived from the distinct crop count.
    pub level: DiversityLevel,
    /// Number of distinct crop names.
    pub unique_crops: usize,
    /// Number of names assessed, duplicates included.
    pub total_recommendations: usize,
    /// Distinct share of all names, in percent, one decimal place.
    pub diversity_percentage: f64,
    /// Number of distinct crop categories.
    pub unique_categories: usize,
    /// Fixed summary for the level.
    pub message: &'static str,
    /// Fixed next step for the level.
    pub recommendation: &'static str,
    /// Fixed consequences or benefits for the level.
    pub benefits: &'static [&'static str],
}

/// Grade how diverse a list of recommended crops is.
///
/// Distinct names are counted exactly as given; categories are looked up
/// case-insensitively. An empty list grades as [`DiversityLevel::None`] with
/// a percentage of zero.
///
/// # Examples
/// ```
/// use nutrigrow_scorer::{DiversityLevel, assess_diversity};
///
/// let score = assess_diversity(&["Wheat", "Lentil", "Cotton"]);
/// assert_eq!(score.level, DiversityLevel::High);
/// assert_eq!(score.unique_categories, 3);
/// ```
#[must_use]
pub fn assess_diversity<S: AsRef<str>>(crops: &[S]) -> DiversityScore {
    let unique: HashSet<&str> = crops.iter().map(AsRef::as_ref).collect();
    let categories: HashSet<CropCategory> = unique.iter().map(|name| CropCategory::of(name)).collect();
    let level = DiversityLevel::from_unique_count(unique.len());
    DiversityScore {
        level,
        unique_crops: unique.len(),
        total_recommendations: crops.len(),
        diversity_percentage: percentage(unique.len(), crops.len()),
        unique_categories: categories.len(),
        message: level.message(),
        recommendation: level.recommendation(),
        benefits: level.benefits(),
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentage of two small counts"
)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(part as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["Paddy"], DiversityLevel::Low)]
    #[case(&["Paddy", "Paddy"], DiversityLevel::Low)]
    #[case(&["Paddy", "Wheat"], DiversityLevel::Medium)]
    #[case(&["Paddy", "Wheat", "Pulses"], DiversityLevel::High)]
    fn level_follows_distinct_count(#[case] crops: &[&str], #[case] expected: DiversityLevel) {
        assert_eq!(assess_diversity(crops).level, expected);
    }

    #[rstest]
    fn empty_list_is_guarded() {
        let score = assess_diversity::<&str>(&[]);
        assert_eq!(score.level, DiversityLevel::None);
        assert_eq!(score.diversity_percentage, 0.0);
        assert_eq!(score.unique_categories, 0);
        assert!(score.benefits.is_empty());
    }

    #[rstest]
    fn duplicates_lower_the_percentage() {
        let score = assess_diversity(&["Maize", "Maize", "Cotton"]);
        assert_eq!(score.unique_crops, 2);
        assert_eq!(score.total_recommendations, 3);
        assert!((score.diversity_percentage - 66.7).abs() < 1e-9);
    }

    #[rstest]
    fn unknown_crops_share_the_other_category() {
        let score = assess_diversity(&["Oil seeds", "Ground Nuts", "Millets"]);
        assert_eq!(score.unique_categories, 1);
    }

    #[rstest]
    fn high_level_lists_five_benefits() {
        let score = assess_diversity(&["Rice", "Lentil", "Tomato"]);
        assert_eq!(score.benefits.len(), 5);
        assert_eq!(score.benefits.first(), Some(&"Reduced risk of total crop failure"));
    }

    #[rstest]
    fn serialises_level_and_category_names() {
        let json = serde_json::to_value(assess_diversity(&["Cotton"])).expect("serialise");
        assert_eq!(json["level"], "LOW");
        assert_eq!(
            serde_json::to_value(CropCategory::CashCrop).expect("serialise"),
            "Cash Crop"
        );
    }
}
