//! Multi-factor explanation of how one food suits a consumer.

use nutrigrow_core::text::capitalize;
use nutrigrow_core::{FoodRecord, HealthProfile};
use serde::Serialize;

use super::rules::Verdicts;
use crate::numeric::rounded_mean;

const SERVING_SIZE: &str = "100g";
const DETAILS_NOTE: &str =
    "Detailed analysis based on age, BMI, health condition, and dietary preference";

/// Age bracket reported in [`DietaryInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeGroup {
    /// Under 18.
    Youth,
    /// 18 to 39.
    Adult,
    /// 40 and over.
    Senior,
}

impl AgeGroup {
    /// Bracket an age in years.
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..18 => Self::Youth,
            18..40 => Self::Adult,
            _ => Self::Senior,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Youth => "youth",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

/// Standard BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    /// Below 18.5.
    Underweight,
    /// 18.5 up to 25.
    Normal,
    /// 25 up to 30.
    Overweight,
    /// 30 and above.
    Obese,
}

impl BmiCategory {
    /// Band a body mass index.
    #[must_use]
    pub const fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Sub-scores behind `overall_match`, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchBreakdown {
    /// Fit with the diet preference.
    pub diet_compatibility: u8,
    /// Fit with the health condition.
    pub condition_suitability: u8,
    /// Fit with the BMI band.
    pub bmi_alignment: u8,
    /// Fit with the age bracket.
    pub age_appropriateness: u8,
}

/// Classification labels for the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DietaryInfo {
    /// Capitalised diet.
    pub diet_type: String,
    /// Age bracket.
    pub age_group: AgeGroup,
    /// BMI band.
    pub bmi_category: BmiCategory,
    /// Capitalised condition, or `General wellness` for `none`.
    pub suitable_for: String,
}

/// Full explanation for a food found in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDetails {
    /// The row's `Food_Item` as stored.
    pub food_name: String,
    /// Serving the nutrient figures refer to.
    pub serving_size: &'static str,
    /// Rounded mean of the four sub-scores.
    pub overall_match: u8,
    /// The four sub-scores.
    pub match_breakdown: MatchBreakdown,
    /// Energy in kcal.
    pub calories: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrates in grams.
    pub carbs: f64,
    /// Sugars in grams.
    pub sugars: f64,
    /// Sodium in milligrams.
    pub sodium: f64,
    /// Cholesterol in milligrams.
    pub cholesterol: f64,
    /// Sentence summarising the profile the food was judged against.
    pub recommendation_reason: String,
    /// Narrative for the overall match tier.
    pub suitability: &'static str,
    /// Classification labels.
    pub dietary_info: DietaryInfo,
    /// Benefits attached to the top rungs of the ladders.
    pub specific_benefits: Vec<&'static str>,
    /// One line per factor: diet, age, BMI, condition.
    pub explanations: Vec<&'static str>,
    /// Fixed note.
    pub note: &'static str,
}

/// Result for a food name missing from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodNotFound {
    /// Human-readable message.
    pub error: String,
    /// The normalised name that was looked up.
    pub food_name: String,
}

impl FoodNotFound {
    pub(crate) fn new(food_name: String) -> Self {
        Self {
            error: format!("Food item '{food_name}' not found in dataset"),
            food_name,
        }
    }
}

/// Outcome of [`FoodMatcher::details`](crate::FoodMatcher::details).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FoodDetailsOutcome {
    /// The food exists in the table.
    Found(Box<FoodDetails>),
    /// The food does not exist in the table.
    NotFound(FoodNotFound),
}

const fn suitability(overall: u8) -> &'static str {
    if overall >= 80 {
        "Excellent choice! This food is highly recommended for your health profile and meets \
         your dietary requirements exceptionally well."
    } else if overall >= 60 {
        "Good option. This food generally aligns with your health needs, though some \
         considerations may apply."
    } else {
        "Moderate fit. While this food can be part of your diet, consider portion sizes and \
         pairing with complementary foods."
    }
}

fn recommendation_reason(
    profile: &HealthProfile,
    age_group: AgeGroup,
    bmi_category: BmiCategory,
    diet: &str,
    condition: &str,
) -> String {
    let mut reason = format!(
        "This food was selected based on your profile: {} aged {}, {} BMI of {}, following a \
         {diet} diet",
        age_group.label(),
        profile.age,
        bmi_category.label(),
        profile.bmi,
    );
    if condition != "none" {
        reason.push_str(&format!(", with {condition} as a health consideration"));
    }
    reason.push_str(". The nutritional composition aligns well with your specific needs.");
    reason
}

/// Explain `row` for `profile`.
pub(super) fn explain(row: &FoodRecord, profile: &HealthProfile) -> FoodDetails {
    let verdicts = Verdicts::evaluate(row, profile);
    let ordered = verdicts.in_order();
    let overall_match = rounded_mean(&ordered.map(|verdict| verdict.score));

    let diet = profile.diet_key();
    let condition = profile.condition_key();
    let age_group = AgeGroup::from_age(profile.age);
    let bmi_category = BmiCategory::from_bmi(profile.bmi);

    FoodDetails {
        food_name: row.food_item.clone(),
        serving_size: SERVING_SIZE,
        overall_match,
        match_breakdown: MatchBreakdown {
            diet_compatibility: verdicts.diet.score,
            condition_suitability: verdicts.condition.score,
            bmi_alignment: verdicts.bmi.score,
            age_appropriateness: verdicts.age.score,
        },
        calories: row.calories,
        protein: row.protein,
        carbs: row.carbohydrates,
        sugars: row.sugars,
        sodium: row.sodium,
        cholesterol: row.cholesterol,
        recommendation_reason: recommendation_reason(
            profile,
            age_group,
            bmi_category,
            &diet,
            &condition,
        ),
        suitability: suitability(overall_match),
        dietary_info: DietaryInfo {
            diet_type: capitalize(&diet),
            age_group,
            bmi_category,
            suitable_for: if condition == "none" {
                "General wellness".to_owned()
            } else {
                capitalize(&condition)
            },
        },
        specific_benefits: ordered.iter().filter_map(|verdict| verdict.benefit).collect(),
        explanations: ordered.iter().map(|verdict| verdict.explanation).collect(),
        note: DETAILS_NOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrigrow_core::test_support::food;
    use rstest::rstest;

    fn profile(age: u32, bmi: f64, condition: &str, diet: &str) -> HealthProfile {
        HealthProfile {
            age,
            bmi,
            condition: condition.into(),
            diet: diet.into(),
        }
    }

    #[rstest]
    fn lentil_soup_for_a_diabetic_teenager() {
        let row = food("Lentil Soup", "Soups", [116.0, 9.0, 20.0, 1.8, 120.0, 0.0]);
        let details = explain(&row, &profile(15, 22.0, "Diabetes", "Vegetarian"));

        assert_eq!(
            details.match_breakdown,
            MatchBreakdown {
                diet_compatibility: 100,
                condition_suitability: 100,
                bmi_alignment: 70,
                age_appropriateness: 100,
            }
        );
        // (100 + 100 + 70 + 100) / 4 = 92.5 rounds to even.
        assert_eq!(details.overall_match, 92);
        assert_eq!(
            details.explanations,
            [
                "✓ Suitable for a vegetarian diet",
                "✓ Excellent sodium and cholesterol levels for youth",
                "✓ Calorie level workable with balanced meal planning",
                "✓ Very low sugar - excellent for diabetes management",
            ]
        );
        assert_eq!(
            details.specific_benefits,
            [
                "Plant-based nutrition that aligns with vegetarian principles",
                "Optimal nutrient levels for growing bodies",
                "Minimal blood sugar impact, ideal for diabetics",
            ]
        );
        assert_eq!(
            details.recommendation_reason,
            "This food was selected based on your profile: youth aged 15, normal BMI of 22, \
             following a vegetarian diet, with diabetes as a health consideration. The \
             nutritional composition aligns well with your specific needs."
        );
        assert_eq!(details.dietary_info.suitable_for, "Diabetes");
        assert_eq!(details.dietary_info.diet_type, "Vegetarian");
        assert!(details.suitability.starts_with("Excellent choice!"));
    }

    #[rstest]
    fn condition_none_reads_as_general_wellness() {
        let row = food("Fish Curry", "Fish", [210.0, 22.0, 6.0, 3.0, 310.0, 60.0]);
        let details = explain(&row, &profile(45, 31.0, "none", "vegetarian"));

        // diet 0, age 50, bmi 75, balance 30 + 30 + 15 = 75.
        assert_eq!(details.match_breakdown.diet_compatibility, 0);
        assert_eq!(details.match_breakdown.bmi_alignment, 75);
        assert_eq!(details.match_breakdown.condition_suitability, 75);
        assert_eq!(details.overall_match, 50);
        assert_eq!(details.dietary_info.suitable_for, "General wellness");
        assert_eq!(details.dietary_info.bmi_category, BmiCategory::Obese);
        assert_eq!(details.dietary_info.age_group, AgeGroup::Senior);
        assert!(details.specific_benefits.is_empty());
        assert!(!details.recommendation_reason.contains("health consideration"));
        assert!(details.suitability.starts_with("Moderate fit."));
    }

    #[rstest]
    #[case(17, AgeGroup::Youth)]
    #[case(18, AgeGroup::Adult)]
    #[case(39, AgeGroup::Adult)]
    #[case(40, AgeGroup::Senior)]
    fn age_groups(#[case] age: u32, #[case] expected: AgeGroup) {
        assert_eq!(AgeGroup::from_age(age), expected);
    }

    #[rstest]
    #[case(18.4, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn bmi_bands(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(BmiCategory::from_bmi(bmi), expected);
    }

    #[rstest]
    #[case(80, "Excellent choice!")]
    #[case(79, "Good option.")]
    #[case(60, "Good option.")]
    #[case(59, "Moderate fit.")]
    fn suitability_tiers(#[case] overall: u8, #[case] prefix: &str) {
        assert!(suitability(overall).starts_with(prefix));
    }
}
