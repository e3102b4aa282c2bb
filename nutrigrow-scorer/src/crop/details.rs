//! Per-criterion explanation of how one crop suits a field.

use nutrigrow_core::text::{capitalize, title_case};
use nutrigrow_core::{CropRecord, GrowingConditions, Npk};
use serde::Serialize;

use super::{HUMIDITY_TOLERANCE, MOISTURE_TOLERANCE, TEMPERATURE_TOLERANCE, abs_diff};
use crate::numeric::{closeness, round1};

/// NPK distance at which the nutrient match reaches zero.
const NPK_TOLERANCE: f64 = 150.0;

const GENERAL_ADVICE: [&str; 4] = [
    "Plant during optimal season for best yield",
    "Monitor soil pH levels regularly",
    "Ensure proper irrigation based on moisture needs",
    "Consider crop rotation for soil health",
];

/// Qualitative bucket for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suitability {
    /// Above 80.
    Excellent,
    /// Above 60.
    Good,
    /// Above 40.
    Fair,
    /// 40 or below.
    Poor,
}

impl Suitability {
    /// Bucket a 0–100 score.
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score > 80.0 {
            Self::Excellent
        } else if score > 60.0 {
            Self::Good
        } else if score > 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Status label attached to a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Top tier.
    Excellent,
    /// Middle tier.
    Good,
    /// Bottom tier.
    Fair,
}

/// Three-tier ladder shared by status labels and explanation prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Strong,
    Borderline,
    Weak,
}

impl Tier {
    const fn of(percentage: f64, strong_above: f64, borderline_above: f64) -> Self {
        if percentage > strong_above {
            Self::Strong
        } else if percentage > borderline_above {
            Self::Borderline
        } else {
            Self::Weak
        }
    }

    const fn climate(percentage: f64) -> Self {
        Self::of(percentage, 80.0, 60.0)
    }

    const fn nutrients(percentage: f64) -> Self {
        Self::of(percentage, 70.0, 50.0)
    }

    const fn status(self) -> MatchStatus {
        match self {
            Self::Strong => MatchStatus::Excellent,
            Self::Borderline => MatchStatus::Good,
            Self::Weak => MatchStatus::Fair,
        }
    }
}

/// Match of one climate reading against the crop's reference row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionMatch {
    /// The caller's reading.
    pub your_value: f64,
    /// The reference row's reading.
    pub ideal_value: f64,
    /// Closeness in percent, one decimal place.
    pub match_percentage: f64,
    /// Tier label.
    pub status: MatchStatus,
}

/// Climate criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateMatch {
    /// Temperature criterion.
    pub temperature: CriterionMatch,
    /// Humidity criterion.
    pub humidity: CriterionMatch,
    /// Soil moisture criterion.
    pub moisture: CriterionMatch,
}

/// Whether the caller's soil equals the crop's reference soil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilCompatibility {
    /// Same soil type.
    Perfect,
    /// Different soil type.
    Compatible,
}

/// Soil comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoilMatch {
    /// The caller's soil, capitalised.
    pub your_soil: String,
    /// The reference row's soil as stored.
    pub ideal_soil: String,
    /// Whether the soils match ignoring case.
    pub is_perfect_match: bool,
    /// Label for `is_perfect_match`.
    pub compatibility: SoilCompatibility,
}

/// Nutrient comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientMatch {
    /// The caller's NPK levels.
    pub your_npk: Npk<f64>,
    /// The reference row's NPK levels, truncated to integers.
    pub ideal_npk: Npk<i64>,
    /// Closeness in percent, one decimal place.
    pub match_percentage: f64,
    /// Tier label.
    pub status: MatchStatus,
}

/// Full explanation for a crop found in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropDetails {
    /// Requested crop, title-cased.
    pub crop_name: String,
    /// Weighted score, one decimal place.
    pub overall_score: f64,
    /// Bucket of the unrounded overall score.
    pub suitability: Suitability,
    /// Climate criteria.
    pub climate_match: ClimateMatch,
    /// Soil criterion.
    pub soil_match: SoilMatch,
    /// Nutrient criterion.
    pub nutrient_match: NutrientMatch,
    /// One line per criterion, prefixed with ✓, ~ or ⚠.
    pub explanations: Vec<String>,
    /// Fixed agronomy advice.
    pub recommendations: [&'static str; 4],
}

/// Result for a crop name missing from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropNotFound {
    /// Human-readable message.
    pub error: String,
    /// The normalised name that was looked up.
    pub crop_name: String,
}

impl CropNotFound {
    pub(crate) fn new(crop_name: String) -> Self {
        Self {
            error: format!("Crop '{crop_name}' not found in database"),
            crop_name,
        }
    }
}

/// Outcome of [`CropMatcher::details`](crate::CropMatcher::details).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CropDetailsOutcome {
    /// The crop exists in the table.
    Found(Box<CropDetails>),
    /// The crop does not exist in the table.
    NotFound(CropNotFound),
}

/// Percentages for every criterion, unrounded.
struct Scores {
    temperature: f64,
    humidity: f64,
    moisture: f64,
    npk: f64,
    soil_matches: bool,
}

impl Scores {
    fn compute(row: &CropRecord, npk_distance: f64, conditions: &GrowingConditions) -> Self {
        Self {
            temperature: closeness(
                abs_diff(row.temperature, conditions.temperature),
                TEMPERATURE_TOLERANCE,
            ),
            humidity: closeness(
                abs_diff(row.humidity, conditions.humidity),
                HUMIDITY_TOLERANCE,
            ),
            moisture: closeness(
                abs_diff(row.moisture, conditions.moisture),
                MOISTURE_TOLERANCE,
            ),
            npk: closeness(npk_distance, NPK_TOLERANCE),
            soil_matches: row.soil_matches(&conditions.soil_type),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the overall score is a weighted sum of percentages"
    )]
    fn overall(&self) -> f64 {
        let soil = if self.soil_matches { 100.0 } else { 50.0 };
        0.25 * self.temperature
            + 0.25 * self.humidity
            + 0.20 * self.moisture
            + 0.20 * self.npk
            + 0.10 * soil
    }
}

fn criterion(your_value: f64, ideal_value: f64, percentage: f64) -> CriterionMatch {
    CriterionMatch {
        your_value,
        ideal_value,
        match_percentage: round1(percentage),
        status: Tier::climate(percentage).status(),
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "reference levels are reported as whole numbers, truncating toward zero"
)]
fn truncate(level: f64) -> i64 {
    level.trunc() as i64
}

fn explanations(
    crop: &str,
    row: &CropRecord,
    scores: &Scores,
    conditions: &GrowingConditions,
) -> Vec<String> {
    let GrowingConditions {
        temperature,
        humidity,
        moisture,
        soil_type,
        nitrogen,
        phosphorous,
        potassium,
    } = conditions;
    let soil = capitalize(soil_type);

    let temperature_line = match Tier::climate(scores.temperature) {
        Tier::Strong => format!("✓ Temperature ({temperature}°C) is ideal for {crop}"),
        Tier::Borderline => format!("~ Temperature ({temperature}°C) is acceptable for {crop}"),
        Tier::Weak => format!(
            "⚠ Temperature ({temperature}°C) is suboptimal (ideal: {}°C)",
            row.temperature
        ),
    };
    let humidity_line = match Tier::climate(scores.humidity) {
        Tier::Strong => format!("✓ Humidity ({humidity}%) is perfect for {crop}"),
        Tier::Borderline => format!("~ Humidity ({humidity}%) is acceptable for {crop}"),
        Tier::Weak => format!(
            "⚠ Humidity ({humidity}%) could be better (ideal: {}%)",
            row.humidity
        ),
    };
    let moisture_line = match Tier::climate(scores.moisture) {
        Tier::Strong => format!("✓ Soil moisture ({moisture}%) is excellent for {crop}"),
        Tier::Borderline => format!("~ Soil moisture ({moisture}%) is adequate for {crop}"),
        Tier::Weak => format!(
            "⚠ Soil moisture ({moisture}%) needs attention (ideal: {}%)",
            row.moisture
        ),
    };
    let soil_line = if scores.soil_matches {
        format!("✓ {soil} soil is perfect for {crop}")
    } else {
        format!("⚠ {soil} soil works, but {} is ideal", row.soil_type)
    };
    let npk_line = match Tier::nutrients(scores.npk) {
        Tier::Strong => format!(
            "✓ NPK levels (N:{nitrogen}, P:{phosphorous}, K:{potassium}) are well-balanced for {crop}"
        ),
        Tier::Borderline => "~ NPK levels are acceptable but could be optimized".to_owned(),
        Tier::Weak => format!(
            "⚠ Consider adjusting NPK to N:{}, P:{}, K:{}",
            row.nitrogen, row.phosphorous, row.potassium
        ),
    };

    vec![
        temperature_line,
        humidity_line,
        moisture_line,
        soil_line,
        npk_line,
    ]
}

/// Build the explanation for the closest reference row of a crop.
///
/// `crop` is the normalised lower-case name used in explanation lines.
pub(super) fn explain(
    crop: &str,
    row: &CropRecord,
    npk_distance: f64,
    conditions: &GrowingConditions,
) -> CropDetails {
    let scores = Scores::compute(row, npk_distance, conditions);
    let overall = scores.overall();

    CropDetails {
        crop_name: title_case(crop),
        overall_score: round1(overall),
        suitability: Suitability::from_score(overall),
        climate_match: ClimateMatch {
            temperature: criterion(conditions.temperature, row.temperature, scores.temperature),
            humidity: criterion(conditions.humidity, row.humidity, scores.humidity),
            moisture: criterion(conditions.moisture, row.moisture, scores.moisture),
        },
        soil_match: SoilMatch {
            your_soil: capitalize(&conditions.soil_type),
            ideal_soil: row.soil_type.clone(),
            is_perfect_match: scores.soil_matches,
            compatibility: if scores.soil_matches {
                SoilCompatibility::Perfect
            } else {
                SoilCompatibility::Compatible
            },
        },
        nutrient_match: NutrientMatch {
            your_npk: conditions.npk(),
            ideal_npk: Npk::new(
                truncate(row.nitrogen),
                truncate(row.phosphorous),
                truncate(row.potassium),
            ),
            match_percentage: round1(scores.npk),
            status: Tier::nutrients(scores.npk).status(),
        },
        explanations: explanations(crop, row, &scores, conditions),
        recommendations: GENERAL_ADVICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrigrow_core::test_support::crop;
    use rstest::{fixture, rstest};

    #[fixture]
    fn field() -> GrowingConditions {
        GrowingConditions {
            temperature: 25.0,
            humidity: 60.0,
            moisture: 45.0,
            soil_type: "loamy".into(),
            nitrogen: 50.0,
            phosphorous: 40.0,
            potassium: 45.0,
        }
    }

    fn explain_row(row: &CropRecord, conditions: &GrowingConditions) -> CropDetails {
        let distance = row.npk_distance(&conditions.npk());
        explain("ground nuts", row, distance, conditions)
    }

    #[rstest]
    fn perfect_row_scores_full_marks(field: GrowingConditions) {
        let row = crop("Ground Nuts", "Loamy", [25.0, 60.0, 45.0], [50.0, 40.0, 45.0]);
        let details = explain_row(&row, &field);

        assert_eq!(details.crop_name, "Ground Nuts");
        assert!((details.overall_score - 100.0).abs() < 1e-9);
        assert_eq!(details.suitability, Suitability::Excellent);
        assert_eq!(details.soil_match.compatibility, SoilCompatibility::Perfect);
        assert_eq!(details.soil_match.your_soil, "Loamy");
        assert_eq!(
            details.explanations,
            [
                "✓ Temperature (25°C) is ideal for ground nuts",
                "✓ Humidity (60%) is perfect for ground nuts",
                "✓ Soil moisture (45%) is excellent for ground nuts",
                "✓ Loamy soil is perfect for ground nuts",
                "✓ NPK levels (N:50, P:40, K:45) are well-balanced for ground nuts",
            ]
        );
    }

    #[rstest]
    fn distant_row_explains_every_gap(field: GrowingConditions) {
        let row = crop("Ground Nuts", "Red", [31.0, 75.0, 58.5], [10.0, 13.0, 14.0]);
        let details = explain_row(&row, &field);

        // temp 0, humidity 0, moisture 0, npk 100 - 98/150*100 = 34.67, soil 50.
        assert!((details.overall_score - 11.9).abs() < 1e-9);
        assert_eq!(details.suitability, Suitability::Poor);
        assert_eq!(details.nutrient_match.status, MatchStatus::Fair);
        assert_eq!(details.nutrient_match.ideal_npk, Npk::new(10, 13, 14));
        assert_eq!(
            details.explanations,
            [
                "⚠ Temperature (25°C) is suboptimal (ideal: 31°C)",
                "⚠ Humidity (60%) could be better (ideal: 75%)",
                "⚠ Soil moisture (45%) needs attention (ideal: 58.5%)",
                "⚠ Loamy soil works, but Red is ideal",
                "⚠ Consider adjusting NPK to N:10, P:13, K:14",
            ]
        );
    }

    #[rstest]
    fn borderline_readings_use_tilde_lines(field: GrowingConditions) {
        // temp diff 1 → 66.7, humidity diff 3 → 70, moisture diff 3.5 → 65,
        // npk distance 60 → 60.
        let row = crop("Ground Nuts", "Loamy", [26.0, 63.0, 48.5], [30.0, 20.0, 25.0]);
        let details = explain_row(&row, &field);

        assert_eq!(details.climate_match.temperature.status, MatchStatus::Good);
        assert!((details.climate_match.temperature.match_percentage - 66.7).abs() < 1e-9);
        assert_eq!(details.nutrient_match.status, MatchStatus::Good);
        assert_eq!(details.suitability, Suitability::Good);
        assert_eq!(
            details.explanations,
            [
                "~ Temperature (25°C) is acceptable for ground nuts",
                "~ Humidity (60%) is acceptable for ground nuts",
                "~ Soil moisture (45%) is adequate for ground nuts",
                "✓ Loamy soil is perfect for ground nuts",
                "~ NPK levels are acceptable but could be optimized",
            ]
        );
    }

    #[rstest]
    #[case(80.1, Suitability::Excellent)]
    #[case(80.0, Suitability::Good)]
    #[case(60.0, Suitability::Fair)]
    #[case(40.0, Suitability::Poor)]
    fn suitability_thresholds_are_exclusive(#[case] score: f64, #[case] expected: Suitability) {
        assert_eq!(Suitability::from_score(score), expected);
    }

    #[rstest]
    fn not_found_serialises_without_score_fields() {
        let outcome = CropDetailsOutcome::NotFound(CropNotFound::new("quinoa".into()));
        let json = serde_json::to_value(&outcome).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Crop 'quinoa' not found in database",
                "crop_name": "quinoa"
            })
        );
    }
}
