//! Regional nutrition deficiency lookup.

use std::fmt;
use std::str::FromStr;

use nutrigrow_core::text::title_case;
use serde::Serialize;
use thiserror::Error;

const AWARENESS_NOTE: &str = "This information is based on national health surveys and can help \
                              guide crop selection for better community nutrition.";

/// Colour used for severities that do not parse.
const UNKNOWN_SEVERITY_COLOUR: &str = "#6b7280";

/// How pressing a region's deficiencies are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// `low`
    Low,
    /// `moderate`
    Moderate,
    /// `high`
    High,
    /// `very_high`
    VeryHigh,
}

impl Severity {
    /// The wire name, e.g. `very_high`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }

    /// Display colour as a hex triple.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Self::VeryHigh => "#dc2626",
            Self::High => "#ea580c",
            Self::Moderate => "#f59e0b",
            Self::Low => "#10b981",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a severity wire name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{0}`")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "very_high" => Ok(Self::VeryHigh),
            other => Err(UnknownSeverity(other.to_owned())),
        }
    }
}

/// Map a severity wire name to its display colour.
///
/// Names are matched exactly; anything else gets a neutral grey.
///
/// # Examples
/// ```
/// use nutrigrow_scorer::severity_colour;
///
/// assert_eq!(severity_colour("very_high"), "#dc2626");
/// assert_eq!(severity_colour("extreme"), "#6b7280");
/// ```
#[must_use]
pub fn severity_colour(severity: &str) -> &'static str {
    severity
        .parse::<Severity>()
        .map_or(UNKNOWN_SEVERITY_COLOUR, Severity::colour)
}

struct RegionProfile {
    key: &'static str,
    deficiencies: &'static [&'static str],
    severity: Severity,
    message: &'static str,
    recommended_crops: &'static [&'static str],
    statistics: &'static str,
}

const NATIONAL_AVERAGE: RegionProfile = RegionProfile {
    key: "",
    deficiencies: &["Iron", "Protein"],
    severity: Severity::Moderate,
    message: "Iron and protein deficiencies are common across India. Growing diverse crops \
              including millets, pulses, and vegetables can improve nutrition.",
    recommended_crops: &["Pearl Millet", "Lentil", "Spinach", "Chickpea"],
    statistics: "National average: 40% of children under 5 are anemic",
};

const REGIONS: &[RegionProfile] = &[
    RegionProfile {
        key: "uttar pradesh",
        deficiencies: &["Iron", "Protein", "Vitamin A"],
        severity: Severity::High,
        message: "Iron and protein deficiencies are high in your region. Growing millets, \
                  pulses, and leafy vegetables can help improve community nutrition.",
        recommended_crops: &["Pearl Millet", "Lentil", "Spinach", "Chickpea"],
        statistics: "45% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "bihar",
        deficiencies: &["Iron", "Zinc", "Vitamin A"],
        severity: Severity::VeryHigh,
        message: "Your region has critical iron and zinc deficiencies. Fortified crops and \
                  pulses are essential for community health.",
        recommended_crops: &["Rice (Fortified)", "Lentil", "Pumpkin", "Chickpea"],
        statistics: "63% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "punjab",
        deficiencies: &["Vitamin D", "Calcium"],
        severity: Severity::Moderate,
        message: "Vitamin D and calcium deficiencies are common. Diversifying from wheat-rice \
                  to include vegetables and pulses can help.",
        recommended_crops: &["Mustard Greens", "Chickpea", "Lentil", "Carrot"],
        statistics: "28% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "haryana",
        deficiencies: &["Iron", "Vitamin D"],
        severity: Severity::Moderate,
        message: "Iron deficiency is prevalent. Growing iron-rich crops alongside traditional \
                  wheat can improve nutrition.",
        recommended_crops: &["Spinach", "Lentil", "Chickpea", "Bajra"],
        statistics: "32% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "delhi",
        deficiencies: &["Vitamin D", "Iron"],
        severity: Severity::Moderate,
        message: "Urban nutrition gaps include iron and vitamin D. Kitchen gardens with leafy \
                  vegetables can help.",
        recommended_crops: &["Spinach", "Fenugreek", "Tomato", "Radish"],
        statistics: "35% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "west bengal",
        deficiencies: &["Iron", "Vitamin A", "Zinc"],
        severity: Severity::High,
        message: "Iron and vitamin A deficiencies are significant. Growing orange vegetables \
                  and pulses can address these gaps.",
        recommended_crops: &["Pumpkin", "Carrot", "Lentil", "Rice (Fortified)"],
        statistics: "54% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "odisha",
        deficiencies: &["Iron", "Protein", "Vitamin A"],
        severity: Severity::VeryHigh,
        message: "Your region faces critical malnutrition. Millets, pulses, and vegetables are \
                  essential for community health.",
        recommended_crops: &["Finger Millet", "Lentil", "Pumpkin", "Spinach"],
        statistics: "64% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "jharkhand",
        deficiencies: &["Iron", "Protein", "Zinc"],
        severity: Severity::VeryHigh,
        message: "Severe iron and protein deficiencies exist. Growing traditional millets and \
                  pulses can significantly improve nutrition.",
        recommended_crops: &["Finger Millet", "Chickpea", "Lentil", "Amaranth"],
        statistics: "65% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "karnataka",
        deficiencies: &["Iron", "Vitamin A"],
        severity: Severity::Moderate,
        message: "Iron deficiency is common. Including millets and leafy vegetables in farming \
                  can boost nutrition.",
        recommended_crops: &["Finger Millet", "Spinach", "Tomato", "Lentil"],
        statistics: "42% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "tamil nadu",
        deficiencies: &["Iron", "Calcium"],
        severity: Severity::Moderate,
        message: "Iron and calcium deficiencies are present. Diversifying crops to include \
                  millets and greens can help.",
        recommended_crops: &["Finger Millet", "Amaranth", "Spinach", "Lentil"],
        statistics: "38% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "kerala",
        deficiencies: &["Vitamin D", "Iron"],
        severity: Severity::Low,
        message: "Moderate iron deficiency exists. Kitchen gardens with vegetables can \
                  supplement nutrition.",
        recommended_crops: &["Spinach", "Tomato", "Cucumber", "Beans"],
        statistics: "23% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "andhra pradesh",
        deficiencies: &["Iron", "Vitamin A"],
        severity: Severity::Moderate,
        message: "Iron deficiency is common. Growing millets alongside rice can improve \
                  community nutrition.",
        recommended_crops: &["Pearl Millet", "Spinach", "Pumpkin", "Lentil"],
        statistics: "46% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "maharashtra",
        deficiencies: &["Iron", "Vitamin A"],
        severity: Severity::Moderate,
        message: "Iron deficiency affects many areas. Growing millets and pulses can address \
                  nutritional gaps.",
        recommended_crops: &["Pearl Millet", "Chickpea", "Spinach", "Tomato"],
        statistics: "39% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "gujarat",
        deficiencies: &["Iron", "Protein"],
        severity: Severity::Moderate,
        message: "Iron and protein gaps exist. Diversifying with pulses and vegetables can \
                  improve nutrition.",
        recommended_crops: &["Chickpea", "Pearl Millet", "Spinach", "Peanut"],
        statistics: "41% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "rajasthan",
        deficiencies: &["Iron", "Vitamin A", "Zinc"],
        severity: Severity::High,
        message: "High iron deficiency is present. Water-efficient millets and pulses are \
                  ideal for your region.",
        recommended_crops: &["Pearl Millet", "Chickpea", "Lentil", "Cluster Beans"],
        statistics: "51% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "assam",
        deficiencies: &["Iron", "Vitamin A", "Iodine"],
        severity: Severity::High,
        message: "Iron and vitamin A deficiencies are significant. Growing diverse vegetables \
                  can improve nutrition.",
        recommended_crops: &["Rice (Fortified)", "Pumpkin", "Spinach", "Lentil"],
        statistics: "52% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "meghalaya",
        deficiencies: &["Iron", "Protein"],
        severity: Severity::High,
        message: "High malnutrition rates exist. Growing protein-rich crops and vegetables is \
                  essential.",
        recommended_crops: &["Rice", "Lentil", "Beans", "Pumpkin"],
        statistics: "48% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "madhya pradesh",
        deficiencies: &["Iron", "Protein", "Vitamin A"],
        severity: Severity::High,
        message: "Iron and protein deficiencies are widespread. Millets and pulses are crucial \
                  for better nutrition.",
        recommended_crops: &["Pearl Millet", "Chickpea", "Lentil", "Spinach"],
        statistics: "50% of children under 5 are anemic in this region",
    },
    RegionProfile {
        key: "chhattisgarh",
        deficiencies: &["Iron", "Protein", "Zinc"],
        severity: Severity::VeryHigh,
        message: "Critical malnutrition exists. Growing millets and pulses can significantly \
                  improve community health.",
        recommended_crops: &["Finger Millet", "Lentil", "Chickpea", "Amaranth"],
        statistics: "62% of children under 5 are anemic in this region",
    },
];

/// Nutrition deficiency profile of a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionalAdvisory {
    /// The requested region, trimmed and title-cased.
    pub region: String,
    /// Nutrients commonly lacking in the region.
    pub deficiencies: &'static [&'static str],
    /// How pressing the deficiencies are.
    pub severity: Severity,
    /// Advice for growers.
    pub message: &'static str,
    /// Crops that address the deficiencies.
    pub recommended_crops: &'static [&'static str],
    /// Headline anaemia figure.
    pub statistics: &'static str,
    /// Fixed provenance note.
    pub awareness_note: &'static str,
}

/// Look up the advisory for an Indian state.
///
/// The name is matched after trimming and lower-casing. Unknown regions
/// receive the national average profile.
///
/// # Examples
/// ```
/// use nutrigrow_scorer::{Severity, regional_advisory};
///
/// let advisory = regional_advisory("  BIHAR ");
/// assert_eq!(advisory.region, "Bihar");
/// assert_eq!(advisory.severity, Severity::VeryHigh);
/// ```
#[must_use]
pub fn regional_advisory(region: &str) -> RegionalAdvisory {
    let trimmed = region.trim();
    let key = trimmed.to_lowercase();
    let profile = REGIONS
        .iter()
        .find(|profile| profile.key == key)
        .unwrap_or(&NATIONAL_AVERAGE);
    RegionalAdvisory {
        region: title_case(trimmed),
        deficiencies: profile.deficiencies,
        severity: profile.severity,
        message: profile.message,
        recommended_crops: profile.recommended_crops,
        statistics: profile.statistics,
        awareness_note: AWARENESS_NOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("low", Severity::Low)]
    #[case("moderate", Severity::Moderate)]
    #[case("high", Severity::High)]
    #[case("very_high", Severity::VeryHigh)]
    fn severities_round_trip_through_their_names(#[case] name: &str, #[case] severity: Severity) {
        assert_eq!(name.parse::<Severity>(), Ok(severity));
        assert_eq!(severity.to_string(), name);
    }

    #[rstest]
    #[case("very_high", "#dc2626")]
    #[case("high", "#ea580c")]
    #[case("moderate", "#f59e0b")]
    #[case("low", "#10b981")]
    #[case("VERY_HIGH", "#6b7280")]
    #[case("", "#6b7280")]
    fn colours(#[case] severity: &str, #[case] expected: &str) {
        assert_eq!(severity_colour(severity), expected);
    }

    #[rstest]
    fn every_region_key_is_normalised_and_unique() {
        for (index, profile) in REGIONS.iter().enumerate() {
            assert_eq!(profile.key, profile.key.trim().to_lowercase());
            assert!(
                REGIONS
                    .iter()
                    .skip(index + 1)
                    .all(|other| other.key != profile.key),
                "duplicate region `{}`",
                profile.key
            );
        }
        assert_eq!(REGIONS.len(), 19);
    }

    #[rstest]
    fn multi_word_regions_are_title_cased() {
        let advisory = regional_advisory("tamil NADU");
        assert_eq!(advisory.region, "Tamil Nadu");
        assert_eq!(advisory.recommended_crops.first(), Some(&"Finger Millet"));
    }

    #[rstest]
    fn unknown_region_gets_the_national_profile() {
        let advisory = regional_advisory("atlantis");
        assert_eq!(advisory.region, "Atlantis");
        assert_eq!(advisory.severity, Severity::Moderate);
        assert_eq!(
            advisory.statistics,
            "National average: 40% of children under 5 are anemic"
        );
    }

    #[rstest]
    fn serialises_severity_in_snake_case() {
        let json = serde_json::to_value(regional_advisory("Odisha")).expect("serialise");
        assert_eq!(json["severity"], "very_high");
        assert_eq!(json["deficiencies"][0], "Iron");
    }
}
