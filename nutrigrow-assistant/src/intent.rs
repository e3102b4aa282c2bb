//! Question categories the assistant routes on.

use std::fmt;

use serde::Serialize;

/// What a free-text question is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Which crops to grow.
    CropRecommendation,
    /// Which foods to eat.
    NutritionRecommendation,
    /// Why or how, about one crop or food.
    Explanation,
    /// Greetings and anything off-topic.
    General,
}

impl Intent {
    /// Every intent in the order the classifier prompt lists them.
    pub const ALL: [Self; 4] = [
        Self::CropRecommendation,
        Self::NutritionRecommendation,
        Self::Explanation,
        Self::General,
    ];

    /// The wire name, e.g. `crop_recommendation`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CropRecommendation => "crop_recommendation",
            Self::NutritionRecommendation => "nutrition_recommendation",
            Self::Explanation => "explanation",
            Self::General => "general",
        }
    }

    /// Read a classifier reply.
    ///
    /// The reply is trimmed and lower-cased and must then equal a wire name
    /// exactly; anything else is [`Intent::General`].
    ///
    /// # Examples
    /// ```
    /// use nutrigrow_assistant::Intent;
    ///
    /// assert_eq!(Intent::from_reply(" Explanation\n"), Intent::Explanation);
    /// assert_eq!(Intent::from_reply("crops please"), Intent::General);
    /// ```
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        let key = reply.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == key)
            .unwrap_or(Self::General)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("crop_recommendation", Intent::CropRecommendation)]
    #[case("NUTRITION_RECOMMENDATION", Intent::NutritionRecommendation)]
    #[case("  general ", Intent::General)]
    #[case("Category: explanation", Intent::General)]
    #[case("", Intent::General)]
    fn replies_must_match_exactly(#[case] reply: &str, #[case] expected: Intent) {
        assert_eq!(Intent::from_reply(reply), expected);
    }

    #[rstest]
    fn display_uses_the_wire_name() {
        assert_eq!(Intent::NutritionRecommendation.to_string(), "nutrition_recommendation");
    }
}
