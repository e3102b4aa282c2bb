//! Caller-supplied context and the defaults that fill its gaps.

use nutrigrow_core::{GrowingConditions, HealthProfile};
use serde::Deserialize;

/// Climate readings a caller may already know.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClimateContext {
    /// Ambient temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
}

/// Optional facts accompanying a question.
///
/// Every field may be omitted; [`AssistantDefaults`] supplies the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AskContext {
    /// Climate readings.
    pub climate: Option<ClimateContext>,
    /// Soil moisture in percent.
    pub moisture: Option<f64>,
    /// Soil category.
    pub soil_type: Option<String>,
    /// Soil nitrogen level.
    pub nitrogen: Option<f64>,
    /// Soil phosphorous level.
    pub phosphorous: Option<f64>,
    /// Soil potassium level.
    pub potassium: Option<f64>,
    /// Age in whole years.
    pub age: Option<u32>,
    /// Body mass index.
    pub bmi: Option<f64>,
    /// Health condition.
    pub condition: Option<String>,
    /// Diet preference.
    pub diet: Option<String>,
}

/// Placeholder values used when a question arrives without context.
///
/// These are configuration, not domain facts; deployments may override
/// any of them from a JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantDefaults {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil moisture in percent.
    pub moisture: f64,
    /// Soil category.
    pub soil_type: String,
    /// Soil nitrogen level.
    pub nitrogen: f64,
    /// Soil phosphorous level.
    pub phosphorous: f64,
    /// Soil potassium level.
    pub potassium: f64,
    /// Crops returned for a crop question.
    pub crop_limit: usize,
    /// Age in whole years.
    pub age: u32,
    /// Body mass index.
    pub bmi: f64,
    /// Health condition.
    pub condition: String,
    /// Diet preference.
    pub diet: String,
    /// Foods returned for a nutrition question.
    pub food_limit: usize,
}

impl Default for AssistantDefaults {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 60.0,
            moisture: 45.0,
            soil_type: "loamy".to_owned(),
            nitrogen: 50.0,
            phosphorous: 40.0,
            potassium: 45.0,
            crop_limit: 3,
            age: 30,
            bmi: 21.5,
            condition: "general".to_owned(),
            diet: "vegetarian".to_owned(),
            food_limit: 4,
        }
    }
}

impl AskContext {
    /// Field readings from the context, with gaps filled from `defaults`.
    #[must_use]
    pub fn growing_conditions(&self, defaults: &AssistantDefaults) -> GrowingConditions {
        let climate = self.climate.clone().unwrap_or_default();
        GrowingConditions {
            temperature: climate.temperature.unwrap_or(defaults.temperature),
            humidity: climate.humidity.unwrap_or(defaults.humidity),
            moisture: self.moisture.unwrap_or(defaults.moisture),
            soil_type: self
                .soil_type
                .clone()
                .unwrap_or_else(|| defaults.soil_type.clone()),
            nitrogen: self.nitrogen.unwrap_or(defaults.nitrogen),
            phosphorous: self.phosphorous.unwrap_or(defaults.phosphorous),
            potassium: self.potassium.unwrap_or(defaults.potassium),
        }
    }

    /// Health profile from the context, with gaps filled from `defaults`.
    ///
    /// `condition` replaces both the context and the default condition when
    /// given.
    #[must_use]
    pub fn health_profile(
        &self,
        defaults: &AssistantDefaults,
        condition: Option<String>,
    ) -> HealthProfile {
        HealthProfile {
            age: self.age.unwrap_or(defaults.age),
            bmi: self.bmi.unwrap_or(defaults.bmi),
            condition: condition
                .or_else(|| self.condition.clone())
                .unwrap_or_else(|| defaults.condition.clone()),
            diet: self.diet.clone().unwrap_or_else(|| defaults.diet.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_context_uses_every_default() {
        let defaults = AssistantDefaults::default();
        let conditions = AskContext::default().growing_conditions(&defaults);
        assert_eq!(
            conditions,
            GrowingConditions {
                temperature: 25.0,
                humidity: 60.0,
                moisture: 45.0,
                soil_type: "loamy".into(),
                nitrogen: 50.0,
                phosphorous: 40.0,
                potassium: 45.0,
            }
        );
        let profile = AskContext::default().health_profile(&defaults, None);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.condition, "general");
        assert_eq!(profile.diet, "vegetarian");
    }

    #[rstest]
    fn context_values_win_over_defaults() {
        let context: AskContext = serde_json::from_str(
            r#"{"climate": {"temperature": 31.5}, "soil_type": "Clayey", "age": 52}"#,
        )
        .expect("decode");
        let defaults = AssistantDefaults::default();

        let conditions = context.growing_conditions(&defaults);
        assert_eq!(conditions.temperature, 31.5);
        assert_eq!(conditions.humidity, 60.0);
        assert_eq!(conditions.soil_type, "Clayey");
        assert_eq!(context.health_profile(&defaults, None).age, 52);
    }

    #[rstest]
    fn extracted_condition_overrides_the_default() {
        let profile = AskContext::default()
            .health_profile(&AssistantDefaults::default(), Some("anemia".into()));
        assert_eq!(profile.condition, "anemia");
    }

    #[rstest]
    fn partial_defaults_document_keeps_the_rest() {
        let defaults: AssistantDefaults =
            serde_json::from_str(r#"{"soil_type": "sandy", "food_limit": 6}"#).expect("decode");
        assert_eq!(defaults.soil_type, "sandy");
        assert_eq!(defaults.food_limit, 6);
        assert_eq!(defaults.bmi, 21.5);
    }

    #[rstest]
    fn misspelt_defaults_are_rejected() {
        let err = serde_json::from_str::<AssistantDefaults>(r#"{"soil": "sandy"}"#)
            .expect_err("unknown field");
        assert!(err.to_string().contains("unknown field `soil`"), "{err}");
    }
}
