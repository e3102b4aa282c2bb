//! Question routing and answer formatting.

use log::{debug, warn};
use nutrigrow_core::{
    CropDetailsQuery, CropQuery, CropStore, FoodDetailsQuery, FoodQuery, FoodStore, QueryError,
    TextCompletion,
};
use nutrigrow_scorer::{
    CropDetailsOutcome, CropMatcher, CropRecommendation, FoodDetailsOutcome, FoodMatcher,
    NutritionPlan,
};
use serde::Serialize;
use thiserror::Error;

use crate::context::{AskContext, AssistantDefaults};
use crate::{Intent, prompts};

/// Value of [`AssistantAnswer::source`].
pub const ANSWER_SOURCE: &str = "nutrigrow-ai";

const GREETING: &str = "Hello! I can help you with crop recommendations, nutrition advice, or \
                        explain details about crops and foods. What would you like to know?";
const NO_SUBJECT: &str = "Please specify what you would like to know more about.";
const GENERIC_ANSWER: &str =
    "I've processed your request. Please check the detailed data for more information.";
/// How many names the template answers mention.
const FALLBACK_NAMES: usize = 3;

/// Errors that abort a question.
///
/// Completion failures never appear here; they fall back to fixed text.
#[derive(Debug, Error)]
pub enum AssistError {
    /// The parameters assembled from context and defaults were invalid.
    #[error("invalid parameters: {0}")]
    Query(#[from] QueryError),
    /// The routed result could not be rendered as JSON.
    #[error("failed to render the answer data: {0}")]
    Render(#[from] serde_json::Error),
}

/// Reply to a free-text question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantAnswer {
    /// Prose for the user.
    pub answer: String,
    /// Always [`ANSWER_SOURCE`].
    pub source: &'static str,
    /// How the question was classified.
    pub intent: Intent,
    /// The structured result the answer was written from.
    pub raw_data: serde_json::Value,
}

/// Structured result of routing one question.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Routed {
    Crops(CropRecommendation),
    Foods(NutritionPlan),
    Crop(CropDetailsOutcome),
    Food(FoodDetailsOutcome),
    Details { details: String },
    Greeting { message: &'static str },
}

impl Routed {
    fn fallback_answer(&self) -> String {
        match self {
            Self::Crops(result) if !result.recommended_crops.is_empty() => format!(
                "Based on your conditions, I recommend growing: {}. These crops are \
                 well-suited to your region.",
                leading_names(&result.recommended_crops)
            ),
            Self::Foods(plan) if !plan.recommended_foods.is_empty() => format!(
                "For your health needs, I suggest including: {} in your diet.",
                leading_names(&plan.recommended_foods)
            ),
            Self::Details { details } => details.clone(),
            _ => GENERIC_ANSWER.to_owned(),
        }
    }
}

fn leading_names(names: &[String]) -> String {
    names
        .iter()
        .take(FALLBACK_NAMES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Natural-language front door over the crop and food matchers.
///
/// Every language-model step is best effort: a failed classification reads
/// as [`Intent::General`], failed extractions fall back to defaults, and a
/// failed paraphrase is replaced by a fixed template sentence.
///
/// # Examples
/// ```
/// use nutrigrow_assistant::{AskContext, Assistant, Intent};
/// use nutrigrow_core::UnavailableCompletion;
/// use nutrigrow_core::test_support::{sample_crop_table, sample_food_table};
///
/// let assistant = Assistant::new(UnavailableCompletion, sample_crop_table(), sample_food_table());
/// let answer = assistant.ask("hello", &AskContext::default())?;
/// assert_eq!(answer.intent, Intent::General);
/// # Ok::<(), nutrigrow_assistant::AssistError>(())
/// ```
#[derive(Debug)]
pub struct Assistant<C, CS, FS> {
    completion: C,
    crops: CropMatcher<CS>,
    foods: FoodMatcher<FS>,
    defaults: AssistantDefaults,
}

impl<C, CS, FS> Assistant<C, CS, FS>
where
    C: TextCompletion,
    CS: CropStore,
    FS: FoodStore,
{
    /// Build an assistant with the built-in defaults.
    #[must_use]
    pub fn new(completion: C, crops: CS, foods: FS) -> Self {
        Self {
            completion,
            crops: CropMatcher::new(crops),
            foods: FoodMatcher::new(foods),
            defaults: AssistantDefaults::default(),
        }
    }

    /// Replace the placeholder values used for missing context.
    #[must_use]
    pub fn with_defaults(mut self, defaults: AssistantDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// The placeholder values in use.
    #[must_use]
    pub const fn defaults(&self) -> &AssistantDefaults {
        &self.defaults
    }

    /// Borrow the completion backend.
    #[must_use]
    pub const fn completion(&self) -> &C {
        &self.completion
    }

    /// Answer `question`, drawing parameters from `context` and the
    /// defaults.
    ///
    /// # Errors
    /// Returns [`AssistError`] when the assembled parameters fail
    /// validation, e.g. a blank `soil_type` in the context.
    pub fn ask(&self, question: &str, context: &AskContext) -> Result<AssistantAnswer, AssistError> {
        let intent = self.classify(question);
        debug!("question classified as {intent}");

        let routed = match intent {
            Intent::CropRecommendation => self.recommend_crops(context)?,
            Intent::NutritionRecommendation => self.plan_nutrition(question, context)?,
            Intent::Explanation => self.explain(question, context)?,
            Intent::General => Routed::Greeting { message: GREETING },
        };

        let raw_data = serde_json::to_value(&routed)?;
        let answer = self.paraphrase(question, intent, &raw_data, &routed)?;
        Ok(AssistantAnswer {
            answer,
            source: ANSWER_SOURCE,
            intent,
            raw_data,
        })
    }

    fn ask_model(&self, step: &str, prompt: &str) -> Option<String> {
        match self.completion.complete(prompt) {
            Ok(reply) => Some(reply),
            Err(err) => {
                warn!("{step} failed: {err}");
                None
            }
        }
    }

    fn classify(&self, question: &str) -> Intent {
        self.ask_model("intent classification", &prompts::classify(question))
            .map_or(Intent::General, |reply| Intent::from_reply(&reply))
    }

    fn extract_condition(&self, question: &str) -> String {
        self.ask_model("condition extraction", &prompts::extract_condition(question))
            .map(|reply| reply.trim().to_lowercase())
            .filter(|condition| !condition.is_empty())
            .unwrap_or_else(|| "general".to_owned())
    }

    fn extract_subject(&self, question: &str) -> Option<String> {
        self.ask_model("subject extraction", &prompts::extract_subject(question))
            .map(|reply| reply.trim().to_owned())
            .filter(|subject| !subject.is_empty() && !subject.eq_ignore_ascii_case("none"))
    }

    fn recommend_crops(&self, context: &AskContext) -> Result<Routed, QueryError> {
        let query = CropQuery::new(context.growing_conditions(&self.defaults))
            .with_limit(self.defaults.crop_limit);
        Ok(Routed::Crops(self.crops.recommend(&query)?))
    }

    fn plan_nutrition(&self, question: &str, context: &AskContext) -> Result<Routed, QueryError> {
        let extracted = if context.condition.is_none() {
            Some(self.extract_condition(question))
        } else {
            None
        };
        let query = FoodQuery::new(context.health_profile(&self.defaults, extracted))
            .with_limit(self.defaults.food_limit);
        Ok(Routed::Foods(self.foods.plan(&query)?))
    }

    /// Crop details first, then food details, then a fixed message.
    fn explain(&self, question: &str, context: &AskContext) -> Result<Routed, QueryError> {
        let Some(subject) = self.extract_subject(question) else {
            return Ok(Routed::Details {
                details: NO_SUBJECT.to_owned(),
            });
        };

        let crop = self.crops.details(&CropDetailsQuery {
            crop_name: subject.clone(),
            conditions: context.growing_conditions(&self.defaults),
        })?;
        if let CropDetailsOutcome::Found(_) = crop {
            return Ok(Routed::Crop(crop));
        }

        let food = self.foods.details(&FoodDetailsQuery {
            food_name: subject.clone(),
            profile: context.health_profile(&self.defaults, None),
        })?;
        if let FoodDetailsOutcome::Found(_) = food {
            return Ok(Routed::Food(food));
        }

        debug!("`{subject}` is neither a known crop nor a known food");
        Ok(Routed::Details {
            details: format!("No detailed information available for {subject}"),
        })
    }

    fn paraphrase(
        &self,
        question: &str,
        intent: Intent,
        raw_data: &serde_json::Value,
        routed: &Routed,
    ) -> Result<String, serde_json::Error> {
        let data = serde_json::to_string_pretty(raw_data)?;
        Ok(self
            .ask_model("answer formatting", &prompts::paraphrase(question, intent, &data))
            .map(|reply| reply.trim().to_owned())
            .unwrap_or_else(|| routed.fallback_answer()))
    }
}
