//! `ask` subcommand: the natural-language front door.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use nutrigrow_assistant::{AskContext, Assistant, AssistantDefaults};
use nutrigrow_core::{TextCompletion, UnavailableCompletion};
use nutrigrow_data::{GeminiCompletionProvider, GeminiConfig, load_crop_table, load_food_table};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_json_or_default, require_existing, write_json};
use crate::{
    ARG_CONTEXT, ARG_CROP_DATASET, ARG_DEFAULTS, ARG_FOOD_DATASET, ARG_GEMINI_API_KEY,
    ARG_GEMINI_BASE_URL, ARG_GEMINI_MODEL, ARG_LLM_TIMEOUT_SECS, ARG_QUESTION, CliError,
    DEFAULT_CROP_DATASET, DEFAULT_FOOD_DATASET, ENV_QUESTION,
};

const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// CLI arguments for the `ask` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Answer a free-text question about crops or nutrition. \
                 Without a Gemini API key the answer is built from fixed \
                 templates instead of model output.",
    about = "Ask the assistant a question"
)]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct AskArgs {
    /// The question to answer.
    #[arg(value_name = "question")]
    #[serde(default)]
    pub(crate) question: Option<String>,
    /// JSON file with context values (climate, soil, age, bmi, ...).
    #[arg(long = ARG_CONTEXT, value_name = "path")]
    #[serde(default)]
    pub(crate) context: Option<Utf8PathBuf>,
    /// JSON file overriding the placeholder values for missing context.
    #[arg(long = ARG_DEFAULTS, value_name = "path")]
    #[serde(default)]
    pub(crate) defaults: Option<Utf8PathBuf>,
    /// Path to the crop reference CSV.
    #[arg(long = ARG_CROP_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) crop_dataset: Option<Utf8PathBuf>,
    /// Path to the food reference CSV.
    #[arg(long = ARG_FOOD_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) food_dataset: Option<Utf8PathBuf>,
    /// API key for the Gemini service; templates are used when absent.
    #[arg(long = ARG_GEMINI_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) gemini_api_key: Option<String>,
    /// Gemini model name.
    #[arg(long = ARG_GEMINI_MODEL, value_name = "model")]
    #[serde(default)]
    pub(crate) gemini_model: Option<String>,
    /// Gemini service root, e.g. a local proxy.
    #[arg(long = ARG_GEMINI_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) gemini_base_url: Option<String>,
    /// Timeout for each model call, in seconds.
    #[arg(long = ARG_LLM_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) llm_timeout_secs: Option<u64>,
}

impl AskArgs {
    pub(crate) fn into_config(self) -> Result<AskConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AskConfig::try_from(merged)
    }
}

/// Resolved `ask` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct AskConfig {
    pub(crate) question: String,
    pub(crate) context: Option<Utf8PathBuf>,
    pub(crate) defaults: Option<Utf8PathBuf>,
    pub(crate) crop_dataset: Utf8PathBuf,
    pub(crate) food_dataset: Utf8PathBuf,
    /// `None` when no API key is configured.
    pub(crate) gemini: Option<GeminiConfig>,
}

impl AskConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.crop_dataset, ARG_CROP_DATASET)?;
        require_existing(&self.food_dataset, ARG_FOOD_DATASET)?;
        if let Some(path) = &self.context {
            require_existing(path, ARG_CONTEXT)?;
        }
        if let Some(path) = &self.defaults {
            require_existing(path, ARG_DEFAULTS)?;
        }
        Ok(())
    }
}

impl TryFrom<AskArgs> for AskConfig {
    type Error = CliError;

    fn try_from(args: AskArgs) -> Result<Self, Self::Error> {
        let question = args.question.ok_or(CliError::MissingArgument {
            field: ARG_QUESTION,
            env: ENV_QUESTION,
        })?;
        let timeout =
            Duration::from_secs(args.llm_timeout_secs.unwrap_or(DEFAULT_LLM_TIMEOUT_SECS));
        let model = args.gemini_model;
        let base_url = args.gemini_base_url;
        let gemini = args
            .gemini_api_key
            .filter(|key| !key.trim().is_empty())
            .map(|key| {
                let mut config = GeminiConfig::new(key).with_timeout(timeout);
                if let Some(name) = model {
                    config = config.with_model(name);
                }
                if let Some(url) = base_url {
                    config = config.with_base_url(url);
                }
                config
            });

        Ok(Self {
            question,
            context: args.context,
            defaults: args.defaults,
            crop_dataset: args
                .crop_dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CROP_DATASET)),
            food_dataset: args
                .food_dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_FOOD_DATASET)),
            gemini,
        })
    }
}

/// Builds the completion backend for the current `ask` invocation.
pub(crate) trait CompletionBuilder {
    fn build(&self, config: &AskConfig) -> Result<Box<dyn TextCompletion>, CliError>;
}

pub(crate) struct DefaultCompletionBuilder;

impl CompletionBuilder for DefaultCompletionBuilder {
    fn build(&self, config: &AskConfig) -> Result<Box<dyn TextCompletion>, CliError> {
        let Some(gemini) = &config.gemini else {
            info!("no Gemini API key configured; answering from templates");
            return Ok(Box::new(UnavailableCompletion));
        };
        let provider = GeminiCompletionProvider::with_config(gemini.clone()).map_err(|source| {
            CliError::BuildCompletionProvider {
                base_url: gemini.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_ask(args: AskArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_ask_with(args, &DefaultCompletionBuilder, writer)
}

pub(crate) fn run_ask_with(
    args: AskArgs,
    builder: &dyn CompletionBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;

    let context: AskContext = load_json_or_default(config.context.as_deref(), ARG_CONTEXT)?;
    let defaults: AssistantDefaults =
        load_json_or_default(config.defaults.as_deref(), ARG_DEFAULTS)?;
    let (crops, _) = load_crop_table(&config.crop_dataset)?;
    let (foods, _) = load_food_table(&config.food_dataset)?;

    let assistant = Assistant::new(builder.build(&config)?, crops, foods).with_defaults(defaults);
    let answer = assistant.ask(&config.question, &context)?;
    write_json(writer, &answer)
}
