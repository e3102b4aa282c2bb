//! `nutrition-plan` and `food-details` subcommands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use nutrigrow_core::{FoodDetailsQuery, FoodQuery, FoodTable};
use nutrigrow_data::load_food_table;
use nutrigrow_scorer::FoodMatcher;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_json, require_existing, write_json};
use crate::{
    ARG_FOOD_DATASET, ARG_REQUEST, CliError, DEFAULT_FOOD_DATASET, ENV_FOOD_DETAILS_REQUEST,
    ENV_NUTRITION_PLAN_REQUEST,
};

/// CLI arguments for the `nutrition-plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a nutrition plan for a consumer. The request is a \
                 JSON object with age, bmi, condition, diet and an optional \
                 limit.",
    about = "Recommend foods for a health profile"
)]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct NutritionPlanArgs {
    /// Path to a JSON file containing the health profile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the food reference CSV.
    #[arg(long = ARG_FOOD_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) food_dataset: Option<Utf8PathBuf>,
}

/// CLI arguments for the `food-details` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Explain how well one food suits a consumer. The request \
                 is the nutrition-plan request plus a food_name.",
    about = "Explain one food's fit for a health profile"
)]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct FoodDetailsArgs {
    /// Path to a JSON file containing the food name and health profile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the food reference CSV.
    #[arg(long = ARG_FOOD_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) food_dataset: Option<Utf8PathBuf>,
}

impl NutritionPlanArgs {
    pub(crate) fn into_config(self) -> Result<FoodRequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FoodRequestConfig::try_from(merged)
    }
}

impl FoodDetailsArgs {
    pub(crate) fn into_config(self) -> Result<FoodRequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        FoodRequestConfig::try_from(merged)
    }
}

/// Resolved configuration shared by the food subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FoodRequestConfig {
    /// Path to the JSON request.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the food reference CSV.
    pub(crate) food_dataset: Utf8PathBuf,
}

impl FoodRequestConfig {
    fn resolve(
        request_path: Option<Utf8PathBuf>,
        food_dataset: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let request = request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env,
        })?;
        Ok(Self {
            request_path: request,
            food_dataset: food_dataset.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_FOOD_DATASET)),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        require_existing(&self.food_dataset, ARG_FOOD_DATASET)
    }
}

impl TryFrom<NutritionPlanArgs> for FoodRequestConfig {
    type Error = CliError;

    fn try_from(args: NutritionPlanArgs) -> Result<Self, Self::Error> {
        Self::resolve(
            args.request_path,
            args.food_dataset,
            ENV_NUTRITION_PLAN_REQUEST,
        )
    }
}

impl TryFrom<FoodDetailsArgs> for FoodRequestConfig {
    type Error = CliError;

    fn try_from(args: FoodDetailsArgs) -> Result<Self, Self::Error> {
        Self::resolve(args.request_path, args.food_dataset, ENV_FOOD_DETAILS_REQUEST)
    }
}

fn open_matcher(config: &FoodRequestConfig) -> Result<FoodMatcher<FoodTable>, CliError> {
    config.validate_sources()?;
    let (table, report) = load_food_table(&config.food_dataset)?;
    debug!(
        "food table ready: {} rows, {} skipped",
        report.loaded,
        report.skipped()
    );
    Ok(FoodMatcher::new(table))
}

pub(crate) fn run_nutrition_plan(
    args: NutritionPlanArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let matcher = open_matcher(&config)?;
    let query: FoodQuery = load_json(&config.request_path, ARG_REQUEST)?;
    write_json(writer, &matcher.plan(&query)?)
}

pub(crate) fn run_food_details(
    args: FoodDetailsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let matcher = open_matcher(&config)?;
    let query: FoodDetailsQuery = load_json(&config.request_path, ARG_REQUEST)?;
    write_json(writer, &matcher.details(&query)?)
}
