//! Command-line interface for the NutriGrow engine.
//!
//! Every subcommand reads its inputs, runs one engine operation and prints
//! the result as pretty JSON on stdout. Options may also come from
//! `NUTRIGROW_*` environment variables or configuration files.
#![forbid(unsafe_code)]

mod advisory;
mod ask;
mod crops;
mod error;
mod foods;
mod inputs;

use std::io::Write;

use clap::{Parser, Subcommand};

pub use error::CliError;

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_CROP_DATASET: &str = "crop-dataset";
pub(crate) const ARG_FOOD_DATASET: &str = "food-dataset";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_SEVERITY: &str = "severity";
pub(crate) const ARG_QUESTION: &str = "question";
pub(crate) const ARG_CONTEXT: &str = "context";
pub(crate) const ARG_DEFAULTS: &str = "defaults";
pub(crate) const ARG_GEMINI_API_KEY: &str = "gemini-api-key";
pub(crate) const ARG_GEMINI_MODEL: &str = "gemini-model";
pub(crate) const ARG_GEMINI_BASE_URL: &str = "gemini-base-url";
pub(crate) const ARG_LLM_TIMEOUT_SECS: &str = "llm-timeout-secs";

pub(crate) const ENV_RECOMMEND_CROP_REQUEST: &str = "NUTRIGROW_CMDS_RECOMMEND_CROP_REQUEST_PATH";
pub(crate) const ENV_CROP_DETAILS_REQUEST: &str = "NUTRIGROW_CMDS_CROP_DETAILS_REQUEST_PATH";
pub(crate) const ENV_NUTRITION_PLAN_REQUEST: &str = "NUTRIGROW_CMDS_NUTRITION_PLAN_REQUEST_PATH";
pub(crate) const ENV_FOOD_DETAILS_REQUEST: &str = "NUTRIGROW_CMDS_FOOD_DETAILS_REQUEST_PATH";
pub(crate) const ENV_REGION: &str = "NUTRIGROW_CMDS_REGION_ADVISORY_REGION";
pub(crate) const ENV_SEVERITY: &str = "NUTRIGROW_CMDS_SEVERITY_COLOUR_SEVERITY";
pub(crate) const ENV_QUESTION: &str = "NUTRIGROW_CMDS_ASK_QUESTION";

pub(crate) const DEFAULT_CROP_DATASET: &str = "data/farmer_data.csv";
pub(crate) const DEFAULT_FOOD_DATASET: &str = "data/consumer_data.csv";

/// Run the NutriGrow CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, datasets or the
/// request are invalid, or when writing to stdout fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::RecommendCrop(args) => crops::run_recommend_crop(args, writer),
        Command::CropDetails(args) => crops::run_crop_details(args, writer),
        Command::NutritionPlan(args) => foods::run_nutrition_plan(args, writer),
        Command::FoodDetails(args) => foods::run_food_details(args, writer),
        Command::RegionAdvisory(args) => advisory::run_region_advisory(args, writer),
        Command::SeverityColour(args) => advisory::run_severity_colour(args, writer),
        Command::Ask(args) => ask::run_ask(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nutrigrow",
    about = "Crop and nutrition recommendations from reference datasets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend crop types for a field.
    RecommendCrop(crops::RecommendCropArgs),
    /// Explain how well one crop suits a field.
    CropDetails(crops::CropDetailsArgs),
    /// Recommend foods for a health profile.
    NutritionPlan(foods::NutritionPlanArgs),
    /// Explain how well one food suits a health profile.
    FoodDetails(foods::FoodDetailsArgs),
    /// Show the nutrition advisory for a region.
    RegionAdvisory(advisory::RegionAdvisoryArgs),
    /// Show the display colour for a deficiency severity.
    SeverityColour(advisory::SeverityColourArgs),
    /// Ask the assistant a free-text question.
    Ask(ask::AskArgs),
}

#[cfg(test)]
mod tests;
