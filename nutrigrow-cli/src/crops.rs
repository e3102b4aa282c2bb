//! `recommend-crop` and `crop-details` subcommands.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use nutrigrow_core::{CropDetailsQuery, CropQuery, CropTable};
use nutrigrow_data::load_crop_table;
use nutrigrow_scorer::CropMatcher;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_json, require_existing, write_json};
use crate::{
    ARG_CROP_DATASET, ARG_REQUEST, CliError, DEFAULT_CROP_DATASET, ENV_CROP_DETAILS_REQUEST,
    ENV_RECOMMEND_CROP_REQUEST,
};

/// CLI arguments for the `recommend-crop` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend crop types for a field. The request is a JSON \
                 object with temperature, humidity, moisture, soil_type, \
                 nitrogen, phosphorous, potassium and an optional limit.",
    about = "Recommend crops for a field"
)]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct RecommendCropArgs {
    /// Path to a JSON file containing the field readings.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the crop reference CSV.
    #[arg(long = ARG_CROP_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) crop_dataset: Option<Utf8PathBuf>,
}

/// CLI arguments for the `crop-details` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Explain how well one crop suits a field. The request is \
                 the recommend-crop request plus a crop_name.",
    about = "Explain one crop's fit for a field"
)]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct CropDetailsArgs {
    /// Path to a JSON file containing the crop name and field readings.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the crop reference CSV.
    #[arg(long = ARG_CROP_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) crop_dataset: Option<Utf8PathBuf>,
}

impl RecommendCropArgs {
    pub(crate) fn into_config(self) -> Result<CropRequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CropRequestConfig::try_from(merged)
    }
}

impl CropDetailsArgs {
    pub(crate) fn into_config(self) -> Result<CropRequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CropRequestConfig::try_from(merged)
    }
}

/// Resolved configuration shared by the crop subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CropRequestConfig {
    /// Path to the JSON request.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the crop reference CSV.
    pub(crate) crop_dataset: Utf8PathBuf,
}

impl CropRequestConfig {
    fn resolve(
        request_path: Option<Utf8PathBuf>,
        crop_dataset: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<Self, CliError> {
        let request = request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env,
        })?;
        Ok(Self {
            request_path: request,
            crop_dataset: crop_dataset.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CROP_DATASET)),
        })
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        require_existing(&self.crop_dataset, ARG_CROP_DATASET)
    }
}

impl TryFrom<RecommendCropArgs> for CropRequestConfig {
    type Error = CliError;

    fn try_from(args: RecommendCropArgs) -> Result<Self, Self::Error> {
        Self::resolve(
            args.request_path,
            args.crop_dataset,
            ENV_RECOMMEND_CROP_REQUEST,
        )
    }
}

impl TryFrom<CropDetailsArgs> for CropRequestConfig {
    type Error = CliError;

    fn try_from(args: CropDetailsArgs) -> Result<Self, Self::Error> {
        Self::resolve(args.request_path, args.crop_dataset, ENV_CROP_DETAILS_REQUEST)
    }
}

fn open_matcher(config: &CropRequestConfig) -> Result<CropMatcher<CropTable>, CliError> {
    config.validate_sources()?;
    let (table, _) = load_crop_table(&config.crop_dataset)?;
    Ok(CropMatcher::new(table))
}

pub(crate) fn run_recommend_crop(
    args: RecommendCropArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let matcher = open_matcher(&config)?;
    let query: CropQuery = load_json(&config.request_path, ARG_REQUEST)?;
    write_json(writer, &matcher.recommend(&query)?)
}

pub(crate) fn run_crop_details(
    args: CropDetailsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let matcher = open_matcher(&config)?;
    let query: CropDetailsQuery = load_json(&config.request_path, ARG_REQUEST)?;
    write_json(writer, &matcher.details(&query)?)
}
