//! `region-advisory` and `severity-colour` subcommands.

use std::io::Write;

use clap::Parser;
use nutrigrow_scorer::{regional_advisory, severity_colour};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::write_json;
use crate::{ARG_REGION, ARG_SEVERITY, CliError, ENV_REGION, ENV_SEVERITY};

/// CLI arguments for the `region-advisory` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the micronutrient deficiency advisory for an Indian \
                 state. Unknown regions receive the national averages.",
    about = "Show the nutrition advisory for a region"
)]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct RegionAdvisoryArgs {
    /// State or territory name, matched case-insensitively.
    #[arg(value_name = "region")]
    #[serde(default)]
    pub(crate) region: Option<String>,
}

/// CLI arguments for the `severity-colour` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show the display colour for a deficiency severity")]
#[ortho_config(prefix = "NUTRIGROW")]
pub(crate) struct SeverityColourArgs {
    /// Severity level, e.g. `very_high`.
    #[arg(value_name = "severity")]
    #[serde(default)]
    pub(crate) severity: Option<String>,
}

#[derive(Debug, Serialize)]
struct SeverityColour {
    severity: String,
    colour: &'static str,
}

pub(crate) fn run_region_advisory(
    args: RegionAdvisoryArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let region = merged.region.ok_or(CliError::MissingArgument {
        field: ARG_REGION,
        env: ENV_REGION,
    })?;
    write_json(writer, &regional_advisory(&region))
}

pub(crate) fn run_severity_colour(
    args: SeverityColourArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let severity = merged.severity.ok_or(CliError::MissingArgument {
        field: ARG_SEVERITY,
        env: ENV_SEVERITY,
    })?;
    let colour = severity_colour(&severity);
    write_json(writer, &SeverityColour { severity, colour })
}
