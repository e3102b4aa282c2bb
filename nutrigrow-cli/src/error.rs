//! Error types emitted by the NutriGrow CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nutrigrow_assistant::AssistError;
use nutrigrow_core::QueryError;
use nutrigrow_data::{DatasetError, ProviderBuildError};
use thiserror::Error;

/// Errors emitted by the NutriGrow CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening a JSON input failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Option naming the input.
        field: &'static str,
        /// The input path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A JSON input could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option naming the input.
        field: &'static str,
        /// The input path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A request failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] QueryError),
    /// A reference dataset could not be loaded.
    #[error("failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),
    /// Constructing the completion provider failed.
    #[error("failed to build completion provider for {base_url:?}: {source}")]
    BuildCompletionProvider {
        /// Service root the provider was configured with.
        base_url: String,
        /// Underlying construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// The assistant could not answer.
    #[error(transparent)]
    Assist(#[from] AssistError),
    /// Serializing the response failed.
    #[error("failed to serialize response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
