//! Blocking [`TextCompletion`] over the Gemini HTTP API.

use std::fmt;
use std::time::Duration;

use log::debug;
use nutrigrow_core::{CompletionError, TextCompletion};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::gemini::{GenerateRequest, GenerateResponse};

/// Error type for [`GeminiCompletionProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Public endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default user agent for completion requests.
pub const DEFAULT_USER_AGENT: &str = "nutrigrow-assistant/0.1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`GeminiCompletionProvider`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// Model name, e.g. `"gemini-2.5-flash"`.
    pub model: String,
    /// Service root without the `/v1beta` suffix.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a configuration with the given API key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the service root, e.g. a local proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Completion provider calling Gemini's `generateContent` endpoint.
///
/// The provider owns a `current_thread` Tokio runtime reused across calls.
/// When invoked from inside a multi-threaded runtime it borrows that
/// runtime's handle through [`tokio::task::block_in_place`] instead, which
/// avoids nested-runtime panics.
pub struct GeminiCompletionProvider {
    client: Client,
    config: GeminiConfig,
    runtime: Runtime,
}

impl fmt::Debug for GeminiCompletionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiCompletionProvider")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl GeminiCompletionProvider {
    /// Create a provider with default settings for `api_key`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(GeminiConfig::new(api_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: GeminiConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The configuration the provider was built with.
    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the `generateContent` URL for the configured model.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn complete_async(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = self.generate_url();
        debug!("requesting completion from {url}");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let body: GenerateResponse =
            response
                .json()
                .await
                .map_err(|err| CompletionError::ParseError {
                    message: err.to_string(),
                })?;

        body.into_text().ok_or(CompletionError::EmptyResponse)
    }

    /// Convert a reqwest error to a `CompletionError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> CompletionError {
        if error.is_timeout() {
            return CompletionError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return CompletionError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        CompletionError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl TextCompletion for GeminiCompletionProvider {
    /// Send `prompt` and return the first candidate's text.
    ///
    /// Inside a `current_thread` Tokio runtime the call falls back to the
    /// provider's own runtime, which blocks the caller's executor for the
    /// duration of the request.
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let future = self.complete_async(prompt);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://generativelanguage.googleapis.com")]
    #[case("https://generativelanguage.googleapis.com/")]
    fn generate_url_names_the_model(#[case] base_url: &str) {
        let config = GeminiConfig::new("key")
            .with_base_url(base_url)
            .with_model("gemini-test");
        let provider = GeminiCompletionProvider::with_config(config).expect("provider should build");

        assert_eq!(
            provider.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-test:generateContent"
        );
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = GeminiConfig::new("secret")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn debug_output_redacts_the_api_key() {
        let rendered = format!("{:?}", GeminiConfig::new("super-secret-key"));
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
