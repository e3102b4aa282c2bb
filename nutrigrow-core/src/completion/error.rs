use thiserror::Error;

/// Errors from [`crate::completion::TextCompletion::complete`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// No completion backend is configured.
    #[error("no language model is configured")]
    Unavailable,

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The endpoint that timed out.
        url: String,
        /// The timeout duration in seconds.
        timeout_secs: u64,
    },

    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// The endpoint that returned the error.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error message from the service or client.
        message: String,
    },

    /// Connecting to the service failed.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// The endpoint that could not be reached.
        url: String,
        /// Underlying error message.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to parse completion response: {message}")]
    ParseError {
        /// Description of the parse failure.
        message: String,
    },

    /// The service answered but produced no text.
    #[error("completion response contained no text")]
    EmptyResponse,
}
