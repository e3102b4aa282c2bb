//! HTTP completion provider backed by the Gemini `generateContent` API.
//!
//! [`GeminiCompletionProvider`] implements the synchronous
//! [`TextCompletion`](nutrigrow_core::TextCompletion) trait by blocking on
//! asynchronous `reqwest` calls, so the assistant stays usable from plain
//! synchronous code.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use nutrigrow_core::TextCompletion;
//! use nutrigrow_data::llm::{GeminiCompletionProvider, GeminiConfig};
//!
//! let config = GeminiConfig::new("api-key")
//!     .with_model("gemini-2.5-flash")
//!     .with_timeout(Duration::from_secs(10));
//! let provider = GeminiCompletionProvider::with_config(config)?;
//! let reply = provider.complete("Which crops suit loamy soil?")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod gemini;
mod provider;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_USER_AGENT, GeminiCompletionProvider, GeminiConfig,
    ProviderBuildError,
};
