//! Turn prompts into free text through an external language model.
//!
//! The `TextCompletion` trait abstracts the single call the assistant makes
//! to a large language model: a prompt goes in, best-effort prose comes
//! out. Callers must treat every failure as recoverable and fall back to
//! deterministic output.

mod error;
mod provider;

pub use error::CompletionError;
pub use provider::{TextCompletion, UnavailableCompletion};
