//! Natural-language front door for the NutriGrow engine.
//!
//! [`Assistant::ask`] classifies a free-text question through a
//! [`TextCompletion`](nutrigrow_core::TextCompletion) backend, fills in the
//! matcher parameters from the caller's [`AskContext`] and the configured
//! [`AssistantDefaults`], runs the matching engine from `nutrigrow-scorer`
//! and asks the backend to turn the structured result into prose.
//!
//! The backend is never trusted to be available. Each model step has a
//! deterministic fallback, so an assistant built on
//! [`UnavailableCompletion`](nutrigrow_core::UnavailableCompletion) still
//! answers every question.

#![forbid(unsafe_code)]

mod assistant;
mod context;
mod intent;
mod prompts;

pub use assistant::{ANSWER_SOURCE, AssistError, Assistant, AssistantAnswer};
pub use context::{AskContext, AssistantDefaults, ClimateContext};
pub use intent::Intent;
