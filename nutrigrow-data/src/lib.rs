//! Reference dataset loading and the HTTP language-model adapter.
//!
//! Responsibilities:
//! - Parse the crop and food CSV tables into validated, immutable
//!   [`CropTable`](nutrigrow_core::CropTable) and
//!   [`FoodTable`](nutrigrow_core::FoodTable) values.
//! - Provide [`GeminiCompletionProvider`], an HTTP implementation of
//!   [`TextCompletion`](nutrigrow_core::TextCompletion).
//!
//! Boundaries:
//! - Do not encode scoring rules (they live in `nutrigrow-scorer`).
//! - Loading happens once at start-up. Malformed rows are skipped and
//!   reported; an unreadable file or header is fatal to the caller.

#![forbid(unsafe_code)]

mod dataset;
pub mod llm;

pub use dataset::{DatasetError, LoadReport, load_crop_table, load_food_table};
pub use llm::{GeminiCompletionProvider, GeminiConfig, ProviderBuildError};
