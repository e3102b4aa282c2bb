//! Core domain types for the NutriGrow engine.
//!
//! Reference rows ([`CropRecord`], [`FoodRecord`]) are validated once when a
//! table is built and never mutated afterwards. Matchers read them through
//! the [`CropStore`] and [`FoodStore`] traits so callers can inject synthetic
//! tables in tests. Query profiles carry the caller's parameters and are
//! validated before any scoring happens.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod completion;
mod crop;
mod food;
mod query;
pub mod store;
pub mod text;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use completion::{CompletionError, TextCompletion, UnavailableCompletion};
pub use crop::{CropRecord, CropRecordError, Npk};
pub use food::{FoodRecord, FoodRecordError, NON_VEGETARIAN_MARKERS};
pub use query::{
    CropDetailsQuery, CropQuery, DEFAULT_CROP_LIMIT, DEFAULT_FOOD_LIMIT, FoodDetailsQuery,
    FoodQuery, GrowingConditions, HealthProfile, QueryError,
};
pub use store::{CropStore, CropTable, FoodStore, FoodTable};
