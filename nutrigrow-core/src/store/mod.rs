//! Read-only access to the crop and food reference tables.
//!
//! The [`CropStore`] and [`FoodStore`] traits are the only way matchers
//! see reference rows. [`CropTable`] and [`FoodTable`] are the in-memory
//! implementations built once at start-up; tests build them from synthetic
//! rows instead of loading files.

mod table;

pub use table::{CropTable, FoodTable};

use crate::{CropRecord, FoodRecord};

/// Read-only access to crop reference rows.
///
/// Rows must be yielded in a stable order: matchers break ties by the
/// position a row is yielded at, so two calls must agree.
///
/// # Examples
///
/// ```rust
/// use nutrigrow_core::{CropRecord, CropStore};
///
/// struct SingleRow(CropRecord);
///
/// impl CropStore for SingleRow {
///     fn crops(&self) -> Box<dyn Iterator<Item = &CropRecord> + Send + '_> {
///         Box::new(std::iter::once(&self.0))
///     }
/// }
///
/// let store = SingleRow(CropRecord {
///     temperature: 30.0,
///     humidity: 55.0,
///     moisture: 40.0,
///     soil_type: "Black".into(),
///     nitrogen: 10.0,
///     phosphorous: 20.0,
///     potassium: 30.0,
///     crop_type: "Cotton".into(),
/// });
/// assert_eq!(store.crops().count(), 1);
/// ```
pub trait CropStore: Send + Sync {
    /// Iterate over every crop row in table order.
    fn crops(&self) -> Box<dyn Iterator<Item = &CropRecord> + Send + '_>;
}

/// Read-only access to food reference rows.
///
/// The same ordering contract as [`CropStore`] applies.
pub trait FoodStore: Send + Sync {
    /// Iterate over every food row in table order.
    fn foods(&self) -> Box<dyn Iterator<Item = &FoodRecord> + Send + '_>;
}

impl<T: CropStore + ?Sized> CropStore for &T {
    fn crops(&self) -> Box<dyn Iterator<Item = &CropRecord> + Send + '_> {
        (**self).crops()
    }
}

impl<T: FoodStore + ?Sized> FoodStore for &T {
    fn foods(&self) -> Box<dyn Iterator<Item = &FoodRecord> + Send + '_> {
        (**self).foods()
    }
}

impl<T: CropStore + ?Sized> CropStore for std::sync::Arc<T> {
    fn crops(&self) -> Box<dyn Iterator<Item = &CropRecord> + Send + '_> {
        (**self).crops()
    }
}

impl<T: FoodStore + ?Sized> FoodStore for std::sync::Arc<T> {
    fn foods(&self) -> Box<dyn Iterator<Item = &FoodRecord> + Send + '_> {
        (**self).foods()
    }
}
