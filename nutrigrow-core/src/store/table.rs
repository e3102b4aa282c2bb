//! Vector-backed reference tables.

use crate::{CropRecord, CropStore, FoodRecord, FoodStore};

/// Immutable in-memory crop table.
///
/// The store performs a linear scan; the reference datasets hold a few
/// thousand rows at most.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropTable {
    records: Vec<CropRecord>,
}

impl CropTable {
    /// Wrap already-validated rows.
    #[must_use]
    pub const fn new(records: Vec<CropRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the table holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow every row in table order.
    #[must_use]
    pub fn records(&self) -> &[CropRecord] {
        &self.records
    }
}

impl FromIterator<CropRecord> for CropTable {
    fn from_iter<I: IntoIterator<Item = CropRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CropStore for CropTable {
    fn crops(&self) -> Box<dyn Iterator<Item = &CropRecord> + Send + '_> {
        Box::new(self.records.iter())
    }
}

/// Immutable in-memory food table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodTable {
    records: Vec<FoodRecord>,
}

impl FoodTable {
    /// Wrap already-validated rows.
    #[must_use]
    pub const fn new(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the table holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow every row in table order.
    #[must_use]
    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }
}

impl FromIterator<FoodRecord> for FoodTable {
    fn from_iter<I: IntoIterator<Item = FoodRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FoodStore for FoodTable {
    fn foods(&self) -> Box<dyn Iterator<Item = &FoodRecord> + Send + '_> {
        Box::new(self.records.iter())
    }
}
