//! Loader for the food table.

use std::io;

use camino::Utf8Path;
use csv::StringRecord;
use log::info;
use nutrigrow_core::{FoodRecord, FoodTable};

use super::{DatasetError, LoadReport, number_field, open_reader, read_rows, text_field};

const COLUMNS: [&str; 8] = [
    "Food_Item",
    "Category",
    "Calories (kcal)",
    "Protein (g)",
    "Carbohydrates (g)",
    "Sugars (g)",
    "Sodium (mg)",
    "Cholesterol (mg)",
];

/// Load the food reference table from a CSV file.
///
/// Rows that fail to parse or validate are skipped with a warning and
/// recorded in the returned [`LoadReport`].
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened or lacks a
/// required column.
pub fn load_food_table(path: &Utf8Path) -> Result<(FoodTable, LoadReport), DatasetError> {
    let (table, report) = read_food_table(open_reader(path)?, path)?;
    info!(
        "loaded {} food rows from {path} ({} skipped)",
        report.loaded,
        report.skipped()
    );
    Ok((table, report))
}

pub(super) fn read_food_table<R: io::Read>(
    reader: csv::Reader<R>,
    path: &Utf8Path,
) -> Result<(FoodTable, LoadReport), DatasetError> {
    let (rows, report) = read_rows(reader, path, COLUMNS, parse_row)?;
    Ok((FoodTable::new(rows), report))
}

fn parse_row(record: &StringRecord, indices: [usize; 8]) -> Result<FoodRecord, String> {
    let [item, category, calories, protein, carbohydrates, sugars, sodium, cholesterol] = indices;
    let [c_item, c_cat, c_cal, c_prot, c_carb, c_sug, c_na, c_chol] = COLUMNS;
    FoodRecord {
        food_item: text_field(record, item, c_item)?.to_owned(),
        category: text_field(record, category, c_cat)?.to_owned(),
        calories: number_field(record, calories, c_cal)?,
        protein: number_field(record, protein, c_prot)?,
        carbohydrates: number_field(record, carbohydrates, c_carb)?,
        sugars: number_field(record, sugars, c_sug)?,
        sodium: number_field(record, sodium, c_na)?,
        cholesterol: number_field(record, cholesterol, c_chol)?,
    }
    .validate()
    .map_err(|err| err.to_string())
}
