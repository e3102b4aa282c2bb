//! CSV loaders for the crop and food reference tables.
//!
//! Header names are trimmed before they are matched, so `" Temparature "`
//! style padding in exported spreadsheets is tolerated. Columns not named
//! here are ignored.

mod crop;
mod food;

pub use crop::load_crop_table;
pub use food::load_food_table;

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use csv::StringRecord;
use log::warn;
use thiserror::Error;

/// Errors raised while loading a reference table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read header of {path}")]
    Header {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("dataset {path} has no `{column}` column")]
    MissingColumn {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Name of the missing column.
        column: &'static str,
    },
}

/// Summary of a table load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows accepted into the table.
    pub loaded: usize,
    /// Line numbers of rows that were skipped.
    pub skipped_lines: Vec<u64>,
}

impl LoadReport {
    /// Number of rows skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped_lines.len()
    }
}

fn open_reader(path: &Utf8Path) -> Result<csv::Reader<impl io::Read>, DatasetError> {
    let file = nutrigrow_fs::open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_owned(),
        source,
    })?;
    Ok(reader_builder().from_reader(file))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::Headers).flexible(true);
    builder
}

/// Read every row through `parse`, skipping the ones it rejects.
///
/// Skipped rows are logged with their line number and recorded in the
/// returned [`LoadReport`]. Only an unreadable header is an error.
fn read_rows<R, T, const N: usize>(
    mut reader: csv::Reader<R>,
    path: &Utf8Path,
    columns: [&'static str; N],
    parse: impl Fn(&StringRecord, [usize; N]) -> Result<T, String>,
) -> Result<(Vec<T>, LoadReport), DatasetError>
where
    R: io::Read,
{
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Header {
            path: path.to_owned(),
            source,
        })?
        .clone();
    let indices = column_indices(&headers, columns, path)?;

    let mut rows = Vec::new();
    let mut report = LoadReport::default();
    for result in reader.records() {
        let parsed = result
            .map_err(|err| {
                (
                    err.position().map_or(0, csv::Position::line),
                    err.to_string(),
                )
            })
            .and_then(|record| {
                parse(&record, indices).map_err(|message| (record_line(&record), message))
            });
        match parsed {
            Ok(row) => rows.push(row),
            Err((line, message)) => {
                warn!("skipping row at {path}:{line}: {message}");
                report.skipped_lines.push(line);
            }
        }
    }
    report.loaded = rows.len();
    Ok((rows, report))
}

/// Resolve the position of every required column in the header row.
fn column_indices<const N: usize>(
    headers: &StringRecord,
    columns: [&'static str; N],
    path: &Utf8Path,
) -> Result<[usize; N], DatasetError> {
    let mut indices = [0; N];
    for (slot, column) in indices.iter_mut().zip(columns) {
        *slot = headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| DatasetError::MissingColumn {
                path: path.to_owned(),
                column,
            })?;
    }
    Ok(indices)
}

fn text_field<'r>(
    record: &'r StringRecord,
    index: usize,
    column: &str,
) -> Result<&'r str, String> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| format!("missing value for `{column}`"))
}

fn number_field(record: &StringRecord, index: usize, column: &str) -> Result<f64, String> {
    let raw = text_field(record, index, column)?;
    raw.parse::<f64>()
        .map_err(|err| format!("`{column}` value {raw:?} is not a number: {err}"))
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn finds_trimmed_headers_in_any_order() {
        let mut reader = reader_builder().from_reader(" b , a ,c\n1,2,3\n".as_bytes());
        let headers = reader.headers().expect("header row").clone();
        let indices = column_indices(&headers, ["a", "b"], Utf8Path::new("t.csv"))
            .expect("columns present");
        assert_eq!(indices, [1, 0]);
    }

    #[rstest]
    fn reports_the_missing_column() {
        let headers = StringRecord::from(vec!["a"]);
        let err = column_indices(&headers, ["a", "Crop Type"], Utf8Path::new("t.csv"))
            .expect_err("column absent");
        assert!(matches!(
            err,
            DatasetError::MissingColumn {
                column: "Crop Type",
                ..
            }
        ));
    }

    #[rstest]
    #[case("12.5", Ok(12.5))]
    #[case(" 7 ", Ok(7.0))]
    fn parses_numbers(#[case] raw: &str, #[case] expected: Result<f64, ()>) {
        let record = StringRecord::from(vec![raw]);
        assert_eq!(number_field(&record, 0, "x").map_err(|_| ()), expected);
    }

    #[rstest]
    fn rejects_text_in_numeric_column() {
        let record = StringRecord::from(vec!["high"]);
        let message = number_field(&record, 0, "Sodium (mg)").expect_err("not a number");
        assert!(message.contains("Sodium (mg)"));
    }
}
