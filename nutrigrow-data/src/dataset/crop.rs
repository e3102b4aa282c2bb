//! Loader for the crop table.

use std::io;

use camino::Utf8Path;
use csv::StringRecord;
use log::info;
use nutrigrow_core::{CropRecord, CropTable};

use super::{DatasetError, LoadReport, number_field, open_reader, read_rows, text_field};

const COLUMNS: [&str; 8] = [
    "Temperature",
    "Humidity",
    "Moisture",
    "Soil Type",
    "Nitrogen",
    "Phosphorous",
    "Potassium",
    "Crop Type",
];

/// Load the crop reference table from a CSV file.
///
/// Rows that fail to parse or validate are skipped with a warning and
/// recorded in the returned [`LoadReport`].
///
/// # Errors
/// Returns [`DatasetError`] when the file cannot be opened or lacks a
/// required column.
pub fn load_crop_table(path: &Utf8Path) -> Result<(CropTable, LoadReport), DatasetError> {
    let (table, report) = read_crop_table(open_reader(path)?, path)?;
    info!(
        "loaded {} crop rows from {path} ({} skipped)",
        report.loaded,
        report.skipped()
    );
    Ok((table, report))
}

pub(super) fn read_crop_table<R: io::Read>(
    reader: csv::Reader<R>,
    path: &Utf8Path,
) -> Result<(CropTable, LoadReport), DatasetError> {
    let (rows, report) = read_rows(reader, path, COLUMNS, parse_row)?;
    Ok((CropTable::new(rows), report))
}

fn parse_row(record: &StringRecord, indices: [usize; 8]) -> Result<CropRecord, String> {
    let [temperature, humidity, moisture, soil, nitrogen, phosphorous, potassium, crop] = indices;
    let [c_temp, c_hum, c_moist, c_soil, c_n, c_p, c_k, c_crop] = COLUMNS;
    CropRecord {
        temperature: number_field(record, temperature, c_temp)?,
        humidity: number_field(record, humidity, c_hum)?,
        moisture: number_field(record, moisture, c_moist)?,
        soil_type: text_field(record, soil, c_soil)?.to_owned(),
        nitrogen: number_field(record, nitrogen, c_n)?,
        phosphorous: number_field(record, phosphorous, c_p)?,
        potassium: number_field(record, potassium, c_k)?,
        crop_type: text_field(record, crop, c_crop)?.to_owned(),
    }
    .validate()
    .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reader_builder;
    use nutrigrow_core::CropStore;
    use rstest::rstest;

    fn read(csv: &str) -> Result<(CropTable, LoadReport), DatasetError> {
        read_crop_table(
            reader_builder().from_reader(csv.as_bytes()),
            Utf8Path::new("farmer.csv"),
        )
    }

    fn crop_names(table: &CropTable) -> Vec<&str> {
        table.crops().map(|row| row.crop_type.as_str()).collect()
    }

    #[rstest]
    fn parses_rows_with_padded_headers() {
        let csv = "Temperature,Humidity ,Moisture,Soil Type,Crop Type,Nitrogen,Potassium,Phosphorous\n\
                   26,52,38,Sandy,Maize,37,0,0\n\
                   29,52,45,Loamy,Sugarcane,12,10,0\n";
        let (table, report) = read(csv).expect("valid table");
        assert_eq!(report, LoadReport { loaded: 2, skipped_lines: Vec::new() });
        let second = table.crops().nth(1).expect("second row");
        assert_eq!(second.crop_type, "Sugarcane");
        assert!((second.potassium - 10.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn skips_unparseable_rows_and_keeps_the_rest() {
        let csv = "Temperature,Humidity,Moisture,Soil Type,Nitrogen,Phosphorous,Potassium,Crop Type\n\
                   26,52,38,Sandy,37,0,0,Maize\n\
                   hot,52,38,Sandy,37,0,0,Barley\n\
                   29,52,45,Loamy,12,0,36\n\
                   25,50,64,Loamy,50,40,45,Wheat\n";
        let (table, report) = read(csv).expect("lenient load");
        assert_eq!(crop_names(&table), ["Maize", "Wheat"]);
        assert_eq!(report.skipped_lines, [3, 4]);
        assert_eq!(report.loaded, 2);
    }

    #[rstest]
    fn blank_crop_type_is_skipped() {
        let csv = "Temperature,Humidity,Moisture,Soil Type,Nitrogen,Phosphorous,Potassium,Crop Type\n\
                   26,52,38,Sandy,37,0,0,\n\
                   26,52,38,Sandy,37,0,0,Maize\n";
        let (table, report) = read(csv).expect("lenient load");
        assert_eq!(crop_names(&table), ["Maize"]);
        assert_eq!(report.skipped_lines, [2]);
    }

    #[rstest]
    fn header_without_soil_column_is_rejected() {
        let csv = "Temperature,Humidity,Moisture,Nitrogen,Phosphorous,Potassium,Crop Type\n";
        assert!(matches!(
            read(csv),
            Err(DatasetError::MissingColumn {
                column: "Soil Type",
                ..
            })
        ));
    }
}
