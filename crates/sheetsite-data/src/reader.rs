//! Workbook reader.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use umya_spreadsheet::Worksheet;

use crate::dataset::{Dataset, Row, DATE_COLUMN, VALUE_COLUMN};
use crate::serial::from_serial;
use crate::DataError;

const HEADER_ROW: u32 = 1;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Read the first sheet of the workbook at `path` into a [`Dataset`].
///
/// The header row must contain `date` and `value` columns. Rows with both
/// cells blank are skipped; all others are kept in file order.
pub fn read_dataset(path: &Path) -> Result<Dataset, DataError> {
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| DataError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let sheet = book
        .get_sheet(&0)
        .ok_or_else(|| DataError::NoSheet(path.display().to_string()))?;

    let dataset = read_sheet(sheet)?;
    tracing::debug!("Read {} rows from {}", dataset.len(), path.display());

    Ok(dataset)
}

fn read_sheet(sheet: &Worksheet) -> Result<Dataset, DataError> {
    let date_col = find_column(sheet, DATE_COLUMN)?;
    let value_col = find_column(sheet, VALUE_COLUMN)?;

    let mut rows = Vec::new();

    for line in (HEADER_ROW + 1)..=sheet.get_highest_row() {
        let raw_date = sheet.get_value((date_col, line));
        let raw_value = sheet.get_value((value_col, line));

        if raw_date.trim().is_empty() && raw_value.trim().is_empty() {
            continue;
        }

        rows.push(Row {
            date: parse_date(&raw_date).ok_or_else(|| DataError::InvalidDate {
                row: line,
                raw: raw_date.clone(),
            })?,
            value: parse_value(&raw_value).ok_or_else(|| DataError::InvalidValue {
                row: line,
                raw: raw_value.clone(),
            })?,
        });
    }

    Ok(Dataset::new(rows))
}

fn find_column(sheet: &Worksheet, name: &str) -> Result<u32, DataError> {
    (1..=sheet.get_highest_column())
        .find(|&col| sheet.get_value((col, HEADER_ROW)) == name)
        .ok_or_else(|| DataError::MissingColumn {
            column: name.to_string(),
        })
}

/// Parse a date cell holding either a serial number or ISO-style text.
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(serial) = raw.parse::<f64>() {
        return from_serial(serial);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
