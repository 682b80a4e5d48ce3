//! Sample workbook seeding.

use std::fs;
use std::path::Path;

use crate::dataset::{Dataset, DATE_COLUMN, VALUE_COLUMN};
use crate::serial::to_serial;
use crate::DataError;

/// Number format applied to seeded date cells.
const DATE_FORMAT: &str = "yyyy-mm-dd";

const DATE_COL: u32 = 1;
const VALUE_COL: u32 = 2;
const HEADER_ROW: u32 = 1;

/// Write the sample workbook to `path` unless a file already exists there.
///
/// Returns `true` when a new workbook was written. An existing file is left
/// untouched.
pub fn ensure_sample(path: &Path) -> Result<bool, DataError> {
    if path.exists() {
        tracing::debug!("Input {} exists, skipping sample", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DataError::Io {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }

    write_dataset(path, &Dataset::sample())?;
    tracing::info!("Created sample workbook at {}", path.display());

    Ok(true)
}

/// Write a dataset as a single-sheet workbook with a `date`/`value` header.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), DataError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    sheet
        .get_cell_mut((DATE_COL, HEADER_ROW))
        .set_value(DATE_COLUMN);
    sheet
        .get_cell_mut((VALUE_COL, HEADER_ROW))
        .set_value(VALUE_COLUMN);

    for (index, row) in dataset.rows().iter().enumerate() {
        let line = HEADER_ROW + 1 + index as u32;

        sheet
            .get_cell_mut((DATE_COL, line))
            .set_value_number(to_serial(row.date));
        sheet
            .get_style_mut((DATE_COL, line))
            .get_number_format_mut()
            .set_format_code(DATE_FORMAT);

        sheet
            .get_cell_mut((VALUE_COL, line))
            .set_value_number(row.value);
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).map_err(|e| DataError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
