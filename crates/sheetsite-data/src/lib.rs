//! Spreadsheet dataset loading for sheetsite.
//!
//! This crate reads the `date`/`value` workbook that drives the generated page,
//! and seeds a small sample workbook when none exists yet.

pub mod dataset;
pub mod reader;
pub mod seed;
pub mod serial;

pub use dataset::{Dataset, Row, DATE_COLUMN, SAMPLE_START, SAMPLE_VALUES, VALUE_COLUMN};
pub use reader::read_dataset;
pub use seed::ensure_sample;

/// Errors that can occur when reading or writing the input workbook.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to read workbook {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to write workbook {path}: {message}")]
    Write { path: String, message: String },

    #[error("Workbook {0} contains no sheets")]
    NoSheet(String),

    #[error("Missing column '{column}' in header row")]
    MissingColumn { column: String },

    #[error("Row {row}: invalid date '{raw}'")]
    InvalidDate { row: u32, raw: String },

    #[error("Row {row}: invalid value '{raw}'")]
    InvalidValue { row: u32, raw: String },
}
