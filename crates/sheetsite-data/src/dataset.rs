//! In-memory dataset loaded from the input workbook.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Header text of the date column.
pub const DATE_COLUMN: &str = "date";

/// Header text of the value column.
pub const VALUE_COLUMN: &str = "value";

/// First date of the sample dataset as (year, month, day).
pub const SAMPLE_START: (i32, u32, u32) = (2024, 12, 30);

/// Values of the sample dataset, one per consecutive day.
pub const SAMPLE_VALUES: [f64; 10] = [10.0, 13.0, 11.0, 15.0, 12.0, 18.0, 17.0, 22.0, 21.0, 25.0];

/// A single `date`/`value` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub date: NaiveDateTime,
    pub value: f64,
}

/// Rows in file order. Never sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The fixed ten-row dataset written by the seeder.
    pub fn sample() -> Self {
        let (year, month, day) = SAMPLE_START;
        let start = NaiveDate::from_ymd_opt(year, month, day)
            .expect("sample start is a valid calendar date")
            .and_time(NaiveTime::MIN);

        let rows = SAMPLE_VALUES
            .iter()
            .enumerate()
            .map(|(offset, &value)| Row {
                date: start + Duration::days(offset as i64),
                value,
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.rows.iter().map(|r| r.date)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_has_ten_consecutive_days() {
        let sample = Dataset::sample();

        assert_eq!(sample.len(), 10);

        let first = sample.rows()[0].date;
        assert_eq!(first.date(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());

        let dates: Vec<_> = sample.dates().collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn sample_values_match_fixed_sequence() {
        let values: Vec<f64> = Dataset::sample().values().collect();

        assert_eq!(values, vec![10.0, 13.0, 11.0, 15.0, 12.0, 18.0, 17.0, 22.0, 21.0, 25.0]);
    }

    #[test]
    fn default_is_empty() {
        let empty = Dataset::default();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }
}
