//! Conversion between spreadsheet date serials and `NaiveDateTime`.
//!
//! Workbooks store dates as a count of days since 1899-12-30, with the time of
//! day in the fractional part. Serials match Excel's 1900 date system from
//! 1900-03-01 onward.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .expect("serial epoch is a valid calendar date")
        .and_time(NaiveTime::MIN)
}

/// Convert a timestamp to its serial day number.
pub fn to_serial(datetime: NaiveDateTime) -> f64 {
    let delta = datetime - epoch();
    delta.num_seconds() as f64 / SECONDS_PER_DAY
}

/// Convert a serial day number back to a timestamp, rounded to the second.
pub fn from_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let seconds = (serial * SECONDS_PER_DAY).round();
    if seconds.abs() > i64::MAX as f64 {
        return None;
    }

    let delta = Duration::try_seconds(seconds as i64)?;
    epoch().checked_add_signed(delta)
}
