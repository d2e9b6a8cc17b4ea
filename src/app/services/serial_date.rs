//! Spreadsheet serial date conversion
//!
//! Serial dates count days (with a fractional time part) from the epoch
//! 1899-12-30. Conversion uses calendar arithmetic for both the day and the
//! second component: the integer day count rolls over month and year
//! boundaries through the calendar, and the fractional part is added as whole
//! seconds on the resulting date. A fixed 24h-in-milliseconds addition would
//! shift results by an hour across daylight-saving transitions; calendar
//! arithmetic on zone-free timestamps cannot.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::constants::{SECONDS_PER_DAY, SERIAL_EPOCH_YMD};
use crate::{Error, Result};

/// Convert a spreadsheet serial date to a calendar timestamp.
///
/// Fails with [`Error::InvalidSerial`] when the input is not finite or the
/// day count falls outside the representable calendar range.
pub fn to_timestamp(serial: f64) -> Result<NaiveDateTime> {
    if !serial.is_finite() {
        return Err(Error::invalid_serial(serial));
    }

    let days = serial.floor();
    let fraction = serial - days;
    let seconds = (fraction * SECONDS_PER_DAY).round() as i64;

    let (year, month, day) = SERIAL_EPOCH_YMD;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)
        .expect("serial epoch is a valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");

    let day_delta = TimeDelta::try_days(days as i64);
    let second_delta = TimeDelta::try_seconds(seconds);

    day_delta
        .zip(second_delta)
        .and_then(|(days, seconds)| {
            epoch
                .checked_add_signed(days)
                .and_then(|date| date.checked_add_signed(seconds))
        })
        .ok_or_else(|| Error::invalid_serial(serial))
}
