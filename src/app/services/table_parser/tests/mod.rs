//! Shared fixtures for table parser tests

use chrono::{NaiveDate, NaiveDateTime};

mod parser_tests;
mod units_tests;

/// Shorthand timestamp constructor for assertions.
pub fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

/// A typical flow-monitor export: header, a site tag line, the conventional
/// units row two lines below the header, then data.
pub fn sample_export() -> &'static str {
    "Date/Time,Level (in),Velocity,Flow\n\
     Site: MH-12,,,\n\
     ,in,ft/s,mgd\n\
     01/15/2023 00:00,12.5,1.8,0.95\n\
     01/15/2023 00:05,12.7,1.9,0.97\n"
}
