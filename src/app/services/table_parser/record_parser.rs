//! Data-row parsing for delimited exports
//!
//! Row handling is lenient throughout: a row with an unparsable timestamp or
//! too few fields is skipped, and a non-numeric metric cell yields `None`.
//! Nothing at this level aborts a parse.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use super::delimiter::Delimiter;
use super::header::ColumnMap;
use super::stats::ParseStats;
use crate::app::models::TimeSeriesRecord;
use crate::constants::{DATE_ONLY_FORMATS, TIMESTAMP_FORMATS};

/// Strip surrounding whitespace and one surrounding quote pair from a cell.
pub fn clean_cell(cell: &str) -> &str {
    let trimmed = cell.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.trim()
}

/// Permissive timestamp parser for data-row time cells.
///
/// Tries the known datetime layouts first, then date-only layouts (midnight).
pub fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(cell, format) {
            return Some(ts);
        }
    }
    for format in DATE_ONLY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Parse a metric cell as a float; non-numeric and NaN cells yield `None`.
pub fn parse_metric_cell(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parse all data rows following the header into records.
///
/// Rows shorter than the highest mapped column index are skipped, as are rows
/// whose time cell does not parse. Returned records are in file order; the
/// caller sorts them into the dataset ordering invariant.
pub fn parse_rows(
    lines: &[&str],
    header_index: usize,
    columns: &ColumnMap,
    delimiter: Delimiter,
    stats: &mut ParseStats,
) -> Vec<TimeSeriesRecord> {
    let mut records = Vec::new();
    let max_mapped = columns.max_mapped_index();

    for (offset, line) in lines[header_index + 1..].iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.rows_total += 1;

        let parts: Vec<&str> = trimmed.split(delimiter.as_char()).collect();

        if let Some(max) = max_mapped {
            if parts.len() <= max {
                stats.rows_skipped += 1;
                continue;
            }
        }

        let Some(time_index) = columns.time else {
            stats.rows_skipped += 1;
            continue;
        };

        let time_cell = clean_cell(parts[time_index]);
        let Some(timestamp) = parse_timestamp(time_cell) else {
            stats.rows_skipped += 1;
            debug!(
                "Skipped row {} below header: unparsable time cell '{}'",
                offset + 1,
                time_cell
            );
            continue;
        };

        let metric_value = |index: Option<usize>| {
            index
                .and_then(|i| parts.get(i))
                .and_then(|cell| parse_metric_cell(clean_cell(cell)))
        };

        records.push(TimeSeriesRecord {
            timestamp,
            level: metric_value(columns.level),
            velocity: metric_value(columns.velocity),
            flow: metric_value(columns.flow),
            rainfall: metric_value(columns.rainfall),
        });
        stats.rows_parsed += 1;
    }

    records
}
