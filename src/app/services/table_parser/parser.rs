//! Parse orchestration from delimited text to a dataset payload
//!
//! `parse_table` is a pure function: the same text, column mapping, unit
//! overrides, and delimiter always produce the same dataset. The only fatal
//! condition is a missing header row.

use tracing::info;

use super::delimiter::Delimiter;
use super::header::{ColumnMap, find_header_row};
use super::record_parser::parse_rows;
use super::stats::ParseStats;
use super::units::{UnitOverrides, infer_units, resolve_units};
use crate::Result;
use crate::app::models::Dataset;

/// A parsed dataset payload plus its row accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub dataset: Dataset,
    pub stats: ParseStats,
}

/// Parse delimited text into a dataset.
///
/// Fails with [`crate::Error::Format`] only when no header row is found;
/// defective data rows are skipped and accounted in the returned stats.
/// Records are sorted by timestamp on output.
pub fn parse_table(
    text: &str,
    columns: &ColumnMap,
    overrides: &UnitOverrides,
    delimiter: Delimiter,
) -> Result<ParseOutcome> {
    let lines: Vec<&str> = text.lines().collect();

    let header_index = find_header_row(&lines, delimiter)?;
    let header_field_count = lines[header_index].split(delimiter.as_char()).count();

    let inferred = infer_units(&lines, header_index, header_field_count, columns, delimiter);
    let units = resolve_units(inferred, overrides);

    let mut stats = ParseStats::new();
    let mut records = parse_rows(&lines, header_index, columns, delimiter, &mut stats);
    records.sort_by_key(|record| record.timestamp);

    info!(
        "Parsed {} records from {} data rows ({} skipped)",
        stats.rows_parsed, stats.rows_total, stats.rows_skipped
    );

    Ok(ParseOutcome {
        dataset: Dataset {
            records,
            units,
            source_name: None,
            visible: true,
        },
        stats,
    })
}
