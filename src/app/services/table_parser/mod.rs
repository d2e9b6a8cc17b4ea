//! Delimited table parser for sensor time-series exports
//!
//! Instrument exports arrive as comma- or tab-separated text (or as a
//! spreadsheet cell grid converted to comma-separated text). This module turns
//! that text plus a column mapping into a typed, time-ordered [`Dataset`]
//! payload with lenient row handling: defective rows are skipped, only a
//! missing header row is fatal.
//!
//! ## Architecture
//!
//! - [`parser`] - Parse orchestration from text to dataset
//! - [`delimiter`] - Delimiter auto-detection
//! - [`header`] - Header row location and column auto-detection
//! - [`units`] - Units-row inference and caller overrides
//! - [`record_parser`] - Cell cleaning, permissive timestamps, row parsing
//! - [`sheet`] - Spreadsheet cell-grid to delimited-text adapter
//! - [`stats`] - Row accounting for a parse run
//!
//! [`Dataset`]: crate::app::models::Dataset

pub mod delimiter;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod sheet;
pub mod stats;
pub mod units;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use delimiter::{Delimiter, detect_delimiter};
pub use header::{ColumnMap, find_header_row};
pub use parser::{ParseOutcome, parse_table};
pub use sheet::{SheetGrid, extract_sheet_text};
pub use stats::ParseStats;
pub use units::UnitOverrides;
