//! Header row location and column auto-detection
//!
//! The header is the first content line near the top of the file that splits
//! into more than one field. Column categories are recognized by lowercase
//! substring matching on header cells; when several headers match the same
//! category, the last one wins.

use super::delimiter::Delimiter;
use crate::app::models::Metric;
use crate::constants::HEADER_SCAN_LINES;
use crate::{Error, Result};

/// Column indices for the time column and each metric.
///
/// `None` means the column is not mapped; the corresponding record field is
/// always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub time: Option<usize>,
    pub level: Option<usize>,
    pub velocity: Option<usize>,
    pub flow: Option<usize>,
    pub rainfall: Option<usize>,
}

impl ColumnMap {
    /// Auto-detect column categories from header cells.
    ///
    /// Each header is matched against one category at most, in fixed
    /// precedence: time (`date`/`time`), level (`level`/`depth`), velocity,
    /// flow, rainfall (`rain`/`precip`). A later matching header overwrites
    /// an earlier assignment for the same category.
    pub fn auto_detect(headers: &[&str]) -> Self {
        let mut map = ColumnMap::default();

        for (index, header) in headers.iter().enumerate() {
            let lower = header.trim().to_lowercase();
            if lower.is_empty() {
                continue;
            }

            if lower.contains("date") || lower.contains("time") {
                map.time = Some(index);
            } else if lower.contains("level") || lower.contains("depth") {
                map.level = Some(index);
            } else if lower.contains("velocity") {
                map.velocity = Some(index);
            } else if lower.contains("flow") {
                map.flow = Some(index);
            } else if lower.contains("rain") || lower.contains("precip") {
                map.rainfall = Some(index);
            }
        }

        map
    }

    /// Index of the given metric's column, when mapped.
    pub fn metric_index(&self, metric: Metric) -> Option<usize> {
        match metric {
            Metric::Level => self.level,
            Metric::Velocity => self.velocity,
            Metric::Flow => self.flow,
            Metric::Rainfall => self.rainfall,
        }
    }

    /// Highest mapped column index across time and metrics.
    pub fn max_mapped_index(&self) -> Option<usize> {
        [self.time, self.level, self.velocity, self.flow, self.rainfall]
            .into_iter()
            .flatten()
            .max()
    }
}

/// Locate the header row within the first `min(10, line_count)` lines.
///
/// Blank lines and `#`-prefixed comment lines are skipped; the first line
/// that splits into more than one field is the header. Fails with
/// [`Error::Format`] when no such line exists.
pub fn find_header_row(lines: &[&str], delimiter: Delimiter) -> Result<usize> {
    let scan = lines.len().min(HEADER_SCAN_LINES);

    for (index, line) in lines.iter().enumerate().take(scan) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.split(delimiter.as_char()).count() > 1 {
            return Ok(index);
        }
    }

    Err(Error::format("could not find data headers"))
}
