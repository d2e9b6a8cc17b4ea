//! Row accounting for a parse run

use serde::{Deserialize, Serialize};

/// Simple row statistics for one parsed export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Non-blank data rows encountered below the header.
    pub rows_total: usize,

    /// Rows converted into records.
    pub rows_parsed: usize,

    /// Rows skipped (short rows, unparsable timestamps).
    pub rows_skipped: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data rows that produced records, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.rows_total == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.rows_total as f64) * 100.0
        }
    }
}
