//! Units-row inference and caller-supplied unit overrides
//!
//! Instrument exports conventionally place a units row two lines below the
//! header. The row is advisory: it is discarded when its field count is too
//! far from the header's, and any unit the caller supplies explicitly takes
//! precedence over an inferred one.

use std::collections::HashMap;

use super::delimiter::Delimiter;
use super::header::ColumnMap;
use crate::app::models::Metric;
use crate::constants::{UNITS_FIELD_COUNT_TOLERANCE, UNITS_ROW_OFFSET};

/// Explicit per-metric unit labels supplied by the caller.
///
/// Empty strings count as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitOverrides {
    pub level: Option<String>,
    pub velocity: Option<String>,
    pub flow: Option<String>,
    pub rainfall: Option<String>,
}

impl UnitOverrides {
    fn get(&self, metric: Metric) -> Option<&str> {
        let value = match metric {
            Metric::Level => &self.level,
            Metric::Velocity => &self.velocity,
            Metric::Flow => &self.flow,
            Metric::Rainfall => &self.rainfall,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Read unit labels for mapped metrics from the conventional units row.
///
/// The candidate row sits `UNITS_ROW_OFFSET` lines below the header; it is
/// discarded wholesale when its field count differs from the header's by more
/// than [`UNITS_FIELD_COUNT_TOLERANCE`].
pub fn infer_units(
    lines: &[&str],
    header_index: usize,
    header_field_count: usize,
    columns: &ColumnMap,
    delimiter: Delimiter,
) -> HashMap<Metric, String> {
    let mut units = HashMap::new();

    let Some(row) = lines.get(header_index + UNITS_ROW_OFFSET) else {
        return units;
    };

    let fields: Vec<&str> = row.split(delimiter.as_char()).collect();
    if fields.len().abs_diff(header_field_count) > UNITS_FIELD_COUNT_TOLERANCE {
        return units;
    }

    for metric in Metric::CANONICAL {
        if let Some(index) = columns.metric_index(metric) {
            if let Some(label) = fields.get(index).map(|f| f.trim()) {
                if !label.is_empty() {
                    units.insert(metric, label.to_string());
                }
            }
        }
    }

    units
}

/// Merge inferred units with caller overrides; overrides win.
pub fn resolve_units(
    inferred: HashMap<Metric, String>,
    overrides: &UnitOverrides,
) -> HashMap<Metric, String> {
    let mut units = inferred;
    for metric in Metric::CANONICAL {
        if let Some(explicit) = overrides.get(metric) {
            units.insert(metric, explicit.to_string());
        }
    }
    units
}
