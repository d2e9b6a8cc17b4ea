//! Data models for scattergraph analysis
//!
//! This module contains the core data structures for representing sensor
//! time series, catalog events, hydraulic state, and the view configuration.
//! Session document schema types live in
//! [`crate::app::services::session_codec`]; the types here are the in-memory
//! representation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Metrics
// =============================================================================

/// A measured quantity carried by sensor exports.
///
/// The canonical display/serialization order is fixed:
/// rainfall, flow, level, velocity — independent of toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Level,
    Velocity,
    Flow,
    Rainfall,
}

impl Metric {
    /// All metrics in canonical order.
    pub const CANONICAL: [Metric; 4] = [
        Metric::Rainfall,
        Metric::Flow,
        Metric::Level,
        Metric::Velocity,
    ];

    /// Position of this metric in the canonical order.
    pub fn canonical_rank(self) -> usize {
        match self {
            Metric::Rainfall => 0,
            Metric::Flow => 1,
            Metric::Level => 2,
            Metric::Velocity => 3,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Level => "level",
            Metric::Velocity => "velocity",
            Metric::Flow => "flow",
            Metric::Rainfall => "rainfall",
        }
    }

    /// Sort a metric list into canonical order, dropping duplicates.
    pub fn canonicalize(metrics: &mut Vec<Metric>) {
        metrics.sort_by_key(|m| m.canonical_rank());
        metrics.dedup();
    }
}

// =============================================================================
// Time Series
// =============================================================================

/// One timestamped sensor record.
///
/// Metric fields are `None` when the column was unmapped or the cell did not
/// parse as a number — never NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRecord {
    pub timestamp: NaiveDateTime,
    pub level: Option<f64>,
    pub velocity: Option<f64>,
    pub flow: Option<f64>,
    pub rainfall: Option<f64>,
}

impl TimeSeriesRecord {
    /// Value of the given metric for this record.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Level => self.level,
            Metric::Velocity => self.velocity,
            Metric::Flow => self.flow,
            Metric::Rainfall => self.rainfall,
        }
    }
}

/// A parsed sensor export: time-ordered records plus unit labels.
///
/// Datasets are created or replaced wholesale on each successful load or
/// session restore; they are never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Records sorted by ascending timestamp.
    pub records: Vec<TimeSeriesRecord>,

    /// Unit label per metric, as inferred from the export or supplied by the
    /// caller.
    pub units: HashMap<Metric, String>,

    /// Name of the originating file, when known.
    pub source_name: Option<String>,

    /// Whether the dataset participates in view queries.
    pub visible: bool,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            units: HashMap::new(),
            source_name: None,
            visible: true,
        }
    }
}

impl Dataset {
    /// Timestamps of the first and last record, when any records exist.
    pub fn time_extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}

// =============================================================================
// Dataset Slots
// =============================================================================

/// The four logical source slots of an analysis session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSlot {
    Raw,
    Edited,
    Confirmation,
    Rainfall,
}

impl DatasetSlot {
    /// All slots, in display order.
    pub const ALL: [DatasetSlot; 4] = [
        DatasetSlot::Raw,
        DatasetSlot::Edited,
        DatasetSlot::Confirmation,
        DatasetSlot::Rainfall,
    ];

    /// Lowercase slot name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetSlot::Raw => "raw",
            DatasetSlot::Edited => "edited",
            DatasetSlot::Confirmation => "confirmation",
            DatasetSlot::Rainfall => "rainfall",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            DatasetSlot::Raw => 0,
            DatasetSlot::Edited => 1,
            DatasetSlot::Confirmation => 2,
            DatasetSlot::Rainfall => 3,
        }
    }
}

/// The datasets of a session, one per slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotDatasets {
    slots: [Dataset; 4],
}

impl SlotDatasets {
    pub fn get(&self, slot: DatasetSlot) -> &Dataset {
        &self.slots[slot.index()]
    }

    pub fn get_mut(&mut self, slot: DatasetSlot) -> &mut Dataset {
        &mut self.slots[slot.index()]
    }

    /// Replace one slot wholesale.
    pub fn replace(&mut self, slot: DatasetSlot, dataset: Dataset) {
        self.slots[slot.index()] = dataset;
    }

    /// Iterate slots and their datasets in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DatasetSlot, &Dataset)> {
        DatasetSlot::ALL.iter().map(|&slot| (slot, self.get(slot)))
    }
}

// =============================================================================
// Events
// =============================================================================

/// A named time interval from the event catalog.
///
/// `start <= end` is conventional but not validated; the list order is the
/// order of first appearance in the catalog document.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

// =============================================================================
// Hydraulics
// =============================================================================

/// Pipe geometry and roughness inputs to the Manning's curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManningsParams {
    /// Pipe diameter, in feet.
    pub diameter: f64,
    /// Pipe slope (dimensionless, ft/ft).
    pub slope: f64,
    /// Manning's roughness coefficient n.
    pub roughness_n: f64,
}

/// One point of the theoretical depth/velocity curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub depth: f64,
    pub velocity: f64,
}

/// Hydraulic reference state: the inputs, the derived curve, and whether the
/// overlay is shown.
///
/// The curve is recomputed exactly when `params` changes; a stale curve never
/// outlives a params change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ManningsState {
    pub params: Option<ManningsParams>,
    pub curve: Vec<CurvePoint>,
    pub visible: bool,
}

// =============================================================================
// View Configuration
// =============================================================================

/// Which plot surfaces the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Scatter,
    /// Accepts the legacy document token "graph".
    #[serde(alias = "graph")]
    TimeSeries,
    Both,
}

/// How the active time window was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSelector {
    /// Explicitly edited bounds.
    Custom,
    /// Window taken from the catalog event at this index.
    Event(usize),
}

/// The active time window, selection source, view mode, and metric set.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub range_start: Option<NaiveDateTime>,
    pub range_end: Option<NaiveDateTime>,
    pub selector: RangeSelector,
    pub mode: ViewMode,
    /// Always held in canonical order, regardless of toggle order.
    pub active_metrics: Vec<Metric>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            range_start: None,
            range_end: None,
            selector: RangeSelector::Custom,
            mode: ViewMode::Scatter,
            active_metrics: vec![Metric::Level, Metric::Velocity],
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// The complete persisted analysis state: the unit of save/restore.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub datasets: SlotDatasets,
    pub events: Vec<Event>,
    pub mannings: ManningsState,
    pub view: ViewState,
    pub saved_at: NaiveDateTime,
}
