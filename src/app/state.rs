//! Analysis state container and view model
//!
//! [`AnalysisState`] is the explicit state container owned by the caller:
//! dataset slots, the event catalog, hydraulic state, and the view
//! configuration. Each slot is replaced atomically and only after a parse has
//! fully succeeded; overlapping loads into one slot are serialized with a
//! per-slot sequence token so a stale completion can never overwrite a newer
//! one. The view queries at the bottom are pure: an external renderer
//! consumes their output without the core ever rendering anything.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::app::models::{
    CurvePoint, Dataset, DatasetSlot, Event, ManningsParams, ManningsState, Metric, RangeSelector,
    Session, SlotDatasets, ViewMode, ViewState,
};
use crate::app::services::hydraulics;
use crate::{Error, Result};

/// Sequence token issued for one slot load; stale tokens are rejected at
/// commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    slot: DatasetSlot,
    seq: u64,
}

/// One point of a windowed time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// Windowed points of one metric for one visible slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSeries {
    pub slot: DatasetSlot,
    pub points: Vec<SeriesPoint>,
}

/// All visible data for one active metric, in canonical metric order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub metric: Metric,
    pub unit: Option<String>,
    pub slots: Vec<SlotSeries>,
}

/// One depth/velocity scatter point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub timestamp: NaiveDateTime,
    pub velocity: f64,
    pub level: f64,
}

/// In-window points of one visible slot on the scatter surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotScatter {
    pub slot: DatasetSlot,
    pub points: Vec<ScatterPoint>,
}

/// Scatter surface data: per-slot foreground plus one shared context bucket
/// of out-of-window points and in-window points of hidden slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterView {
    pub foreground: Vec<SlotScatter>,
    pub background: Vec<ScatterPoint>,
}

/// The complete in-memory analysis state.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    datasets: SlotDatasets,
    events: Vec<Event>,
    mannings: ManningsState,
    view: ViewState,
    load_seq: [u64; 4],
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn datasets(&self) -> &SlotDatasets {
        &self.datasets
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn mannings(&self) -> &ManningsState {
        &self.mannings
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Active metrics, always in canonical order.
    pub fn active_metrics(&self) -> &[Metric] {
        &self.view.active_metrics
    }

    // -------------------------------------------------------------------
    // Dataset slots
    // -------------------------------------------------------------------

    /// Start a load into a slot, invalidating tokens of earlier loads that
    /// have not committed yet.
    pub fn begin_slot_load(&mut self, slot: DatasetSlot) -> LoadToken {
        self.load_seq[slot.index()] += 1;
        LoadToken {
            slot,
            seq: self.load_seq[slot.index()],
        }
    }

    /// Commit a completed load. Returns false (leaving the slot untouched)
    /// when a newer load has been started since the token was issued.
    pub fn commit_dataset(&mut self, token: LoadToken, dataset: Dataset) -> bool {
        if token.seq != self.load_seq[token.slot.index()] {
            debug!(
                "Discarded stale load into slot '{}' (token {} superseded)",
                token.slot.as_str(),
                token.seq
            );
            return false;
        }

        info!(
            "Slot '{}' replaced with {} records from {:?}",
            token.slot.as_str(),
            dataset.records.len(),
            dataset.source_name
        );
        self.datasets.replace(token.slot, dataset);
        true
    }

    /// Replace a slot wholesale, for callers that do not overlap loads.
    pub fn replace_dataset(&mut self, slot: DatasetSlot, dataset: Dataset) {
        let token = self.begin_slot_load(slot);
        self.commit_dataset(token, dataset);
    }

    pub fn set_dataset_visible(&mut self, slot: DatasetSlot, visible: bool) {
        self.datasets.get_mut(slot).visible = visible;
    }

    /// Replace the event catalog wholesale. An event-linked window would
    /// point into the old catalog, so the selection falls back to custom.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        info!("Event catalog replaced with {} events", events.len());
        self.events = events;
        self.view.selector = RangeSelector::Custom;
    }

    // -------------------------------------------------------------------
    // Hydraulics
    // -------------------------------------------------------------------

    /// Set Manning's parameters, recomputing the curve only when they
    /// changed, and show the overlay. A geometry error leaves the current
    /// state untouched.
    pub fn update_mannings(&mut self, params: ManningsParams) -> Result<()> {
        if self.mannings.params == Some(params) {
            self.mannings.visible = true;
            return Ok(());
        }

        let curve = hydraulics::generate_curve(&params)?;
        self.mannings = ManningsState {
            params: Some(params),
            curve,
            visible: true,
        };
        Ok(())
    }

    pub fn set_mannings_visible(&mut self, visible: bool) {
        self.mannings.visible = visible;
    }

    // -------------------------------------------------------------------
    // Range and metric model
    // -------------------------------------------------------------------

    /// Link the active window to a catalog event.
    pub fn set_active_event(&mut self, index: usize) -> Result<()> {
        let event = self
            .events
            .get(index)
            .ok_or_else(|| Error::unknown_event(index, self.events.len()))?;

        self.view.range_start = Some(event.start);
        self.view.range_end = Some(event.end);
        self.view.selector = RangeSelector::Event(index);
        Ok(())
    }

    /// Set an explicit window. Editing either bound always switches the
    /// selection to custom, regardless of a prior event link.
    pub fn set_custom_range(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.view.range_start = Some(start);
        self.view.range_end = Some(end);
        self.view.selector = RangeSelector::Custom;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
    }

    /// Add or remove a metric; the active set is re-canonicalized after
    /// every change.
    pub fn toggle_metric(&mut self, metric: Metric, on: bool) {
        if on {
            if !self.view.active_metrics.contains(&metric) {
                self.view.active_metrics.push(metric);
            }
        } else {
            self.view.active_metrics.retain(|&m| m != metric);
        }
        Metric::canonicalize(&mut self.view.active_metrics);
    }

    /// Earliest and latest timestamp across all loaded slots.
    pub fn data_extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut extent: Option<(NaiveDateTime, NaiveDateTime)> = None;

        for (_, dataset) in self.datasets.iter() {
            if let Some((first, last)) = dataset.time_extent() {
                extent = Some(match extent {
                    Some((start, end)) => (start.min(first), end.max(last)),
                    None => (first, last),
                });
            }
        }

        extent
    }

    /// Reset the window to the full data extent as a custom range.
    /// Returns false when no slot has records.
    pub fn reset_range_to_extent(&mut self) -> bool {
        match self.data_extent() {
            Some((start, end)) => {
                self.set_custom_range(start, end);
                true
            }
            None => false,
        }
    }

    fn in_window(&self, timestamp: NaiveDateTime) -> bool {
        let after_start = self.view.range_start.is_none_or(|start| timestamp >= start);
        let before_end = self.view.range_end.is_none_or(|end| timestamp <= end);
        after_start && before_end
    }

    // -------------------------------------------------------------------
    // View queries (consumed by an external renderer)
    // -------------------------------------------------------------------

    /// Windowed points per active metric per visible slot, metrics in
    /// canonical order. Records without a value for a metric are omitted.
    pub fn visible_series(&self) -> Vec<MetricSeries> {
        self.view
            .active_metrics
            .iter()
            .map(|&metric| {
                let slots = self
                    .datasets
                    .iter()
                    .filter(|(_, dataset)| dataset.visible)
                    .filter_map(|(slot, dataset)| {
                        let points: Vec<SeriesPoint> = dataset
                            .records
                            .iter()
                            .filter(|record| self.in_window(record.timestamp))
                            .filter_map(|record| {
                                record.value(metric).map(|value| SeriesPoint {
                                    timestamp: record.timestamp,
                                    value,
                                })
                            })
                            .collect();
                        (!points.is_empty()).then_some(SlotSeries { slot, points })
                    })
                    .collect();

                MetricSeries {
                    metric,
                    unit: self.effective_unit(metric),
                    slots,
                }
            })
            .collect()
    }

    /// Depth/velocity scatter data from the raw, edited, and confirmation
    /// slots. In-window points of visible slots are foreground; everything
    /// else (out-of-window, or in-window on a hidden slot) lands in the
    /// shared context bucket.
    pub fn scatter_view(&self) -> ScatterView {
        let mut view = ScatterView::default();

        let scatter_slots = [
            DatasetSlot::Raw,
            DatasetSlot::Edited,
            DatasetSlot::Confirmation,
        ];

        for slot in scatter_slots {
            let dataset = self.datasets.get(slot);
            let mut points = Vec::new();

            for record in &dataset.records {
                let (Some(velocity), Some(level)) = (record.velocity, record.level) else {
                    continue;
                };
                let point = ScatterPoint {
                    timestamp: record.timestamp,
                    velocity,
                    level,
                };
                if dataset.visible && self.in_window(record.timestamp) {
                    points.push(point);
                } else {
                    view.background.push(point);
                }
            }

            if !points.is_empty() {
                view.foreground.push(SlotScatter { slot, points });
            }
        }

        view
    }

    /// The Manning's curve scaled for display against the measured depth
    /// unit: curve depths are in feet, so depths are multiplied by 12 when
    /// the effective level unit is inches. Empty when the overlay is hidden.
    pub fn mannings_overlay(&self) -> Vec<CurvePoint> {
        if !self.mannings.visible {
            return Vec::new();
        }

        let scale = match self.effective_unit(Metric::Level) {
            Some(unit) if unit.trim().to_lowercase().starts_with("in") => 12.0,
            _ => 1.0,
        };

        self.mannings
            .curve
            .iter()
            .map(|point| CurvePoint {
                depth: point.depth * scale,
                velocity: point.velocity,
            })
            .collect()
    }

    /// Unit label for a metric: rainfall comes from the rainfall slot, the
    /// depth/velocity/flow metrics from the first of raw, edited,
    /// confirmation that labels them.
    pub fn effective_unit(&self, metric: Metric) -> Option<String> {
        let slots: &[DatasetSlot] = match metric {
            Metric::Rainfall => &[DatasetSlot::Rainfall],
            _ => &[
                DatasetSlot::Raw,
                DatasetSlot::Edited,
                DatasetSlot::Confirmation,
            ],
        };

        slots
            .iter()
            .find_map(|&slot| self.datasets.get(slot).units.get(&metric).cloned())
    }

    // -------------------------------------------------------------------
    // Session bridge
    // -------------------------------------------------------------------

    /// Snapshot the state for persistence.
    pub fn to_session(&self, saved_at: NaiveDateTime) -> Session {
        Session {
            datasets: self.datasets.clone(),
            events: self.events.clone(),
            mannings: self.mannings.clone(),
            view: self.view.clone(),
            saved_at,
        }
    }

    /// Restore a decoded session wholesale. In-flight load tokens issued
    /// before the restore are invalidated.
    pub fn apply_session(&mut self, session: Session) {
        self.datasets = session.datasets;
        self.events = session.events;
        self.mannings = session.mannings;
        self.view = session.view;
        Metric::canonicalize(&mut self.view.active_metrics);
        for seq in &mut self.load_seq {
            *seq += 1;
        }
    }
}
