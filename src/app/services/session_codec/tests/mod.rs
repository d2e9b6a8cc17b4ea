//! Shared fixtures for session codec tests

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use crate::app::models::{
    CurvePoint, Dataset, DatasetSlot, Event, ManningsParams, ManningsState, Metric, RangeSelector,
    Session, SlotDatasets, TimeSeriesRecord, ViewMode, ViewState,
};

mod roundtrip_tests;

pub fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

/// A session exercising every persisted field: populated slots, events,
/// hydraulic state, and a fully configured view.
pub fn full_session() -> Session {
    let mut datasets = SlotDatasets::default();

    datasets.replace(
        DatasetSlot::Raw,
        Dataset {
            records: vec![
                TimeSeriesRecord {
                    timestamp: ymd_hms(2023, 1, 15, 0, 0, 0),
                    level: Some(12.5),
                    velocity: Some(1.8),
                    flow: Some(0.95),
                    rainfall: None,
                },
                TimeSeriesRecord {
                    timestamp: ymd_hms(2023, 1, 15, 0, 5, 0),
                    level: Some(12.75),
                    velocity: None,
                    flow: Some(0.975),
                    rainfall: None,
                },
            ],
            units: HashMap::from([
                (Metric::Level, "in".to_string()),
                (Metric::Velocity, "ft/s".to_string()),
            ]),
            source_name: Some("mh12_raw.csv".to_string()),
            visible: true,
        },
    );

    datasets.replace(
        DatasetSlot::Rainfall,
        Dataset {
            records: vec![TimeSeriesRecord {
                timestamp: ymd_hms(2023, 1, 15, 0, 0, 0),
                level: None,
                velocity: None,
                flow: None,
                rainfall: Some(0.04),
            }],
            units: HashMap::from([(Metric::Rainfall, "in".to_string())]),
            source_name: Some("gauge.csv".to_string()),
            visible: false,
        },
    );

    Session {
        datasets,
        events: vec![
            Event {
                name: "Storm 1".to_string(),
                start: ymd_hms(2023, 1, 15, 0, 0, 0),
                end: ymd_hms(2023, 1, 16, 12, 30, 45),
            },
            Event {
                name: "Dry Day".to_string(),
                start: ymd_hms(2023, 2, 1, 0, 0, 0),
                end: ymd_hms(2023, 2, 2, 0, 0, 0),
            },
        ],
        mannings: ManningsState {
            params: Some(ManningsParams {
                diameter: 1.25,
                slope: 0.0042,
                roughness_n: 0.013,
            }),
            curve: vec![
                CurvePoint {
                    depth: 0.0,
                    velocity: 0.0,
                },
                CurvePoint {
                    depth: 0.625,
                    velocity: 3.21,
                },
            ],
            visible: true,
        },
        view: ViewState {
            range_start: Some(ymd_hms(2023, 1, 15, 0, 0, 0)),
            range_end: Some(ymd_hms(2023, 1, 16, 12, 30, 45)),
            selector: RangeSelector::Event(0),
            mode: ViewMode::Both,
            active_metrics: vec![Metric::Rainfall, Metric::Level, Metric::Velocity],
        },
        saved_at: ymd_hms(2023, 3, 1, 9, 41, 22),
    }
}
