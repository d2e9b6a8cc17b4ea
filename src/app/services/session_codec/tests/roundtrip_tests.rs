//! Round-trip tests: decode(encode(session)) reproduces the session

use super::super::codec::{decode_session, encode_session};
use super::{full_session, ymd_hms};
use crate::app::models::{Dataset, DatasetSlot, Session, TimeSeriesRecord};

#[test]
fn test_full_session_round_trips_exactly() {
    let session = full_session();
    let encoded = encode_session(&session).unwrap();
    let decoded = decode_session(&encoded).unwrap();

    assert_eq!(decoded, session);
}

#[test]
fn test_timestamps_round_trip_to_the_second() {
    let session = full_session();
    let decoded = decode_session(&encode_session(&session).unwrap()).unwrap();

    let raw = decoded.datasets.get(DatasetSlot::Raw);
    assert_eq!(raw.records[0].timestamp, ymd_hms(2023, 1, 15, 0, 0, 0));
    assert_eq!(decoded.events[0].end, ymd_hms(2023, 1, 16, 12, 30, 45));
    assert_eq!(decoded.saved_at, ymd_hms(2023, 3, 1, 9, 41, 22));
}

#[test]
fn test_numeric_fields_round_trip_exactly() {
    // Awkward binary fractions must survive the JSON representation.
    let mut session = full_session();
    session.datasets.replace(
        DatasetSlot::Edited,
        Dataset {
            records: vec![TimeSeriesRecord {
                timestamp: ymd_hms(2023, 1, 15, 0, 0, 0),
                level: Some(0.1 + 0.2),
                velocity: Some(1.0 / 3.0),
                flow: Some(f64::MIN_POSITIVE),
                rainfall: Some(-0.0),
            }],
            ..Dataset::default()
        },
    );

    let decoded = decode_session(&encode_session(&session).unwrap()).unwrap();
    let record = &decoded.datasets.get(DatasetSlot::Edited).records[0];

    assert_eq!(record.level, Some(0.1 + 0.2));
    assert_eq!(record.velocity, Some(1.0 / 3.0));
    assert_eq!(record.flow, Some(f64::MIN_POSITIVE));
    assert_eq!(record.rainfall, Some(-0.0));
}

#[test]
fn test_empty_session_round_trips() {
    let session = Session {
        datasets: Default::default(),
        events: Vec::new(),
        mannings: Default::default(),
        view: Default::default(),
        saved_at: ymd_hms(2024, 6, 1, 0, 0, 0),
    };

    let decoded = decode_session(&encode_session(&session).unwrap()).unwrap();
    assert_eq!(decoded, session);
}

#[test]
fn test_none_metric_values_round_trip_as_null() {
    let session = full_session();
    let encoded = encode_session(&session).unwrap();

    // Unmapped metrics are nulls in the document, not absent or NaN.
    assert!(encoded.contains("\"rainfall\": null"));

    let decoded = decode_session(&encoded).unwrap();
    assert_eq!(decoded.datasets.get(DatasetSlot::Raw).records[0].rainfall, None);
}

#[test]
fn test_visibility_and_source_names_preserved() {
    let decoded = decode_session(&encode_session(&full_session()).unwrap()).unwrap();

    let rainfall = decoded.datasets.get(DatasetSlot::Rainfall);
    assert!(!rainfall.visible);
    assert_eq!(rainfall.source_name.as_deref(), Some("gauge.csv"));
    assert!(decoded.mannings.visible);
}
