//! End-to-end tests for table parsing

use super::super::delimiter::{Delimiter, detect_delimiter};
use super::super::header::ColumnMap;
use super::super::parser::parse_table;
use super::super::units::UnitOverrides;
use super::{sample_export, ymd_hms};
use crate::Error;
use crate::app::models::Metric;

fn sample_map() -> ColumnMap {
    ColumnMap {
        time: Some(0),
        level: Some(1),
        velocity: Some(2),
        flow: Some(3),
        ..ColumnMap::default()
    }
}

#[test]
fn test_parse_sample_export() {
    let outcome = parse_table(
        sample_export(),
        &sample_map(),
        &UnitOverrides::default(),
        Delimiter::Comma,
    )
    .unwrap();

    let dataset = &outcome.dataset;
    assert_eq!(dataset.records.len(), 2);
    assert_eq!(dataset.records[0].timestamp, ymd_hms(2023, 1, 15, 0, 0, 0));
    assert_eq!(dataset.records[0].level, Some(12.5));
    assert_eq!(dataset.records[0].velocity, Some(1.8));
    assert_eq!(dataset.records[0].flow, Some(0.95));
    assert_eq!(dataset.records[0].rainfall, None);

    // The units row two lines below the header is picked up.
    assert_eq!(dataset.units.get(&Metric::Level).map(String::as_str), Some("in"));
    assert_eq!(dataset.units.get(&Metric::Flow).map(String::as_str), Some("mgd"));

    // Site tag line and units row are counted and skipped.
    assert_eq!(outcome.stats.rows_total, 4);
    assert_eq!(outcome.stats.rows_parsed, 2);
    assert_eq!(outcome.stats.rows_skipped, 2);
    assert_eq!(outcome.stats.success_rate(), 50.0);
}

#[test]
fn test_auto_detected_columns_match_sample() {
    let headers = ["Date/Time", "Level (in)", "Velocity", "Flow"];
    assert_eq!(ColumnMap::auto_detect(&headers), sample_map());
}

#[test]
fn test_records_sorted_by_timestamp() {
    let text = "Date,Level\n\
                01/15/2023 00:10,3.0\n\
                01/15/2023 00:00,1.0\n\
                01/15/2023 00:05,2.0\n";
    let map = ColumnMap {
        time: Some(0),
        level: Some(1),
        ..ColumnMap::default()
    };
    let outcome = parse_table(text, &map, &UnitOverrides::default(), Delimiter::Comma).unwrap();

    let levels: Vec<_> = outcome.dataset.records.iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn test_tab_delimited_export() {
    let text = "Date\tDepth\n01/15/2023 00:00\t12.5\n";
    assert_eq!(detect_delimiter(text), Delimiter::Tab);

    let map = ColumnMap {
        time: Some(0),
        level: Some(1),
        ..ColumnMap::default()
    };
    let outcome = parse_table(text, &map, &UnitOverrides::default(), Delimiter::Tab).unwrap();
    assert_eq!(outcome.dataset.records.len(), 1);
    assert_eq!(outcome.dataset.records[0].level, Some(12.5));
}

#[test]
fn test_missing_header_is_fatal() {
    let err = parse_table(
        "no delimiters here\nat all\n",
        &sample_map(),
        &UnitOverrides::default(),
        Delimiter::Comma,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}

#[test]
fn test_parse_is_pure() {
    let a = parse_table(
        sample_export(),
        &sample_map(),
        &UnitOverrides::default(),
        Delimiter::Comma,
    )
    .unwrap();
    let b = parse_table(
        sample_export(),
        &sample_map(),
        &UnitOverrides::default(),
        Delimiter::Comma,
    )
    .unwrap();
    assert_eq!(a, b);
}
