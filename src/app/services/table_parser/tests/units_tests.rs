//! Tests for units-row inference and overrides

use super::super::delimiter::Delimiter;
use super::super::header::ColumnMap;
use super::super::units::{UnitOverrides, infer_units, resolve_units};
use crate::app::models::Metric;

fn level_velocity_map() -> ColumnMap {
    ColumnMap {
        time: Some(0),
        level: Some(1),
        velocity: Some(2),
        ..ColumnMap::default()
    }
}

#[test]
fn test_units_read_two_rows_below_header() {
    let lines = vec!["Date,Level,Velocity", "Site: A,,", ",in,ft/s", "data"];
    let units = infer_units(&lines, 0, 3, &level_velocity_map(), Delimiter::Comma);
    assert_eq!(units.get(&Metric::Level).map(String::as_str), Some("in"));
    assert_eq!(units.get(&Metric::Velocity).map(String::as_str), Some("ft/s"));
}

#[test]
fn test_units_row_discarded_when_field_count_off() {
    // Field count differs from the header's by more than two.
    let lines = vec!["Date,Level,Velocity", "", "a,b,c,d,e,f"];
    let units = infer_units(&lines, 0, 3, &level_velocity_map(), Delimiter::Comma);
    assert!(units.is_empty());
}

#[test]
fn test_units_row_kept_within_tolerance() {
    let lines = vec!["Date,Level,Velocity", "", ",in,ft/s,extra,also"];
    let units = infer_units(&lines, 0, 3, &level_velocity_map(), Delimiter::Comma);
    assert_eq!(units.get(&Metric::Level).map(String::as_str), Some("in"));
}

#[test]
fn test_missing_units_row() {
    let lines = vec!["Date,Level,Velocity", "1,2,3"];
    let units = infer_units(&lines, 0, 3, &level_velocity_map(), Delimiter::Comma);
    assert!(units.is_empty());
}

#[test]
fn test_explicit_units_override_inferred() {
    let lines = vec!["Date,Level,Velocity", "", ",in,ft/s"];
    let inferred = infer_units(&lines, 0, 3, &level_velocity_map(), Delimiter::Comma);

    let overrides = UnitOverrides {
        level: Some("ft".to_string()),
        ..UnitOverrides::default()
    };
    let units = resolve_units(inferred, &overrides);

    assert_eq!(units.get(&Metric::Level).map(String::as_str), Some("ft"));
    assert_eq!(units.get(&Metric::Velocity).map(String::as_str), Some("ft/s"));
}

#[test]
fn test_empty_override_counts_as_not_provided() {
    let lines = vec!["Date,Level,Velocity", "", ",in,ft/s"];
    let inferred = infer_units(&lines, 0, 3, &level_velocity_map(), Delimiter::Comma);

    let overrides = UnitOverrides {
        level: Some("  ".to_string()),
        ..UnitOverrides::default()
    };
    let units = resolve_units(inferred, &overrides);

    assert_eq!(units.get(&Metric::Level).map(String::as_str), Some("in"));
}
