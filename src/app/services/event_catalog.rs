//! Event catalog parsing
//!
//! Event catalogs are INI-like documents: `;`-prefixed comments, `[Section]`
//! headers, and `Key=Value` lines. Sections whose name starts with `Event`
//! define named time intervals with `Name`, `Start`, and `End` keys, where
//! `Start` and `End` are spreadsheet serial dates. Defective events are
//! dropped silently; the parser never fails.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::serial_date;
use crate::app::models::Event;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("section pattern is valid"));
static KEY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+)=(.*)$").expect("key/value pattern is valid"));

/// Parse an event catalog document into events, in order of first appearance.
///
/// Events missing `Start` or `End`, or whose serial dates do not parse, are
/// dropped without error. Sections not named `Event*` are scanned for
/// key/values but never emitted.
pub fn parse_catalog(text: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut section: Option<String> = None;
    let mut pending: HashMap<String, String> = HashMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(caps) = SECTION_RE.captures(line) {
            finalize_section(section.as_deref(), &pending, &mut events);
            section = Some(caps[1].to_string());
            pending.clear();
            continue;
        }

        if let Some(caps) = KEY_VALUE_RE.captures(line) {
            if section.as_deref().is_some_and(|name| name.starts_with("Event")) {
                pending.insert(caps[1].trim().to_string(), caps[2].trim().to_string());
            }
        }
    }

    finalize_section(section.as_deref(), &pending, &mut events);
    events
}

/// Emit the pending record when it belongs to a closed `Event*` section and
/// both interval bounds are present and convertible.
fn finalize_section(
    section: Option<&str>,
    pending: &HashMap<String, String>,
    events: &mut Vec<Event>,
) {
    let Some(name) = section else {
        return;
    };
    if !name.starts_with("Event") {
        return;
    }

    let (Some(start_raw), Some(end_raw)) = (pending.get("Start"), pending.get("End")) else {
        debug!("Dropped event in section [{}]: missing Start or End", name);
        return;
    };

    let bounds = start_raw
        .parse::<f64>()
        .ok()
        .zip(end_raw.parse::<f64>().ok())
        .and_then(|(start, end)| {
            serial_date::to_timestamp(start)
                .ok()
                .zip(serial_date::to_timestamp(end).ok())
        });

    let Some((start, end)) = bounds else {
        debug!(
            "Dropped event in section [{}]: unparsable serial dates '{}'/'{}'",
            name, start_raw, end_raw
        );
        return;
    };

    let event_name = pending
        .get("Name")
        .cloned()
        .unwrap_or_else(|| "Unnamed".to_string());

    events.push(Event {
        name: event_name,
        start,
        end,
    });
}
