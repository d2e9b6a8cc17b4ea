//! Versioned session document schema
//!
//! These types define the on-disk shape of a session and its backward
//! compatibility policy. Every field added after schema version 1 carries a
//! serde default, so older documents decode without call-site presence
//! checks: a missing Manning's block decodes as hidden/empty, a missing view
//! block as scatter mode with the level metric active.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::app::models::{Metric, RangeSelector, ViewMode};

/// Second-precision timestamp encoding used throughout session documents.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::constants::SESSION_TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&timestamp.format(SESSION_TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, SESSION_TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

/// [`timestamp_format`] for optional fields.
pub mod opt_timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::constants::SESSION_TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(
        timestamp: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match timestamp {
            Some(ts) => {
                serializer.serialize_some(&ts.format(SESSION_TIMESTAMP_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, SESSION_TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Top-level session document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Schema version; documents predating versioning read as 1.
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(with = "timestamp_format", default)]
    pub saved_at: NaiveDateTime,

    #[serde(default)]
    pub datasets: DatasetsDoc,

    #[serde(default)]
    pub events: Vec<EventDoc>,

    /// Added in schema version 2.
    #[serde(default)]
    pub mannings: ManningsDoc,

    /// Added in schema version 2 (range bounds existed in version 1).
    #[serde(default)]
    pub view: ViewDoc,
}

fn default_version() -> u32 {
    1
}

/// The four dataset slots; missing slots decode as empty datasets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetsDoc {
    #[serde(default)]
    pub raw: DatasetDoc,
    #[serde(default)]
    pub edited: DatasetDoc,
    #[serde(default)]
    pub confirmation: DatasetDoc,
    #[serde(default)]
    pub rainfall: DatasetDoc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDoc {
    #[serde(default)]
    pub records: Vec<RecordDoc>,
    #[serde(default)]
    pub units: HashMap<Metric, String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Default for DatasetDoc {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            units: HashMap::new(),
            source_name: None,
            visible: default_visible(),
        }
    }
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDoc {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub level: Option<f64>,
    pub velocity: Option<f64>,
    pub flow: Option<f64>,
    pub rainfall: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDoc {
    pub name: String,
    #[serde(with = "timestamp_format")]
    pub start: NaiveDateTime,
    #[serde(with = "timestamp_format")]
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManningsDoc {
    #[serde(default)]
    pub params: Option<ManningsParamsDoc>,
    #[serde(default)]
    pub curve: Vec<CurvePointDoc>,
    #[serde(default)]
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManningsParamsDoc {
    pub diameter: f64,
    pub slope: f64,
    pub roughness_n: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePointDoc {
    pub depth: f64,
    pub velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDoc {
    #[serde(with = "opt_timestamp_format", default)]
    pub range_start: Option<NaiveDateTime>,
    #[serde(with = "opt_timestamp_format", default)]
    pub range_end: Option<NaiveDateTime>,
    #[serde(default = "default_selector")]
    pub selector: RangeSelector,
    #[serde(default = "default_mode")]
    pub mode: ViewMode,
    #[serde(default = "default_active_metrics")]
    pub active_metrics: Vec<Metric>,
}

impl Default for ViewDoc {
    fn default() -> Self {
        Self {
            range_start: None,
            range_end: None,
            selector: default_selector(),
            mode: default_mode(),
            active_metrics: default_active_metrics(),
        }
    }
}

fn default_selector() -> RangeSelector {
    RangeSelector::Custom
}

fn default_mode() -> ViewMode {
    ViewMode::Scatter
}

fn default_active_metrics() -> Vec<Metric> {
    vec![Metric::Level]
}
