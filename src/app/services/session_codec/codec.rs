//! Session/document conversion and JSON encoding
//!
//! Decoding is all-or-nothing: a malformed document yields
//! [`crate::Error::SessionFormat`] and the caller's in-memory state is left
//! untouched, because the restored [`Session`] only exists on success.

use tracing::{debug, info};

use super::document::{
    CurvePointDoc, DatasetDoc, DatasetsDoc, EventDoc, ManningsDoc, ManningsParamsDoc, RecordDoc,
    SessionDocument, ViewDoc,
};
use crate::app::models::{
    CurvePoint, Dataset, DatasetSlot, Event, ManningsParams, ManningsState, Metric, Session,
    SlotDatasets, TimeSeriesRecord, ViewState,
};
use crate::constants::SESSION_SCHEMA_VERSION;
use crate::{Error, Result};

/// Serialize a session into a pretty-printed JSON document.
pub fn encode_session(session: &Session) -> Result<String> {
    let document = document_from_session(session);
    serde_json::to_string_pretty(&document)
        .map_err(|e| Error::session_format(format!("failed to serialize session: {}", e)))
}

/// Deserialize a session document, filling schema defaults for fields the
/// writing revision did not know about.
pub fn decode_session(text: &str) -> Result<Session> {
    let document: SessionDocument = serde_json::from_str(text)
        .map_err(|e| Error::session_format(format!("malformed session document: {}", e)))?;

    if document.version < SESSION_SCHEMA_VERSION {
        debug!(
            "Decoding schema version {} document with version {} defaults",
            document.version, SESSION_SCHEMA_VERSION
        );
    }

    let session = session_from_document(document);
    info!(
        "Decoded session saved at {} with {} events",
        session.saved_at,
        session.events.len()
    );
    Ok(session)
}

fn document_from_session(session: &Session) -> SessionDocument {
    SessionDocument {
        version: SESSION_SCHEMA_VERSION,
        saved_at: session.saved_at,
        datasets: DatasetsDoc {
            raw: dataset_doc(session.datasets.get(DatasetSlot::Raw)),
            edited: dataset_doc(session.datasets.get(DatasetSlot::Edited)),
            confirmation: dataset_doc(session.datasets.get(DatasetSlot::Confirmation)),
            rainfall: dataset_doc(session.datasets.get(DatasetSlot::Rainfall)),
        },
        events: session
            .events
            .iter()
            .map(|event| EventDoc {
                name: event.name.clone(),
                start: event.start,
                end: event.end,
            })
            .collect(),
        mannings: ManningsDoc {
            params: session.mannings.params.map(|p| ManningsParamsDoc {
                diameter: p.diameter,
                slope: p.slope,
                roughness_n: p.roughness_n,
            }),
            curve: session
                .mannings
                .curve
                .iter()
                .map(|point| CurvePointDoc {
                    depth: point.depth,
                    velocity: point.velocity,
                })
                .collect(),
            visible: session.mannings.visible,
        },
        view: ViewDoc {
            range_start: session.view.range_start,
            range_end: session.view.range_end,
            selector: session.view.selector,
            mode: session.view.mode,
            active_metrics: session.view.active_metrics.clone(),
        },
    }
}

fn session_from_document(document: SessionDocument) -> Session {
    let mut datasets = SlotDatasets::default();
    datasets.replace(DatasetSlot::Raw, dataset_from_doc(document.datasets.raw));
    datasets.replace(DatasetSlot::Edited, dataset_from_doc(document.datasets.edited));
    datasets.replace(
        DatasetSlot::Confirmation,
        dataset_from_doc(document.datasets.confirmation),
    );
    datasets.replace(
        DatasetSlot::Rainfall,
        dataset_from_doc(document.datasets.rainfall),
    );

    let mut active_metrics = document.view.active_metrics;
    Metric::canonicalize(&mut active_metrics);

    Session {
        datasets,
        events: document
            .events
            .into_iter()
            .map(|event| Event {
                name: event.name,
                start: event.start,
                end: event.end,
            })
            .collect(),
        mannings: ManningsState {
            params: document.mannings.params.map(|p| ManningsParams {
                diameter: p.diameter,
                slope: p.slope,
                roughness_n: p.roughness_n,
            }),
            curve: document
                .mannings
                .curve
                .into_iter()
                .map(|point| CurvePoint {
                    depth: point.depth,
                    velocity: point.velocity,
                })
                .collect(),
            visible: document.mannings.visible,
        },
        view: ViewState {
            range_start: document.view.range_start,
            range_end: document.view.range_end,
            selector: document.view.selector,
            mode: document.view.mode,
            active_metrics,
        },
        saved_at: document.saved_at,
    }
}

fn dataset_doc(dataset: &Dataset) -> DatasetDoc {
    DatasetDoc {
        records: dataset
            .records
            .iter()
            .map(|record| RecordDoc {
                timestamp: record.timestamp,
                level: record.level,
                velocity: record.velocity,
                flow: record.flow,
                rainfall: record.rainfall,
            })
            .collect(),
        units: dataset.units.clone(),
        source_name: dataset.source_name.clone(),
        visible: dataset.visible,
    }
}

fn dataset_from_doc(doc: DatasetDoc) -> Dataset {
    Dataset {
        records: doc
            .records
            .into_iter()
            .map(|record| TimeSeriesRecord {
                timestamp: record.timestamp,
                level: record.level,
                velocity: record.velocity,
                flow: record.flow,
                rainfall: record.rainfall,
            })
            .collect(),
        units: doc.units,
        source_name: doc.source_name,
        visible: doc.visible,
    }
}
