//! Async file adapters
//!
//! The raw read is the only suspending operation in the library: each loader
//! awaits the file content, then runs the pure parser or codec. A failed read
//! or parse surfaces an error without touching any state; the caller commits
//! successful results into [`crate::AnalysisState`] afterwards.

use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::app::models::{Event, Session};
use crate::app::services::event_catalog;
use crate::app::services::session_codec;
use crate::app::services::table_parser::{
    ColumnMap, Delimiter, ParseOutcome, UnitOverrides, detect_delimiter, parse_table,
};
use crate::{Error, Result};

/// Read and parse a delimited table export.
///
/// The delimiter is auto-detected when not supplied (spreadsheet-derived
/// text is always comma-delimited, so those callers pass it explicitly).
/// The dataset's source name is the file name.
pub async fn load_table_file(
    path: &Path,
    columns: &ColumnMap,
    overrides: &UnitOverrides,
    delimiter: Option<Delimiter>,
) -> Result<ParseOutcome> {
    info!("Loading table file: {}", path.display());

    let text = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("failed to read table file {}", path.display()), e))?;

    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&text));
    let mut outcome = parse_table(&text, columns, overrides, delimiter)?;
    outcome.dataset.source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    Ok(outcome)
}

/// Read and parse an event catalog document.
pub async fn load_event_catalog(path: &Path) -> Result<Vec<Event>> {
    info!("Loading event catalog: {}", path.display());

    let text = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("failed to read event catalog {}", path.display()), e))?;

    Ok(event_catalog::parse_catalog(&text))
}

/// Read and decode a session document.
pub async fn load_session(path: &Path) -> Result<Session> {
    info!("Loading session: {}", path.display());

    let text = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("failed to read session file {}", path.display()), e))?;

    session_codec::decode_session(&text)
}

/// Encode and write a session document.
pub async fn save_session(path: &Path, session: &Session) -> Result<()> {
    let encoded = session_codec::encode_session(session)?;

    fs::write(path, encoded)
        .await
        .map_err(|e| Error::io(format!("failed to write session file {}", path.display()), e))?;

    info!("Session saved to {}", path.display());
    Ok(())
}
