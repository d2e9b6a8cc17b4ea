//! Scattergraph Core Library
//!
//! A Rust library implementing the analysis core of a hydrological
//! flow-monitoring review tool: it turns heterogeneous delimited and
//! spreadsheet sensor exports into typed, time-ordered datasets, computes
//! theoretical Manning's-equation pipe-flow curves, and persists the full
//! analysis session losslessly.
//!
//! This library provides tools for:
//! - Parsing delimited sensor exports with delimiter/header/column auto-detection
//! - Converting spreadsheet serial dates with calendar-correct arithmetic
//! - Parsing INI-style event catalogs into named time intervals
//! - Generating partial-flow velocity curves for circular pipes
//! - Windowed, metric-filtered view queries for an external renderer
//! - Saving and restoring sessions with backward-compatible defaulting
//!
//! The core is pure and rendering-agnostic: the only suspension point is the
//! raw file read in [`app::adapters::filesystem`]; everything downstream is
//! synchronous and side-effect-free until a state slot is replaced atomically.

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod state;
    pub mod services {
        pub mod event_catalog;
        pub mod hydraulics;
        pub mod serial_date;
        pub mod session_codec;
        pub mod table_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// Re-export commonly used types
pub use app::models::{
    CurvePoint, Dataset, DatasetSlot, Event, ManningsParams, ManningsState, Metric, RangeSelector,
    Session, SlotDatasets, TimeSeriesRecord, ViewMode, ViewState,
};
pub use app::state::AnalysisState;

/// Result type alias for scattergraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for scattergraph core operations
///
/// Row-level and event-level defects are never surfaced through this enum:
/// the parsers skip the offending item and continue. These variants cover
/// file- and document-level failures that abort a single operation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Delimited table format error (no usable header row)
    #[error("Table format error: {message}")]
    Format { message: String },

    /// Spreadsheet serial date is not a finite number
    #[error("Invalid serial date: {value}")]
    InvalidSerial { value: f64 },

    /// Hydraulic geometry inputs are non-finite or non-positive
    #[error("Invalid pipe geometry: {message}")]
    InvalidGeometry { message: String },

    /// Session document is not well-formed
    #[error("Session format error: {message}")]
    SessionFormat { message: String },

    /// Event index outside the loaded catalog
    #[error("Unknown event index {index} (catalog holds {count} events)")]
    UnknownEvent { index: usize, count: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a table format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create an invalid serial date error
    pub fn invalid_serial(value: f64) -> Self {
        Self::InvalidSerial { value }
    }

    /// Create an invalid geometry error
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Create a session format error
    pub fn session_format(message: impl Into<String>) -> Self {
        Self::SessionFormat {
            message: message.into(),
        }
    }

    /// Create an unknown event index error
    pub fn unknown_event(index: usize, count: usize) -> Self {
        Self::UnknownEvent { index, count }
    }
}
