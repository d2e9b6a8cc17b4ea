//! Application constants for the scattergraph core
//!
//! This module contains the fixed protocol values, scan depths, and default
//! mappings used throughout the library.

// =============================================================================
// Serial Date Conversion
// =============================================================================

/// Spreadsheet serial date epoch: 1899-12-30 (serial 0).
pub const SERIAL_EPOCH_YMD: (i32, u32, u32) = (1899, 12, 30);

/// Whole seconds per day, used when converting fractional serial days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// =============================================================================
// Delimited Table Parsing
// =============================================================================

/// Number of leading lines inspected when auto-detecting the delimiter.
pub const DELIMITER_SCAN_LINES: usize = 5;

/// Maximum number of leading lines scanned for the header row.
pub const HEADER_SCAN_LINES: usize = 10;

/// Offset (in lines, below the header) of the conventional units row.
pub const UNITS_ROW_OFFSET: usize = 2;

/// A candidate units row is discarded when its field count differs from the
/// header's by more than this.
pub const UNITS_FIELD_COUNT_TOLERANCE: usize = 2;

/// Timestamp layouts accepted by the permissive data-row time parser,
/// tried in order. Date-only layouts are handled separately (midnight).
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
];

/// Date-only layouts accepted by the permissive parser (time = 00:00:00).
pub const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

// =============================================================================
// Manning's Curve Generation
// =============================================================================

/// Depth sweep resolution: the curve has `MANNINGS_STEPS + 1` points.
pub const MANNINGS_STEPS: usize = 50;

/// Conversion constant of the US-customary Manning's equation.
pub const MANNINGS_K: f64 = 1.486;

// =============================================================================
// Session Persistence
// =============================================================================

/// Current session document schema version.
///
/// Version history:
/// - 1: datasets + events + range only
/// - 2: adds the Manning's block and the view-mode/active-metrics block
pub const SESSION_SCHEMA_VERSION: u32 = 2;

/// Second-precision timestamp layout used inside session documents.
pub const SESSION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
