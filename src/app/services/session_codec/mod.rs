//! Session persistence
//!
//! Serializes the complete analysis state — datasets, events, hydraulic
//! state, view configuration — into a versioned JSON document and restores
//! it losslessly: timestamps round-trip to the second, numeric fields
//! exactly. Documents written by earlier schema revisions decode with
//! explicit, schema-level defaults rather than call-site presence checks.
//!
//! ## Architecture
//!
//! - [`document`] - Versioned document schema with serde defaulting
//! - [`codec`] - Session/document conversion and JSON encoding

pub mod codec;
pub mod document;

#[cfg(test)]
pub mod tests;

pub use codec::{decode_session, encode_session};
pub use document::SessionDocument;
