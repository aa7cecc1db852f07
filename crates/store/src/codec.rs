//! Document ⇄ bytes conversion
//!
//! The on-disk format is pretty-printed JSON (2-space indentation) with
//! entry keys in sorted order. Both properties are cosmetic, kept so store
//! files stay readable and diffable; decoding accepts any valid JSON
//! rendering of the wrapper object.

use cardfile_core::{Document, Result};

/// Encode a document into its on-disk byte representation
pub fn encode(doc: &Document) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(doc)?)
}

/// Decode a document from file bytes
///
/// Any parse failure, including a top level without the `entries` wrapper
/// field, is reported as `Error::Malformed`.
pub fn decode(bytes: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(bytes)?)
}
