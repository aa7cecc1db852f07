//! The persisted document: a wrapper object holding every contact
//!
//! The document is the unit of durability. Every mutation reads the whole
//! document, changes one entry, and rewrites the whole document. Entries are
//! kept in a `BTreeMap` so the on-disk key order is always sorted, which
//! keeps files diffable across rewrites.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Contact, ContactId};

/// The full persisted structure: `{ "entries": { id: contact, ... } }`
///
/// A file missing the `entries` field fails deserialization and is reported
/// as a malformed document. Unknown extra top-level fields are tolerated on
/// read and dropped by the next whole-document rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Every stored contact, keyed by its minted id
    pub entries: BTreeMap<ContactId, Contact>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no contacts are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mint an id that does not collide with any existing entry
    ///
    /// Re-mints until the id is absent from the current entries.
    pub fn mint_id(&self) -> ContactId {
        let mut id = ContactId::new();
        while self.entries.contains_key(&id) {
            id = ContactId::new();
        }
        id
    }
}
