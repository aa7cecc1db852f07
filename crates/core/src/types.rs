//! Core types for the cardfile contact book
//!
//! This module defines the foundational types:
//! - ContactId: Unique identifier minted for each stored contact
//! - Contact: One address-book record (name, email, phone, address)

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Unique identifier for a stored contact
///
/// A ContactId is a wrapper around a UUID v4, minted by the store when a
/// contact is added. Ids are never reused and never derived from record
/// content. On disk and in display they are rendered as 32 lowercase hex
/// characters without hyphens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Mint a new random ContactId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ContactId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a ContactId from a string representation
    ///
    /// Accepts the simple 32-hex-digit form used on disk as well as the
    /// standard hyphenated UUID form.
    ///
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the raw bytes of this ContactId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

// Serialized as the bare hex string so the id can key a JSON object.
impl Serialize for ContactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.simple())
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ContactId::from_string(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid contact id: {:?}", s)))
    }
}

/// One address-book record
///
/// Four free-form string fields. No field is structurally validated; empty
/// strings are permitted everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

impl Contact {
    /// Create a contact from its four fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}
