//! Error types for the contact book
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;

use thiserror::Error;

use crate::types::ContactId;

/// Result type alias for contact book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contact book
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file could not be read, created, or written)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Contact not found in the document
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// File contents are not a well-formed wrapper document
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Malformed(e.to_string())
    }
}
