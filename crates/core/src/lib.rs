//! Core types for the cardfile contact book
//!
//! This crate defines the foundational types used throughout the system:
//! - ContactId: Unique identifier minted for each stored contact
//! - Contact: One address-book record (name, email, phone, address)
//! - Document: The persisted wrapper mapping ids to contacts
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use document::Document;
pub use error::{Error, Result};
pub use types::{Contact, ContactId};
