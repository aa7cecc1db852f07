//! Cardfile - File-backed contact book with a durable JSON record store
//!
//! Cardfile stores contact records (name, email, phone, address) in one
//! human-diffable JSON file per named store, keyed by generated identifiers.
//!
//! # Quick Start
//!
//! ```ignore
//! use cardfile::{Contact, ContactBook};
//!
//! // Open (or create) the store backed by main.json
//! let book = ContactBook::open("main")?;
//!
//! // Store a record
//! let id = book.add(Contact::new("Ada", "ada@x.com", "555", "1 Lane"))?;
//!
//! // Retrieve it
//! let ada = book.get(&id)?;
//! ```
//!
//! # Architecture
//!
//! All operations go through [`ContactBook`], which rewrites the whole
//! document crash-safely on every mutation. Internal implementation details
//! (file codec, atomic replacement) live in `cardfile-store`; the core data
//! types live in `cardfile-core`.

// Re-export the public API from cardfile-store
pub use cardfile_store::*;
