//! Durable JSON record store for the cardfile contact book
//!
//! One file per named store (`<name>.json`), holding a single wrapper
//! document that maps minted contact ids to records. Every mutation is a
//! complete read-modify-write of the file; rewrites are crash-safe via the
//! write-fsync-rename pattern.
//!
//! The main entry point is [`ContactBook`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod codec;
pub mod fs;

pub use book::ContactBook;

// Re-export core types so store users need only one import path
pub use cardfile_core::{Contact, ContactId, Document, Error, Result};
