//! ContactBook: the durable record store
//!
//! ## Design
//!
//! ContactBook is a stateless handle over one document file. It holds no
//! in-memory copy of the document; every operation is a complete
//! read-modify-write of the backing file, so two handles on the same file
//! always observe each other's committed writes.
//!
//! ## Locking
//!
//! A per-instance mutex serializes the read-modify-write cycle of every
//! mutation, so threads sharing one handle cannot interleave and lose a
//! write. Cross-process coordination is out of scope for a single-user tool.
//!
//! ## API
//!
//! - `open` / `open_in`: resolve the backing file, creating an empty
//!   document on first use
//! - `list_all`, `get`: read operations, full file read per call
//! - `add`, `update`, `remove`: mutations, full document rewrite per call

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use cardfile_core::{Contact, ContactId, Document, Error, Result};

use crate::{codec, fs};

/// Durable mapping from [`ContactId`] to [`Contact`], backed by one JSON
/// file per store name.
///
/// # Example
///
/// ```ignore
/// use cardfile_store::ContactBook;
/// use cardfile_core::Contact;
///
/// let book = ContactBook::open("main")?;
/// let id = book.add(Contact::new("Ada", "ada@x.com", "555", "1 Lane"))?;
/// let ada = book.get(&id)?;
/// book.remove(&id)?;
/// ```
pub struct ContactBook {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ContactBook {
    /// Open the store named `name`, backed by `<name>.json` in the current
    /// directory.
    ///
    /// Creates the file with an empty wrapper document if it does not
    /// exist. Fails with an I/O error if creation fails; never fails merely
    /// because the file already exists.
    pub fn open(name: &str) -> Result<Self> {
        Self::open_in(".", name)
    }

    /// Open the store named `name`, backed by `<name>.json` under `dir`.
    pub fn open_in(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.json", name));
        let book = ContactBook {
            path,
            write_lock: Mutex::new(()),
        };
        if !book.path.exists() {
            debug!(path = %book.path.display(), "Creating empty contact book");
            book.write_document(&Document::new())?;
        }
        Ok(book)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of every stored contact
    ///
    /// Reads the full file on every call; nothing is cached between calls.
    pub fn list_all(&self) -> Result<BTreeMap<ContactId, Contact>> {
        Ok(self.read_document()?.entries)
    }

    /// The contact stored under `id`
    pub fn get(&self, id: &ContactId) -> Result<Contact> {
        self.read_document()?
            .entries
            .get(id)
            .cloned()
            .ok_or(Error::NotFound(*id))
    }

    /// Insert a new contact and return its minted id
    ///
    /// If the rewrite fails the prior file contents remain intact and the
    /// contact is not persisted.
    pub fn add(&self, contact: Contact) -> Result<ContactId> {
        let _guard = self.write_lock.lock();
        let mut doc = self.read_document()?;
        let id = doc.mint_id();
        doc.entries.insert(id, contact);
        self.write_document(&doc)?;
        debug!(id = %id, total = doc.len(), "Added contact");
        Ok(id)
    }

    /// Replace the contact at `id` wholesale
    ///
    /// All four fields are replaced; there is no partial-field patch.
    pub fn update(&self, id: &ContactId, contact: Contact) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut doc = self.read_document()?;
        if !doc.entries.contains_key(id) {
            return Err(Error::NotFound(*id));
        }
        doc.entries.insert(*id, contact);
        self.write_document(&doc)?;
        debug!(id = %id, "Updated contact");
        Ok(())
    }

    /// Delete the entry at `id`
    pub fn remove(&self, id: &ContactId) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut doc = self.read_document()?;
        if doc.entries.remove(id).is_none() {
            return Err(Error::NotFound(*id));
        }
        self.write_document(&doc)?;
        debug!(id = %id, remaining = doc.len(), "Removed contact");
        Ok(())
    }

    fn read_document(&self) -> Result<Document> {
        let bytes = std::fs::read(&self.path)?;
        codec::decode(&bytes)
    }

    fn write_document(&self, doc: &Document) -> Result<()> {
        let bytes = codec::encode(doc)?;
        fs::write_atomic(&self.path, &bytes)?;
        Ok(())
    }
}
