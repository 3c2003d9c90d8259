//! Serialized element payloads.
//!
//! An element table maps a 64-bit element id to an opaque, variable-length
//! payload produced by the caller's serializer. This layer never interprets
//! the bytes. Reads are zero-copy: [`Payload`] is a guard over the stored
//! bytes, valid no longer than the transaction that produced it.
//!
//! Unlike metadata and locations, a lookup miss here is surfaced as
//! [`StoreError::ElementNotFound`] — callers need to distinguish "no such
//! element" from "empty payload".

use redb::{AccessGuard, ReadOnlyTable, ReadTransaction, ReadableTable, Table, WriteTransaction};
use tessera_core::ElementId;

use crate::error::{StoreError, StoreResult};
use crate::tables::{self, open_or_absent};

/// A zero-copy read guard over one stored element payload.
pub struct Payload<'a>(AccessGuard<'a, &'static [u8]>);

impl Payload<'_> {
    /// The stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.value()
    }
}

impl AsRef<[u8]> for Payload<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Write handle for an element table, bound to one write transaction.
pub struct Elements<'txn> {
    table: Table<'txn, u64, &'static [u8]>,
}

impl<'txn> Elements<'txn> {
    /// Open the named element table inside a write transaction, creating it
    /// if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`] if the table cannot be opened.
    pub fn open(txn: &'txn WriteTransaction, name: &str) -> StoreResult<Self> {
        Ok(Self { table: txn.open_table(tables::element_table(name))? })
    }

    /// Store a payload under an id, overwriting any previous payload.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn put(&mut self, id: ElementId, payload: &[u8]) -> StoreResult<()> {
        self.table.insert(id.as_u64(), payload)?;
        Ok(())
    }

    /// Store a payload under an id that must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ElementExists`] if the id is already present.
    pub fn put_new(&mut self, id: ElementId, payload: &[u8]) -> StoreResult<()> {
        if self.table.get(id.as_u64())?.is_some() {
            return Err(StoreError::ElementExists(id));
        }
        self.table.insert(id.as_u64(), payload)?;
        Ok(())
    }

    /// Remove an element. Removing an absent id is a silent no-op.
    ///
    /// Returns whether a payload was actually removed.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn del(&mut self, id: ElementId) -> StoreResult<bool> {
        Ok(self.table.remove(id.as_u64())?.is_some())
    }

    /// Whether a payload is stored under the id.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn exists(&self, id: ElementId) -> StoreResult<bool> {
        Ok(self.table.get(id.as_u64())?.is_some())
    }

    /// Get a zero-copy view of the payload stored under an id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ElementNotFound`] if the id is absent.
    pub fn get(&self, id: ElementId) -> StoreResult<Payload<'_>> {
        self.table.get(id.as_u64())?.map(Payload).ok_or(StoreError::ElementNotFound(id))
    }
}

/// Read view of an element table, bound to one snapshot.
pub struct ElementsView {
    table: Option<ReadOnlyTable<u64, &'static [u8]>>,
}

impl ElementsView {
    /// Open the named element table inside a read transaction.
    ///
    /// A snapshot taken before the table was ever written reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`] if the table cannot be opened.
    pub fn open(txn: &ReadTransaction, name: &str) -> StoreResult<Self> {
        Ok(Self { table: open_or_absent(txn.open_table(tables::element_table(name)))? })
    }

    /// Get a zero-copy view of the payload stored under an id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ElementNotFound`] if the id is absent.
    pub fn get(&self, id: ElementId) -> StoreResult<Payload<'_>> {
        let table = self.table.as_ref().ok_or(StoreError::ElementNotFound(id))?;
        table.get(id.as_u64())?.map(Payload).ok_or(StoreError::ElementNotFound(id))
    }

    /// Whether a payload is stored under the id.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn exists(&self, id: ElementId) -> StoreResult<bool> {
        match &self.table {
            Some(table) => Ok(table.get(id.as_u64())?.is_some()),
            None => Ok(false),
        }
    }
}
