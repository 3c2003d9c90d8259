//! Packed coordinate records.
//!
//! The locations table maps an element id to a fixed 12-byte record:
//! three consecutive 32-bit integers (x, y, version). A missing id reads as
//! an undefined [`Location`] — the expected, common case for ids without
//! known coordinates — so lookups here never fail with "not found". An
//! explicitly stored undefined location reads back the same way; callers
//! cannot distinguish the two, and [`exists`](Locations::exists) only
//! reports whether a record is stored at all.

use redb::{ReadOnlyTable, ReadTransaction, ReadableTable, Table, WriteTransaction};
use tessera_core::{ElementId, Location};

use crate::error::StoreResult;
use crate::tables::{self, open_or_absent};

type LocationParts = (i32, i32, i32);

/// Write handle for the locations table, bound to one write transaction.
pub struct Locations<'txn> {
    table: Table<'txn, u64, LocationParts>,
}

impl<'txn> Locations<'txn> {
    /// Open the locations table inside a write transaction, creating it if
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`](crate::StoreError::Table) if the table
    /// cannot be opened.
    pub fn open(txn: &'txn WriteTransaction) -> StoreResult<Self> {
        Ok(Self { table: txn.open_table(tables::LOCATIONS)? })
    }

    /// Store a location under an id, overwriting any previous record.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn put(&mut self, id: ElementId, location: Location) -> StoreResult<()> {
        self.table.insert(id.as_u64(), location.to_parts())?;
        Ok(())
    }

    /// Remove a record. Removing an absent id is a silent no-op.
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn del(&mut self, id: ElementId) -> StoreResult<bool> {
        Ok(self.table.remove(id.as_u64())?.is_some())
    }

    /// Get the location stored under an id, or an undefined location if the
    /// id is absent.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors; absence is not one.
    pub fn get(&self, id: ElementId) -> StoreResult<Location> {
        read_location(&self.table, id)
    }

    /// Whether a record (defined or not) is stored under the id.
    ///
    /// Distinct from whether the returned location is defined.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn exists(&self, id: ElementId) -> StoreResult<bool> {
        Ok(self.table.get(id.as_u64())?.is_some())
    }
}

/// Read view of the locations table, bound to one snapshot.
pub struct LocationsView {
    table: Option<ReadOnlyTable<u64, LocationParts>>,
}

impl LocationsView {
    /// Open the locations table inside a read transaction.
    ///
    /// A snapshot taken before the table was ever written reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`](crate::StoreError::Table) if the table
    /// cannot be opened.
    pub fn open(txn: &ReadTransaction) -> StoreResult<Self> {
        Ok(Self { table: open_or_absent(txn.open_table(tables::LOCATIONS))? })
    }

    /// Get the location stored under an id, or an undefined location if the
    /// id is absent.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors; absence is not one.
    pub fn get(&self, id: ElementId) -> StoreResult<Location> {
        match &self.table {
            Some(table) => read_location(table, id),
            None => Ok(Location::undefined(0)),
        }
    }

    /// Whether a record (defined or not) is stored under the id.
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

fn read_location<T>(table: &T, id: ElementId) -> StoreResult<Location>
where
    T: ReadableTable<u64, LocationParts>,
{
    Ok(table
        .get(id.as_u64())?
        .map(|guard| Location::from_parts(guard.value()))
        .unwrap_or_else(|| Location::undefined(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use tessera_core::Coords;

    #[test]
    fn put_then_get_roundtrip() {
        let store = Store::in_memory().expect("failed to create store");
        let location = Location::new(Coords::new(-133_777_000, 525_163_000), 5);

        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut locations = Locations::open(&txn).expect("failed to open");
            locations.put(ElementId::new(42), location).expect("failed to put");
            assert_eq!(locations.get(ElementId::new(42)).expect("failed to get"), location);
        }
        txn.commit().expect("failed to commit");

        let txn = store.begin_read().expect("failed to begin read");
        let locations = LocationsView::open(&txn).expect("failed to open view");
        assert_eq!(locations.get(ElementId::new(42)).expect("failed to get"), location);
        assert!(locations.exists(ElementId::new(42)).expect("failed to check"));
    }

    #[test]
    fn absent_id_reads_as_undefined() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_read().expect("failed to begin read");
        let locations = LocationsView::open(&txn).expect("failed to open view");

        let location = locations.get(ElementId::new(1)).expect("failed to get");
        assert!(!location.is_defined());
        assert!(!locations.exists(ElementId::new(1)).expect("failed to check"));
    }

    #[test]
    fn stored_undefined_location_exists() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut locations = Locations::open(&txn).expect("failed to open");
            locations.put(ElementId::new(8), Location::undefined(2)).expect("failed to put");

            // Indistinguishable from never-written by `get`, but `exists`
            // reports the record.
            let read = locations.get(ElementId::new(8)).expect("failed to get");
            assert!(!read.is_defined());
            assert_eq!(read.version(), 2);
            assert!(locations.exists(ElementId::new(8)).expect("failed to check"));
        }
        txn.commit().expect("failed to commit");
    }

    #[test]
    fn delete_is_idempotent() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut locations = Locations::open(&txn).expect("failed to open");
            locations
                .put(ElementId::new(3), Location::new(Coords::new(1, 2), 1))
                .expect("failed to put");
            assert!(locations.del(ElementId::new(3)).expect("failed to del"));
            assert!(!locations.del(ElementId::new(3)).expect("failed to del absent"));
            assert!(!locations.get(ElementId::new(3)).expect("failed to get").is_defined());
        }
        txn.commit().expect("failed to commit");
    }
}
