//! String key/value facts about the dataset.
//!
//! The metadata table holds small configuration and versioning facts
//! (format version, source timestamp, and the like). An absent key reads as
//! the empty string; absence is not an error condition here.

use redb::{ReadOnlyTable, ReadTransaction, ReadableTable, Table, WriteTransaction};

use crate::error::StoreResult;
use crate::tables::{self, open_or_absent};

/// Write handle for the metadata table, bound to one write transaction.
///
/// Opens (and creates, if absent) the table at construction. At most one
/// live write handle per table per transaction is supported; the engine
/// reports a second open as an error.
pub struct Metadata<'txn> {
    table: Table<'txn, &'static str, &'static str>,
}

impl<'txn> Metadata<'txn> {
    /// Open the metadata table inside a write transaction, creating it if
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`](crate::StoreError::Table) if the table
    /// cannot be opened.
    pub fn open(txn: &'txn WriteTransaction) -> StoreResult<Self> {
        Ok(Self { table: txn.open_table(tables::METADATA)? })
    }

    /// Store a value under a key, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.table.insert(key, value)?;
        Ok(())
    }

    /// Get the value stored under a key, or `""` if the key is absent.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors; absence is not one.
    pub fn get(&self, key: &str) -> StoreResult<String> {
        read_value(&self.table, key)
    }
}

/// Read view of the metadata table, bound to one snapshot.
pub struct MetadataView {
    table: Option<ReadOnlyTable<&'static str, &'static str>>,
}

impl MetadataView {
    /// Open the metadata table inside a read transaction.
    ///
    /// A snapshot taken before the table was ever written reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`](crate::StoreError::Table) if the table
    /// cannot be opened.
    pub fn open(txn: &ReadTransaction) -> StoreResult<Self> {
        Ok(Self { table: open_or_absent(txn.open_table(tables::METADATA))? })
    }

    /// Get the value stored under a key, or `""` if the key is absent.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors; absence is not one.
    pub fn get(&self, key: &str) -> StoreResult<String> {
        match &self.table {
            Some(table) => read_value(table, key),
            None => Ok(String::new()),
        }
    }
}

fn read_value<T>(table: &T, key: &str) -> StoreResult<String>
where
    T: ReadableTable<&'static str, &'static str>,
{
    Ok(table.get(key)?.map(|guard| guard.value().to_string()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn put_then_get() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut metadata = Metadata::open(&txn).expect("failed to open metadata");
            metadata.put("format_version", "1").expect("failed to put");
            assert_eq!(metadata.get("format_version").expect("failed to get"), "1");
        }
        txn.commit().expect("failed to commit");

        let txn = store.begin_read().expect("failed to begin read");
        let metadata = MetadataView::open(&txn).expect("failed to open view");
        assert_eq!(metadata.get("format_version").expect("failed to get"), "1");
    }

    #[test]
    fn absent_key_reads_as_empty() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let metadata = Metadata::open(&txn).expect("failed to open metadata");
            assert_eq!(metadata.get("missing").expect("failed to get"), "");
        }
        txn.commit().expect("failed to commit");
    }

    #[test]
    fn view_of_fresh_store_reads_as_empty() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_read().expect("failed to begin read");
        let metadata = MetadataView::open(&txn).expect("failed to open view");
        assert_eq!(metadata.get("anything").expect("failed to get"), "");
    }

    #[test]
    fn put_overwrites() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut metadata = Metadata::open(&txn).expect("failed to open metadata");
            metadata.put("k", "old").expect("failed to put");
            metadata.put("k", "new").expect("failed to put");
            assert_eq!(metadata.get("k").expect("failed to get"), "new");
        }
        txn.commit().expect("failed to commit");
    }
}
