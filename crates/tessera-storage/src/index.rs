//! Adjacency indexes and their traversals.
//!
//! An index table maps a 64-bit `from` key to a sorted, deduplicated set of
//! 64-bit `to` values, using the engine's native multimap support. Two uses
//! share this shape:
//!
//! - **Reverse reference indexes** (element → referencing elements),
//!   queried one key at a time with [`scan_values`](IndexView::scan_values).
//! - **Spatial indexes**, where `from` is a cell id at one fixed level.
//!   Because all descendants of an ancestor cell occupy one contiguous key
//!   range, [`scan_subtree`](IndexView::scan_subtree) answers "everything
//!   under this cell" with a single linear range scan — O(matches), no
//!   recursion into the cell tree.
//!
//! Both traversals bulk-consume each key's value set through the engine's
//! lazy multimap iterator and accumulate into a caller-supplied
//! [`RoaringTreemap`], which deduplicates by construction.

use redb::{
    MultimapTable, ReadOnlyMultimapTable, ReadTransaction, ReadableMultimapTable,
    WriteTransaction,
};
use roaring::RoaringTreemap;
use tessera_core::CellId;

use crate::error::StoreResult;
use crate::tables::{self, open_or_absent};

/// Write handle for an adjacency index table, bound to one write
/// transaction.
pub struct Index<'txn> {
    table: MultimapTable<'txn, u64, u64>,
}

impl<'txn> Index<'txn> {
    /// Open the named index table inside a write transaction, creating it
    /// if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`](crate::StoreError::Table) if the table
    /// cannot be opened.
    pub fn open(txn: &'txn WriteTransaction, name: &str) -> StoreResult<Self> {
        Ok(Self { table: txn.open_multimap_table(tables::index_table(name))? })
    }

    /// Insert `to` into the value set of `from`.
    ///
    /// Idempotent: inserting a pair that is already present changes
    /// nothing. Returns whether the pair was newly added.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn put(&mut self, from: u64, to: u64) -> StoreResult<bool> {
        let already_present = self.table.insert(from, to)?;
        Ok(!already_present)
    }

    /// Remove one value from the set of `from`. A no-op if absent.
    ///
    /// Returns whether the pair was actually removed.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying write fails.
    pub fn del(&mut self, from: u64, to: u64) -> StoreResult<bool> {
        Ok(self.table.remove(from, to)?)
    }

    /// See [`IndexView::scan_subtree`].
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn scan_subtree(
        &self,
        ancestor: CellId,
        level: u8,
        acc: &mut RoaringTreemap,
    ) -> StoreResult<()> {
        scan_subtree(&self.table, ancestor, level, acc)
    }

    /// See [`IndexView::scan_values`].
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn scan_values(&self, from: u64, acc: &mut RoaringTreemap) -> StoreResult<()> {
        scan_values(&self.table, from, acc)
    }
}

/// Read view of an adjacency index table, bound to one snapshot.
pub struct IndexView {
    table: Option<ReadOnlyMultimapTable<u64, u64>>,
}

impl IndexView {
    /// Open the named index table inside a read transaction.
    ///
    /// A snapshot taken before the table was ever written reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Table`](crate::StoreError::Table) if the table
    /// cannot be opened.
    pub fn open(txn: &ReadTransaction, name: &str) -> StoreResult<Self> {
        Ok(Self { table: open_or_absent(txn.open_multimap_table(tables::index_table(name)))? })
    }

    /// Accumulate every value reachable from any descendant-at-`level` of
    /// `ancestor` into `acc`.
    ///
    /// `level` must be the fixed level at which this index stores its keys.
    /// One linear pass over the key range `ancestor.descendant_range(level)`;
    /// an empty range yields an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn scan_subtree(
        &self,
        ancestor: CellId,
        level: u8,
        acc: &mut RoaringTreemap,
    ) -> StoreResult<()> {
        match &self.table {
            Some(table) => scan_subtree(table, ancestor, level, acc),
            None => Ok(()),
        }
    }

    /// Accumulate every value stored under exactly `from` into `acc`.
    ///
    /// A `from` with no entries yields an empty result.
    ///
    /// # Errors
    ///
    /// Fails only on engine-level errors.
    pub fn scan_values(&self, from: u64, acc: &mut RoaringTreemap) -> StoreResult<()> {
        match &self.table {
            Some(table) => scan_values(table, from, acc),
            None => Ok(()),
        }
    }
}

/// Range-scan the contiguous descendant key range and union all value sets.
fn scan_subtree<T>(table: &T, ancestor: CellId, level: u8, acc: &mut RoaringTreemap) -> StoreResult<()>
where
    T: ReadableMultimapTable<u64, u64>,
{
    let range = ancestor.descendant_range(level);
    if range.is_empty() {
        return Ok(());
    }
    for entry in table.range(range)? {
        let (_cell, values) = entry?;
        for value in values {
            acc.insert(value?.value());
        }
    }
    Ok(())
}

/// Position on exactly one key and consume its value set.
fn scan_values<T>(table: &T, from: u64, acc: &mut RoaringTreemap) -> StoreResult<()>
where
    T: ReadableMultimapTable<u64, u64>,
{
    for value in table.get(from)? {
        acc.insert(value?.value());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::tables::names;

    #[test]
    fn duplicate_insert_collapses() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut index = Index::open(&txn, names::NODE_WAY).expect("failed to open");
            assert!(index.put(10, 3).expect("failed to put"));
            assert!(!index.put(10, 3).expect("failed to re-put"));

            let mut set = RoaringTreemap::new();
            index.scan_values(10, &mut set).expect("failed to scan");
            assert_eq!(set.len(), 1);
            assert!(set.contains(3));
        }
        txn.commit().expect("failed to commit");
    }

    #[test]
    fn values_come_back_sorted_and_deduplicated() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut index = Index::open(&txn, names::NODE_WAY).expect("failed to open");
            for to in [3u64, 7, 7, 9] {
                index.put(55, to).expect("failed to put");
            }
            let mut set = RoaringTreemap::new();
            index.scan_values(55, &mut set).expect("failed to scan");
            assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 7, 9]);
        }
        txn.commit().expect("failed to commit");
    }

    #[test]
    fn del_is_idempotent() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_write().expect("failed to begin write");
        {
            let mut index = Index::open(&txn, names::WAY_RELATION).expect("failed to open");
            index.put(1, 2).expect("failed to put");
            assert!(index.del(1, 2).expect("failed to del"));
            assert!(!index.del(1, 2).expect("failed to del absent"));
            assert!(!index.del(99, 100).expect("failed to del never-written"));
        }
        txn.commit().expect("failed to commit");
    }

    #[test]
    fn scan_of_missing_key_is_empty() {
        let store = Store::in_memory().expect("failed to create store");
        let txn = store.begin_read().expect("failed to begin read");
        let index = IndexView::open(&txn, names::NODE_WAY).expect("failed to open view");
        let mut set = RoaringTreemap::new();
        index.scan_values(123, &mut set).expect("failed to scan");
        assert!(set.is_empty());
    }
}
