//! Batched bulk-load writer for adjacency indexes.
//!
//! A planet-scale bulk load cannot run inside one write transaction: the
//! engine accumulates uncommitted pages in proportion to the number of
//! writes. [`IndexWriter`] bounds that by committing and reopening its
//! transaction after every [`batch_writes`](IndexWriter::with_batch_size)
//! puts. The trade-off is giving up atomicity of the whole load: a crash
//! mid-load leaves a prefix of the data durably committed.

use redb::Database;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::Store;
use crate::tables;

/// Default number of puts between periodic commits.
pub const DEFAULT_BATCH_WRITES: u64 = 8_000_000;

/// A long-lived writer over one adjacency index table.
///
/// The writer owns one write transaction across many [`put`](Self::put)
/// calls. It therefore holds the store's single write slot from
/// construction until [`commit`](Self::commit); no other write transaction
/// can begin in between.
///
/// Callers must call [`commit`](Self::commit) after the last put; dropping
/// the writer without committing discards the writes since the last
/// periodic commit.
pub struct IndexWriter<'db> {
    db: &'db Database,
    name: String,
    txn: Option<redb::WriteTransaction>,
    writes: u64,
    batch_writes: u64,
    batches: u64,
}

impl<'db> IndexWriter<'db> {
    /// Open a bulk writer on the named index table with the default commit
    /// threshold.
    ///
    /// # Errors
    ///
    /// Fails if the write transaction cannot be started or the table
    /// cannot be created.
    pub fn new(store: &'db Store, name: &str) -> StoreResult<Self> {
        Self::with_batch_size(store, name, DEFAULT_BATCH_WRITES)
    }

    /// Open a bulk writer with a custom commit threshold.
    ///
    /// The threshold trades transaction memory against the granularity of
    /// durability during the load.
    ///
    /// # Errors
    ///
    /// Fails if the write transaction cannot be started or the table
    /// cannot be created.
    pub fn with_batch_size(store: &'db Store, name: &str, batch_writes: u64) -> StoreResult<Self> {
        let db = store.inner();
        let txn = db.begin_write()?;
        // Create the table up front so an empty load still persists it.
        txn.open_multimap_table(tables::index_table(name))?;
        Ok(Self {
            db,
            name: name.to_string(),
            txn: Some(txn),
            writes: 0,
            batch_writes: batch_writes.max(1),
            batches: 0,
        })
    }

    /// Insert `to` into the value set of `from`.
    ///
    /// After the batch threshold is exceeded, the current transaction is
    /// committed (including this put) and a fresh one is opened on the same
    /// table.
    ///
    /// # Errors
    ///
    /// Fails on engine-level errors, including a failed periodic commit or
    /// a failed reopen of the table afterwards; both are fatal to the
    /// writer.
    pub fn put(&mut self, from: u64, to: u64) -> StoreResult<()> {
        {
            let txn = self.txn.as_ref().ok_or(StoreError::WriterClosed)?;
            let mut table = txn.open_multimap_table(tables::index_table(&self.name))?;
            table.insert(from, to)?;
        }
        self.writes += 1;
        if self.writes > self.batch_writes {
            self.rollover()?;
        }
        Ok(())
    }

    /// Finalize the in-progress transaction.
    ///
    /// # Errors
    ///
    /// Fails if the final commit fails.
    pub fn commit(mut self) -> StoreResult<()> {
        let txn = self.txn.take().ok_or(StoreError::WriterClosed)?;
        txn.commit()?;
        debug!(index = %self.name, writes = self.writes, batches = self.batches, "index load committed");
        Ok(())
    }

    /// How many periodic commit-and-reopen cycles have happened so far.
    #[must_use]
    pub const fn batches_committed(&self) -> u64 {
        self.batches
    }

    /// How many puts the in-progress transaction holds.
    #[must_use]
    pub const fn pending_writes(&self) -> u64 {
        self.writes
    }

    /// Commit the current transaction and reopen a fresh one on the same
    /// table.
    fn rollover(&mut self) -> StoreResult<()> {
        let txn = self.txn.take().ok_or(StoreError::WriterClosed)?;
        txn.commit()?;
        let txn = self.db.begin_write()?;
        // Reopen the table so a failure surfaces here, not on the next put.
        txn.open_multimap_table(tables::index_table(&self.name))?;
        self.txn = Some(txn);
        self.batches += 1;
        self.writes = 0;
        debug!(index = %self.name, batches = self.batches, "committed write batch");
        Ok(())
    }
}
