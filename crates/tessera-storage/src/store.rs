//! Store environment.
//!
//! A [`Store`] wraps one on-disk (or in-memory) database environment.
//! Opening it is a one-time setup step; all data access happens through
//! transactions begun here and the table handles constructed from them.

use std::path::Path;

use redb::Database;
use tracing::debug;

use crate::error::StoreResult;

/// Configuration options for the store environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreConfig {
    /// Page cache size in bytes. If not set, uses the engine's default.
    pub cache_size: Option<usize>,
}

impl StoreConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page cache size.
    #[must_use]
    pub const fn cache_size(mut self, size: usize) -> Self {
        self.cache_size = Some(size);
        self
    }
}

/// An open store environment.
///
/// The environment is process-wide shared state: any number of read
/// transactions may run concurrently against consistent snapshots, while at
/// most one write transaction is open at a time.
pub struct Store {
    db: Database,
}

impl Store {
    /// Open or create a store at the given path with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`](crate::StoreError::Open) if the
    /// database cannot be opened or created.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open_with_config(path, StoreConfig::default())
    }

    /// Open or create a store at the given path with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`](crate::StoreError::Open) if the
    /// database cannot be opened or created.
    pub fn open_with_config(path: impl AsRef<Path>, config: StoreConfig) -> StoreResult<Self> {
        let mut builder = Database::builder();
        if let Some(cache_size) = config.cache_size {
            builder.set_cache_size(cache_size);
        }
        let db = builder.create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened store");
        Ok(Self { db })
    }

    /// Create an in-memory store for testing.
    ///
    /// The store is lost when dropped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`](crate::StoreError::Open) if the
    /// database cannot be created.
    pub fn in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Ok(Self { db })
    }

    /// Begin a read-only transaction over a consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`](crate::StoreError::Transaction)
    /// if the transaction cannot be started.
    pub fn begin_read(&self) -> StoreResult<redb::ReadTransaction> {
        Ok(self.db.begin_read()?)
    }

    /// Begin the (single) write transaction.
    ///
    /// Blocks until no other write transaction is active.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transaction`](crate::StoreError::Transaction)
    /// if the transaction cannot be started.
    pub fn begin_write(&self) -> StoreResult<redb::WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Get the underlying database.
    pub const fn inner(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_supports_transactions() {
        let store = Store::in_memory().expect("failed to create in-memory store");
        let txn = store.begin_read().expect("failed to begin read");
        drop(txn);
        let txn = store.begin_write().expect("failed to begin write");
        txn.commit().expect("failed to commit empty transaction");
    }

    #[test]
    fn config_builder() {
        let config = StoreConfig::new().cache_size(16 * 1024 * 1024);
        assert_eq!(config.cache_size, Some(16 * 1024 * 1024));
    }

    #[test]
    fn open_creates_file() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("map.tessera");
        let store = Store::open(&path).expect("failed to open store");
        drop(store);
        assert!(path.exists());
        // Reopening an existing file works.
        Store::open(&path).expect("failed to reopen store");
    }
}
