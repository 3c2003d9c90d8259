//! Error types for storage operations.

use tessera_core::ElementId;
use thiserror::Error;

/// Convenience alias for storage results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
///
/// Engine-level failures (I/O, corruption, resource limits) are not
/// recoverable locally; they propagate up and abort the enclosing
/// operation. Read misses are only an error where the caller needs to
/// distinguish "no such element": [`StoreError::ElementNotFound`] is
/// surfaced by element lookups, while metadata and location lookups return
/// an empty or undefined value instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be opened or created.
    #[error("failed to open store: {0}")]
    Open(#[from] redb::DatabaseError),

    /// A transaction could not be started.
    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// A table could not be opened or created.
    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    /// An engine-level storage failure (I/O, corruption, resource limits).
    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    /// A transaction failed to commit.
    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// An element lookup missed.
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    /// An insert-only put hit an existing element.
    #[error("element already exists: {0}")]
    ElementExists(ElementId),

    /// The bulk writer was used after a failed commit left it without an
    /// active transaction.
    #[error("index writer has no active transaction")]
    WriterClosed,
}
