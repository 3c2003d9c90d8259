//! Tessera Storage
//!
//! An embedded storage and spatial indexing layer for planet-scale map
//! datasets, built on the [`redb`] transactional key-value engine.
//!
//! The layer adds three things on top of the engine:
//!
//! - **Typed entity stores** — [`Elements`] (id → opaque serialized
//!   payload, zero-copy reads), [`Locations`] (id → packed 12-byte
//!   coordinate record), and [`Metadata`] (string key → string value).
//! - **Adjacency indexes** — [`Index`], a one-to-many id relationship kept
//!   as a sorted, deduplicated set of 64-bit values per key, plus
//!   [`IndexWriter`] for bulk construction with bounded transaction size.
//! - **Traversals** — a single-pass spatial subtree scan over a cell-keyed
//!   index and an adjacency fan-out lookup, both accumulating into a
//!   [`RoaringTreemap`].
//!
//! # Transactions and handles
//!
//! Every handle binds one named table inside one open transaction and is
//! only valid for that transaction's lifetime. Write handles (`Metadata`,
//! `Elements`, `Locations`, `Index`) borrow their [`redb::WriteTransaction`];
//! read views (`MetadataView`, `ElementsView`, `LocationsView`, `IndexView`)
//! capture the snapshot of a [`redb::ReadTransaction`]. The engine provides
//! snapshot isolation: readers never block the single writer and vice versa.
//!
//! # Example
//!
//! ```
//! use roaring::RoaringTreemap;
//! use tessera_core::ElementId;
//! use tessera_storage::{tables::names, Elements, Index, IndexView, Store};
//!
//! let store = Store::in_memory()?;
//!
//! let txn = store.begin_write()?;
//! {
//!     let mut elements = Elements::open(&txn, names::NODES)?;
//!     elements.put(ElementId::new(7), b"payload")?;
//!     let mut index = Index::open(&txn, names::NODE_WAY)?;
//!     index.put(7, 400)?;
//!     index.put(7, 401)?;
//! }
//! txn.commit()?;
//!
//! let txn = store.begin_read()?;
//! let index = IndexView::open(&txn, names::NODE_WAY)?;
//! let mut ways = RoaringTreemap::new();
//! index.scan_values(7, &mut ways)?;
//! assert_eq!(ways.len(), 2);
//! # Ok::<(), tessera_storage::StoreError>(())
//! ```
//!
//! # Modules
//!
//! - [`store`] - Store environment ([`Store`], [`StoreConfig`])
//! - [`tables`] - Table definitions and stable table names
//! - [`metadata`] - String key/value facts about the dataset
//! - [`elements`] - Serialized element payloads
//! - [`locations`] - Packed coordinate records
//! - [`index`] - Adjacency indexes and the two traversals
//! - [`writer`] - Batched bulk-load writer
//! - [`error`] - Error types ([`StoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod elements;
pub mod error;
pub mod index;
pub mod locations;
pub mod metadata;
pub mod store;
pub mod tables;
pub mod writer;

pub use elements::{Elements, ElementsView, Payload};
pub use error::{StoreError, StoreResult};
pub use index::{Index, IndexView};
pub use locations::{Locations, LocationsView};
pub use metadata::{Metadata, MetadataView};
pub use store::{Store, StoreConfig};
pub use writer::{IndexWriter, DEFAULT_BATCH_WRITES};

pub use roaring::RoaringTreemap;
