//! Core data types for Tessera.
//!
//! This module defines the fundamental types that represent map elements,
//! their coordinates, and the hierarchical cell-id space used for spatial
//! indexing.

mod cell;
mod id;
mod location;

pub use cell::{CellId, INDEX_LEVEL, MAX_LEVEL};
pub use id::ElementId;
pub use location::{Coords, Location, COORD_PRECISION};

#[cfg(test)]
mod proptest_tests;
