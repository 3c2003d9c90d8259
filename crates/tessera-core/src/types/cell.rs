//! Hierarchical cell ids.
//!
//! A [`CellId`] identifies one cell of a recursive decomposition of the
//! globe. The id scheme (S2) guarantees that, in raw `u64` order, all
//! descendants of a cell at any fixed level form one contiguous range.
//! Spatial index tables exploit this: they store keys at a single canonical
//! level ([`INDEX_LEVEL`]) and answer "everything under this ancestor" with
//! one range scan, no tree recursion.
//!
//! How coordinates project into cell ids is the concern of import
//! pipelines; this layer only consumes ids.

use std::fmt;
use std::ops::Range;

use s2::cellid::CellID;
use serde::{Deserialize, Serialize};

/// Deepest level of the cell hierarchy.
pub const MAX_LEVEL: u8 = 30;

/// The canonical depth at which spatial index tables store their keys.
pub const INDEX_LEVEL: u8 = 16;

/// A cell of the hierarchical decomposition of the globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(u64);

impl CellId {
    /// Create a cell id from its raw u64 value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The level of this cell (0 = face cell, [`MAX_LEVEL`] = leaf).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn level(self) -> u8 {
        CellID(self.0).level() as u8
    }

    /// The half-open range of raw cell ids covering every descendant of
    /// this cell at `level`.
    ///
    /// A spatial index keyed at `level` answers a subtree query for this
    /// cell by scanning exactly this key range. If `level` is shallower
    /// than the cell's own level the range is empty.
    #[must_use]
    pub fn descendant_range(self, level: u8) -> Range<u64> {
        debug_assert!(level <= MAX_LEVEL);
        let cell = CellID(self.0);
        if u64::from(level) < cell.level() {
            return self.0..self.0;
        }
        let begin = cell.child_begin_at_level(u64::from(level));
        let end = cell.child_end_at_level(u64::from(level));
        begin.0..end.0
    }
}

impl From<u64> for CellId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
