//! Unique identifiers for map elements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a map element.
///
/// Element ids are raw 64-bit integers assigned by the dataset producer.
/// Their numeric order is significant: element tables store ids in raw
/// numeric sort order, so range scans over a table visit ids ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    /// Create a new `ElementId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_roundtrip() {
        let id = ElementId::new(42);
        assert_eq!(id.as_u64(), 42);
    }

    #[test]
    fn element_ids_are_ordered() {
        let a = ElementId::new(1);
        let b = ElementId::new(2);
        assert!(a < b);
    }

    #[test]
    fn element_id_displays_raw_value() {
        assert_eq!(ElementId::new(123).to_string(), "123");
    }
}
