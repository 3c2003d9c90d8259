//! Table definitions and stable table names.
//!
//! Table names are part of the persisted layout: two builds interoperating
//! on the same data file must agree on them. Fixed-width keys and values
//! use the engine's native integer types, whose sort order matches numeric
//! order — the property the spatial subtree scan depends on.
//!
//! Location values are exactly three consecutive 32-bit integers
//! (x, y, version) with no padding.

use redb::{MultimapTableDefinition, TableDefinition};

/// Small string key/value facts about the dataset (versioning, timestamps).
pub const METADATA: TableDefinition<&str, &str> = TableDefinition::new(names::METADATA);

/// Packed coordinate records keyed by element id.
pub const LOCATIONS: TableDefinition<u64, (i32, i32, i32)> =
    TableDefinition::new(names::LOCATIONS);

/// Definition of an element payload table with the given name.
#[must_use]
pub fn element_table(name: &str) -> TableDefinition<'_, u64, &'static [u8]> {
    TableDefinition::new(name)
}

/// Definition of an adjacency index table with the given name.
///
/// Each key holds a sorted, deduplicated set of fixed-width 64-bit values.
#[must_use]
pub fn index_table(name: &str) -> MultimapTableDefinition<'_, u64, u64> {
    MultimapTableDefinition::new(name)
}

/// Well-known table names for a map dataset.
pub mod names {
    /// Dataset facts (string key → string value).
    pub const METADATA: &str = "metadata";

    /// Coordinate records for point elements.
    pub const LOCATIONS: &str = "locations";

    /// Payloads of point elements.
    pub const NODES: &str = "nodes";

    /// Payloads of path elements.
    pub const WAYS: &str = "ways";

    /// Payloads of group elements.
    pub const RELATIONS: &str = "relations";

    /// Spatial index: cell id → point element ids in that cell.
    pub const CELL_NODE: &str = "cell_node";

    /// Reverse reference index: point element → containing path elements.
    pub const NODE_WAY: &str = "node_way";

    /// Reverse reference index: point element → containing group elements.
    pub const NODE_RELATION: &str = "node_relation";

    /// Reverse reference index: path element → containing group elements.
    pub const WAY_RELATION: &str = "way_relation";

    /// Reverse reference index: group element → containing group elements.
    pub const RELATION_RELATION: &str = "relation_relation";
}

/// Map a missing table on the read path to "empty table".
///
/// Read transactions cannot create tables; a snapshot taken before the
/// first write simply has nothing in it, which is not an error.
pub(crate) fn open_or_absent<T>(result: Result<T, redb::TableError>) -> crate::StoreResult<Option<T>> {
    match result {
        Ok(table) => Ok(Some(table)),
        Err(redb::TableError::TableDoesNotExist(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_stable() {
        assert_eq!(names::METADATA, "metadata");
        assert_eq!(names::LOCATIONS, "locations");
        assert_eq!(names::NODES, "nodes");
        assert_eq!(names::CELL_NODE, "cell_node");
        assert_eq!(names::NODE_WAY, "node_way");
    }
}
