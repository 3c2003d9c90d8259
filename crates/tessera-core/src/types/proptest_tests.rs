//! Property-based tests for coordinate and location round-trips.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use super::{CellId, Coords, Location, MAX_LEVEL};

/// Strategy for raw fixed-point coordinates that avoids the reserved
/// sentinel pair.
fn arb_coords() -> impl Strategy<Value = Coords> {
    (any::<i32>(), any::<i32>())
        .prop_filter("sentinel pair is reserved", |(x, y)| !(*x == i32::MAX && *y == i32::MAX))
        .prop_map(|(x, y)| Coords::new(x, y))
}

proptest! {
    #[test]
    fn coords_packed_roundtrip(coords in arb_coords()) {
        prop_assert_eq!(Coords::from_packed(coords.to_packed()), coords);
    }

    #[test]
    fn degrees_roundtrip_within_precision(
        lon in -180.0f64..=180.0,
        lat in -90.0f64..=90.0,
    ) {
        let coords = Coords::from_degrees(lon, lat).unwrap();
        prop_assert!((coords.lon() - lon).abs() < 1e-7);
        prop_assert!((coords.lat() - lat).abs() < 1e-7);
    }

    #[test]
    fn location_parts_roundtrip(coords in arb_coords(), version in any::<i32>()) {
        let location = Location::new(coords, version);
        prop_assert_eq!(Location::from_parts(location.to_parts()), location);
    }

    #[test]
    fn undefined_location_roundtrip(version in any::<i32>()) {
        let location = Location::undefined(version);
        let decoded = Location::from_parts(location.to_parts());
        prop_assert!(!decoded.is_defined());
        prop_assert_eq!(decoded.version(), version);
    }

    /// Every descendant-at-level key range is nested inside the parent
    /// face cell's range.
    #[test]
    fn descendant_ranges_nest_under_face(face in 0u64..6, level in 1u8..=MAX_LEVEL) {
        let face_cell = CellId::new((2 * face + 1) << 60);
        let outer = face_cell.descendant_range(level);
        let first_child = CellId::new(face_cell.descendant_range(1).start);
        let inner = first_child.descendant_range(level);
        prop_assert!(outer.start <= inner.start);
        prop_assert!(inner.end <= outer.end);
    }
}
