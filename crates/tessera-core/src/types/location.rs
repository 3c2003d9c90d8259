//! Fixed-point coordinates and versioned location records.
//!
//! Coordinates are stored as 32-bit fixed-point integers at a resolution of
//! 100 nanodegrees (scale factor 1e7), not as floating-point degrees. A
//! [`Location`] pairs a coordinate with a revision counter and has an
//! explicit undefined state: at the API boundary the undefined state is
//! `coords() == None`, while in the 12-byte binary layout it is a reserved
//! sentinel coordinate pair. Callers never see the sentinel.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Scale factor between degrees and the fixed-point integer representation.
pub const COORD_PRECISION: f64 = 10_000_000.0;

/// Sentinel coordinate marking the undefined state in the binary layout.
///
/// Valid fixed-point coordinates never exceed 1.8e9 in magnitude, so the
/// pair `(UNDEFINED_COORD, UNDEFINED_COORD)` cannot collide with a real
/// position.
const UNDEFINED_COORD: i32 = i32::MAX;

/// A geographic coordinate in fixed-point representation.
///
/// `x` is the scaled longitude and `y` the scaled latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    x: i32,
    y: i32,
}

impl Coords {
    /// Create coordinates from raw fixed-point values.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create coordinates from degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CoordinateOutOfRange`] if `lon` is outside
    /// [-180, 180] or `lat` is outside [-90, 90].
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_degrees(lon: f64, lat: f64) -> Result<Self, CoreError> {
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::CoordinateOutOfRange { lon, lat });
        }
        Ok(Self {
            x: (lon * COORD_PRECISION).round() as i32,
            y: (lat * COORD_PRECISION).round() as i32,
        })
    }

    /// The scaled longitude.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// The scaled latitude.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon(self) -> f64 {
        f64::from(self.x) / COORD_PRECISION
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn lat(self) -> f64 {
        f64::from(self.y) / COORD_PRECISION
    }

    /// Pack both components into a single u64, x in the high 32 bits.
    ///
    /// Used to embed a coordinate pair in fixed-width 64-bit fields.
    #[must_use]
    pub const fn to_packed(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }

    /// Inverse of [`Coords::to_packed`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_packed(packed: u64) -> Self {
        Self { x: (packed >> 32) as u32 as i32, y: packed as u32 as i32 }
    }
}

/// A versioned coordinate record for one element.
///
/// A location is either *defined* (it carries coordinates) or *undefined*
/// (the element is known but has no usable position). Both states are
/// storable; a lookup of an id that was never written also yields an
/// undefined location, so the two cases are indistinguishable to readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    coords: Option<Coords>,
    version: i32,
}

impl Location {
    /// Create a defined location.
    #[must_use]
    pub const fn new(coords: Coords, version: i32) -> Self {
        Self { coords: Some(coords), version }
    }

    /// Create an undefined location carrying only a revision counter.
    #[must_use]
    pub const fn undefined(version: i32) -> Self {
        Self { coords: None, version }
    }

    /// The coordinates, or `None` for the undefined state.
    #[must_use]
    pub const fn coords(self) -> Option<Coords> {
        self.coords
    }

    /// The revision counter.
    #[must_use]
    pub const fn version(self) -> i32 {
        self.version
    }

    /// Whether this location carries coordinates.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        self.coords.is_some()
    }

    /// The binary layout: three consecutive 32-bit integers (x, y, version),
    /// with the undefined state materialized as the sentinel pair.
    #[must_use]
    pub fn to_parts(self) -> (i32, i32, i32) {
        match self.coords {
            Some(c) => (c.x(), c.y(), self.version),
            None => (UNDEFINED_COORD, UNDEFINED_COORD, self.version),
        }
    }

    /// Inverse of [`Location::to_parts`].
    #[must_use]
    pub fn from_parts((x, y, version): (i32, i32, i32)) -> Self {
        if x == UNDEFINED_COORD && y == UNDEFINED_COORD {
            Self { coords: None, version }
        } else {
            Self { coords: Some(Coords::new(x, y)), version }
        }
    }
}
