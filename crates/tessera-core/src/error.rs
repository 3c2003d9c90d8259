//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoreError {
    /// A geographic coordinate lies outside the valid longitude/latitude
    /// domain.
    #[error("coordinate out of range: lon {lon}, lat {lat}")]
    CoordinateOutOfRange {
        /// Longitude in degrees.
        lon: f64,
        /// Latitude in degrees.
        lat: f64,
    },
}
