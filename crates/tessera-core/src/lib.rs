//! Tessera Core
//!
//! This crate provides the engine-agnostic domain types shared by the
//! Tessera storage layer:
//!
//! - **Identifiers**: [`ElementId`] for referencing map elements
//! - **Coordinates**: [`Coords`], a fixed-point encoding of geographic
//!   coordinates, and [`Location`], a versioned coordinate record with an
//!   explicit undefined state
//! - **Cells**: [`CellId`], a hierarchical cell id whose sort order keeps
//!   all descendants of an ancestor cell in one contiguous range
//!
//! # Example
//!
//! ```
//! use tessera_core::{Coords, ElementId, Location};
//!
//! let id = ElementId::new(5_432_109_876);
//! let coords = Coords::from_degrees(13.3777, 52.5163)?;
//! let location = Location::new(coords, 3);
//!
//! assert_eq!(id.as_u64(), 5_432_109_876);
//! assert!(location.is_defined());
//! assert_eq!(location.version(), 3);
//! assert_eq!(Location::from_parts(location.to_parts()), location);
//! # Ok::<(), tessera_core::CoreError>(())
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`ElementId`], [`Coords`], [`Location`], [`CellId`])
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{CellId, Coords, ElementId, Location, INDEX_LEVEL, MAX_LEVEL};
