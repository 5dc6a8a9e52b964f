//! Polylines and polygons over fixed-precision geographic locations.
//!
//! Locations are stored as integer degrees × 10^7, so equality, hashing and
//! orientation tests are exact. Curves compare by shape, measure average
//! distances to each other and report where they cross themselves. Geometries
//! cross the crate boundary as Well-Known Text, see [`wkt`].
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod data;
mod error;
mod intersection;
pub mod metric;
mod orientation;
pub mod wkt;

pub use error::{ConstructionError, Error, ParseError};
pub use intersection::Intersects;
pub use orientation::Orientation;

#[cfg(test)]
pub mod testing;
