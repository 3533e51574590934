//! Coordinate handling for ground control
//!
//! This module provides the ellipsoid model, the flat-Earth coordinate
//! system and the transformations between the coordinate spaces used by
//! a ground station.

mod bbox;
mod point;
mod transform;
mod ellipsoid;
mod flat_earth;
mod config;
pub mod web_mercator;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::{CoordinateSpace, CoordinateTransformer};
pub use self::ellipsoid::{EllipsoidModel, WGS84};
pub use self::flat_earth::{AxisConvention, FlatEarthCoordinateSystem};
pub use self::config::{CoordinateSystemConfig, EllipsoidSpec};
