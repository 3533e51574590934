//! Output formatting helpers
//!
//! Formatting of transformed points for the command line and batch files.

use crate::coordinate::{CoordinateSpace, Point};
use crate::utils::geometry_utils::{normalize_angle, to_polar};

/// Number of decimals written for a coordinate space
///
/// Degrees get 8 decimals (about a millimeter), meters get 3.
pub fn decimals_for(space: CoordinateSpace) -> usize {
    match space {
        CoordinateSpace::LonLat => 8,
        CoordinateSpace::MapView | CoordinateSpace::FlatEarth => 3,
    }
}

/// Format a point as a comma-separated line
pub fn format_point(point: &Point, space: CoordinateSpace) -> String {
    let precision = decimals_for(space);
    match point.z {
        Some(z) => format!("{:.*},{:.*},{:.3}", precision, point.x, precision, point.y, z),
        None => format!("{:.*},{:.*}", precision, point.x, precision, point.y),
    }
}

/// Format the polar form of a planar point, e.g. "125.000 m @ 45.00 deg"
pub fn format_polar(point: &Point) -> String {
    let [distance, angle] = to_polar(point.xy());
    format!("{:.3} m @ {} deg", distance, normalize_angle(angle))
}
