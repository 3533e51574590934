//! Planar geometry helpers
//!
//! Pure functions over planar coordinates: polar conversion, angle
//! normalization, distances and closest-point searches on line geometries.

use log::debug;
use crate::coordinate::Point;

/// Convert Cartesian coordinates to polar form
///
/// # Arguments
/// * `xy` - Cartesian coordinates
///
/// # Returns
/// `[distance, angle]` with the angle in degrees in `[0, 360)`, measured
/// with `atan2(y, x)`. The origin maps to `[0, 0]`.
pub fn to_polar(xy: [f64; 2]) -> [f64; 2] {
    let [x, y] = xy;
    let distance = x.hypot(y);

    if distance == 0.0 {
        return [0.0, 0.0];
    }

    let mut angle = y.atan2(x).to_degrees().rem_euclid(360.0);
    if angle >= 360.0 {
        angle = 0.0;
    }

    [distance, angle]
}

/// Normalize an angle in degrees into `[0, 360)` with two decimals
///
/// The angle is wrapped into `[0, 360)` first and then rounded to
/// hundredths; a value that rounds up to 360 reads `"0.00"`. Non-finite
/// input has no direction and yields `"NaN"`.
///
/// # Examples
/// ```
/// use groundkit::utils::geometry_utils::normalize_angle;
///
/// assert_eq!(normalize_angle(370.0), "10.00");
/// assert_eq!(normalize_angle(-10.0), "350.00");
/// ```
pub fn normalize_angle(angle: f64) -> String {
    if !angle.is_finite() {
        return "NaN".to_string();
    }

    let hundredths = (angle.rem_euclid(360.0) * 100.0).round() as i64 % 36_000;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Euclidean distance between two coordinate tuples
///
/// Tuples of differing length are compared over the shorter one.
pub fn euclidean_distance(first: &[f64], second: &[f64]) -> f64 {
    first.iter()
        .zip(second.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// Closest point of a geometry to a query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// The closest point on the geometry
    pub point: Point,
    /// Distance between the query point and `point`
    pub distance: f64,
    /// Index of the segment holding the closest point
    pub segment_index: usize,
}

/// Closest point to `point` on the segment from `start` to `end`
pub fn closest_point_on_segment(point: &Point, start: &Point, end: &Point) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_squared = dx * dx + dy * dy;

    if length_squared == 0.0 {
        return Point::new(start.x, start.y);
    }

    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / length_squared).clamp(0.0, 1.0);
    Point::new(start.x + t * dx, start.y + t * dy)
}

/// Closest point to `point` on an open polyline
///
/// Returns None for an empty polyline. A single vertex is its own closest
/// point.
pub fn closest_point_on_polyline(point: &Point, vertices: &[Point]) -> Option<ClosestPoint> {
    let first = vertices.first()?;

    if vertices.len() == 1 {
        return Some(ClosestPoint {
            point: Point::new(first.x, first.y),
            distance: euclidean_distance(&point.xy(), &first.xy()),
            segment_index: 0,
        });
    }

    let mut best: Option<ClosestPoint> = None;
    for (index, pair) in vertices.windows(2).enumerate() {
        let candidate = closest_point_on_segment(point, &pair[0], &pair[1]);
        let distance = euclidean_distance(&point.xy(), &candidate.xy());

        if best.map_or(true, |b| distance < b.distance) {
            best = Some(ClosestPoint { point: candidate, distance, segment_index: index });
        }
    }

    debug!("Closest point to ({}, {}) on polyline of {} vertices: {:?}",
           point.x, point.y, vertices.len(), best);

    best
}

/// Closest point to `point` on the boundary of a closed ring
///
/// The ring may or may not repeat its first vertex at the end.
pub fn closest_point_on_ring(point: &Point, vertices: &[Point]) -> Option<ClosestPoint> {
    let first = vertices.first()?;
    let mut closed = vertices.to_vec();
    if vertices.last() != Some(first) {
        closed.push(*first);
    }
    closest_point_on_polyline(point, &closed)
}
