//! Geodesic helpers on longitude/latitude points
//!
//! Great-circle distance and bearing for points in degrees, and
//! conversion of a radius in meters around a point into a geographic
//! bounding box.

use log::debug;
use crate::coordinate::{AxisConvention, BoundingBox, CoordinateSpace, CoordinateTransformer,
                        EllipsoidModel, FlatEarthCoordinateSystem, Point};
use crate::errors::GeoResult;

/// Great-circle distance in meters between two lon/lat points
///
/// Uses the haversine formula on a sphere with the ellipsoid's mean radius.
pub fn haversine_distance(from: &Point, to: &Point, ellipsoid: &EllipsoidModel) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    ellipsoid.mean_radius() * c
}

/// Initial bearing from one lon/lat point to another, in degrees `[0, 360)`
pub fn initial_bearing(from: &Point, to: &Point) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees().rem_euclid(360.0);
    if bearing >= 360.0 { 0.0 } else { bearing }
}

/// Geographic bounding box enclosing a circle of `radius` meters
///
/// The circle is laid out in a flat-Earth system centered at `center`,
/// so the result accounts for the ellipsoid at that latitude.
pub fn bounding_box_around(center: &Point, radius: f64, ellipsoid: &EllipsoidModel) -> GeoResult<BoundingBox> {
    let system = FlatEarthCoordinateSystem::new(*center, 0.0, AxisConvention::Neu, ellipsoid);
    let transformer = CoordinateTransformer::with_flat_earth(system);

    let square = BoundingBox::from_point_buffer(&Point::new(0.0, 0.0), radius);
    let bbox = transformer.transform_bbox(&square, CoordinateSpace::FlatEarth, CoordinateSpace::LonLat)?;

    debug!("Bounding box for {} m around ({}, {}): {}", radius, center.x, center.y, bbox);
    Ok(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::coordinate::WGS84;

    #[test]
    fn test_distance_one_degree_on_equator() {
        let d = haversine_distance(&Point::new(0.0, 0.0), &Point::new(1.0, 0.0), &WGS84);
        assert_abs_diff_eq!(d, WGS84.mean_radius() * std::f64::consts::PI / 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(19.0402, 47.4979);
        let b = Point::new(21.0122, 52.2297);
        let ab = haversine_distance(&a, &b, &WGS84);
        let ba = haversine_distance(&b, &a, &WGS84);
        assert_abs_diff_eq!(ab, ba, epsilon = 1e-6);
        assert!(ab > 540_000.0 && ab < 560_000.0);
    }

    #[test]
    fn test_distance_close_to_flat_earth() {
        let origin = Point::new(19.0, 47.0);
        let target = Point::new(19.002, 47.001);
        let system = FlatEarthCoordinateSystem::with_wgs84(origin, 0.0, AxisConvention::Neu);
        let (x, y) = system.from_lon_lat(target.x, target.y);

        let d = haversine_distance(&origin, &target, &WGS84);
        assert!((d - x.hypot(y)).abs() < 1.0);
    }

    #[test]
    fn test_bearings() {
        let origin = Point::new(0.0, 0.0);
        assert_abs_diff_eq!(initial_bearing(&origin, &Point::new(0.0, 1.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(&origin, &Point::new(1.0, 0.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(&origin, &Point::new(0.0, -1.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(&origin, &Point::new(-1.0, 0.0)), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bounding_box_around() {
        let center = Point::new(19.0, 47.0);
        let bbox = bounding_box_around(&center, 1000.0, &WGS84).unwrap();

        assert!(bbox.contains(&center));
        assert_abs_diff_eq!(bbox.center().x, 19.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bbox.center().y, 47.0, epsilon = 1e-9);

        // Longitude degrees are shorter than latitude degrees away from the equator
        assert!(bbox.width() > bbox.height());

        let north_edge = haversine_distance(&center, &Point::new(19.0, bbox.max_y), &WGS84);
        assert!((north_edge - 1000.0).abs() < 5.0);
    }
}
