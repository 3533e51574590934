//! Map view projection
//!
//! Map views render in spherical Web Mercator (EPSG:3857). These functions
//! move points between that plane and WGS84 longitude/latitude.

use std::f64::consts::PI;
use log::debug;
use super::point::Point;

/// Sphere radius in meters used by the map view projection
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude limit of the projection in degrees
pub const MAX_LATITUDE: f64 = 85.06;

/// Convert a longitude/latitude pair to map view coordinates
///
/// # Arguments
/// * `lon` - Longitude in degrees
/// * `lat` - Latitude in degrees, clamped to the projection limit
///
/// # Returns
/// A Point with x and y in meters
pub fn lon_lat_to_map_view(lon: f64, lat: f64) -> Point {
    let lat_constrained = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);

    let x = lon * PI * EARTH_RADIUS / 180.0;

    let lat_rad = lat_constrained * PI / 180.0;
    let y = EARTH_RADIUS * f64::ln(f64::tan(PI / 4.0 + lat_rad / 2.0));

    debug!("Map view ({}, {}) from lon/lat ({}, {})", x, y, lon, lat);

    Point::new(x, y)
}

/// Convert map view coordinates to a longitude/latitude pair
///
/// # Arguments
/// * `x` - X coordinate in meters
/// * `y` - Y coordinate in meters
///
/// # Returns
/// A Point with longitude and latitude in degrees
pub fn map_view_to_lon_lat(x: f64, y: f64) -> Point {
    let lon = (x * 180.0) / (EARTH_RADIUS * PI);
    let lat = (2.0 * f64::atan(f64::exp(y / EARTH_RADIUS)) - PI / 2.0) * 180.0 / PI;

    debug!("Lon/lat ({}, {}) from map view ({}, {})", lon, lat, x, y);

    Point::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_origin_maps_to_origin() {
        let p = lon_lat_to_map_view(0.0, 0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_antimeridian_x() {
        let p = lon_lat_to_map_view(180.0, 0.0);
        assert_abs_diff_eq!(p.x, 20_037_508.342_789_244, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let p = lon_lat_to_map_view(19.0614, 47.4733);
        let back = map_view_to_lon_lat(p.x, p.y);
        assert_abs_diff_eq!(back.x, 19.0614, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, 47.4733, epsilon = 1e-9);
    }

    #[test]
    fn test_latitude_is_clamped() {
        let polar = lon_lat_to_map_view(0.0, 90.0);
        let limit = lon_lat_to_map_view(0.0, MAX_LATITUDE);
        assert_eq!(polar.y, limit.y);
    }
}
