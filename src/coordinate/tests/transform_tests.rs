//! Tests for conversions between coordinate spaces

extern crate std;

use approx::assert_abs_diff_eq;
use crate::coordinate::{
    AxisConvention, BoundingBox, CoordinateSpace, CoordinateTransformer, FlatEarthCoordinateSystem, Point,
};

fn transformer() -> CoordinateTransformer {
    CoordinateTransformer::with_flat_earth(FlatEarthCoordinateSystem::with_wgs84(
        Point::new(19.0, 47.0), 30.0, AxisConvention::Nwu))
}

#[test]
fn test_same_space_is_identity() {
    let p = Point::new_3d(1.5, 2.5, 3.5);
    let result = CoordinateTransformer::new()
        .transform_point(&p, CoordinateSpace::FlatEarth, CoordinateSpace::FlatEarth)
        .unwrap();
    std::assert_eq!(result, p);
}

#[test]
fn test_flat_earth_requires_origin() {
    let err = CoordinateTransformer::new()
        .transform_point(&Point::new(19.0, 47.0), CoordinateSpace::LonLat, CoordinateSpace::FlatEarth)
        .unwrap_err();
    std::assert!(err.is_config_error());
}

#[test]
fn test_map_view_to_flat_earth_and_back() {
    let t = transformer();
    let lon_lat = Point::new_3d(19.05, 47.02, 50.0);

    let map_view = t.transform_point(&lon_lat, CoordinateSpace::LonLat, CoordinateSpace::MapView).unwrap();
    let flat = t.transform_point(&map_view, CoordinateSpace::MapView, CoordinateSpace::FlatEarth).unwrap();
    let direct = t.transform_point(&lon_lat, CoordinateSpace::LonLat, CoordinateSpace::FlatEarth).unwrap();

    assert_abs_diff_eq!(flat.x, direct.x, epsilon = 1e-6);
    assert_abs_diff_eq!(flat.y, direct.y, epsilon = 1e-6);
    std::assert_eq!(flat.z, Some(50.0));

    let back = t.transform_point(&flat, CoordinateSpace::FlatEarth, CoordinateSpace::LonLat).unwrap();
    assert_abs_diff_eq!(back.x, 19.05, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, 47.02, epsilon = 1e-9);
}

#[test]
fn test_bbox_contains_transformed_corners() {
    let t = transformer();
    let bbox = BoundingBox::new(-100.0, -50.0, 100.0, 50.0);

    let lon_lat = t.transform_bbox(&bbox, CoordinateSpace::FlatEarth, CoordinateSpace::LonLat).unwrap();
    for corner in bbox.corners() {
        let p = t.transform_point(&corner, CoordinateSpace::FlatEarth, CoordinateSpace::LonLat).unwrap();
        std::assert!(lon_lat.contains(&p));
    }
    std::assert!(lon_lat.contains(&Point::new(19.0, 47.0)));
}

#[test]
fn test_space_names() {
    std::assert_eq!("lonlat".parse::<CoordinateSpace>().unwrap(), CoordinateSpace::LonLat);
    std::assert_eq!("EPSG:3857".parse::<CoordinateSpace>().unwrap(), CoordinateSpace::MapView);
    std::assert_eq!("flat".parse::<CoordinateSpace>().unwrap(), CoordinateSpace::FlatEarth);
    std::assert!("utm".parse::<CoordinateSpace>().is_err());
}
