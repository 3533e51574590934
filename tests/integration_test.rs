//! Integration tests for the public API

extern crate std;

use approx::assert_abs_diff_eq;

use groundkit::{
    normalize_angle, to_polar, AxisConvention, CoordinateSpace, FlatEarthCoordinateSystem, GeoError, GroundKit,
    Point,
};

#[test]
fn test_mission_waypoints_round_trip() {
    let mut kit = GroundKit::new(None).unwrap();
    kit.set_coordinate_system(FlatEarthCoordinateSystem::with_wgs84(
        Point::new(19.0614, 47.4733), 25.0, AxisConvention::Nwu)).unwrap();

    let waypoints = vec![
        Point::new_3d(19.0614, 47.4733, 0.0),
        Point::new_3d(19.0650, 47.4750, 30.0),
        Point::new_3d(19.0580, 47.4700, 45.0),
    ];

    let flat = kit.transform(&waypoints, CoordinateSpace::LonLat, CoordinateSpace::FlatEarth).unwrap();
    assert_abs_diff_eq!(flat[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(flat[0].y, 0.0, epsilon = 1e-9);

    let back = kit.transform(&flat, CoordinateSpace::FlatEarth, CoordinateSpace::LonLat).unwrap();
    for (original, restored) in waypoints.iter().zip(back.iter()) {
        assert_abs_diff_eq!(original.x, restored.x, epsilon = 1e-7);
        assert_abs_diff_eq!(original.y, restored.y, epsilon = 1e-7);
        std::assert_eq!(original.z, restored.z);
    }
}

#[test]
fn test_fly_to_target_polar() {
    let mut kit = GroundKit::new(None).unwrap();
    kit.set_coordinate_system(FlatEarthCoordinateSystem::with_wgs84(
        Point::new(19.0, 47.0), 0.0, AxisConvention::Neu)).unwrap();

    // Target due east of the origin
    let target = kit.to_flat_earth(&Point::new(19.001, 47.0)).unwrap();
    let [distance, angle] = to_polar(target.xy());
    std::assert!(distance > 75.0 && distance < 77.0);
    std::assert_eq!(normalize_angle(angle), "90.00");
}

#[test]
fn test_flat_earth_without_system() {
    let kit = GroundKit::new(None).unwrap();
    std::assert!(kit.coordinate_system().is_none());

    let err = kit.to_flat_earth(&Point::new(19.0, 47.0)).unwrap_err();
    std::assert!(matches!(err, GeoError::ConfigError(_)));
}

#[test]
fn test_load_coordinate_system_file() {
    let path = std::env::temp_dir().join(format!("groundkit-api-{}.toml", std::process::id()));
    std::fs::write(&path, "[coordinate_system]\norigin = [19.0, 47.0]\ntype = \"xyz\"\n").unwrap();

    let mut kit = GroundKit::new(None).unwrap();
    let err = kit.load_coordinate_system(&path).unwrap_err();
    std::assert!(matches!(err, GeoError::InvalidAxisConvention(_)));
    std::assert!(kit.coordinate_system().is_none());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_bounding_box_around_home() {
    let kit = GroundKit::new(None).unwrap();
    let home = Point::new(19.0, 47.0);
    let bbox = kit.bounding_box_around(&home, 500.0).unwrap();
    std::assert!(bbox.contains(&home));
    std::assert!(bbox.height() > 0.008 && bbox.height() < 0.01);
}
