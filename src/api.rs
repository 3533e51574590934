use std::path::Path;
use log::info;
use crate::coordinate::{BoundingBox, CoordinateSpace, CoordinateSystemConfig, CoordinateTransformer,
                        FlatEarthCoordinateSystem, Point};
use crate::errors::GeoResult;
use crate::utils::geodesic_utils;
use crate::utils::logger::Logger;

/// Main interface to the groundkit library
pub struct GroundKit {
    logger: Logger,
    transformer: CoordinateTransformer,
}

impl GroundKit {
    /// Create a new GroundKit instance without a flat-Earth system
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; nothing is written when None
    ///
    /// # Returns
    /// A GroundKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> GeoResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::console_only(),
        };
        Ok(GroundKit { logger, transformer: CoordinateTransformer::new() })
    }

    /// Use the given flat-Earth system for subsequent transforms
    pub fn set_coordinate_system(&mut self, system: FlatEarthCoordinateSystem) -> GeoResult<()> {
        info!("Switching to {}", system.description());
        self.logger.log(&format!("Coordinate system: {}", system.description()))?;
        self.transformer = CoordinateTransformer::with_flat_earth(system);
        Ok(())
    }

    /// Load the flat-Earth system from a TOML configuration file
    pub fn load_coordinate_system<P: AsRef<Path>>(&mut self, path: P) -> GeoResult<()> {
        let system = CoordinateSystemConfig::from_file(path)?.build()?;
        self.set_coordinate_system(system)
    }

    /// The active flat-Earth system, if any
    pub fn coordinate_system(&self) -> Option<&FlatEarthCoordinateSystem> {
        self.transformer.flat_earth()
    }

    /// Convert a lon/lat point into the active flat-Earth system
    pub fn to_flat_earth(&self, lon_lat: &Point) -> GeoResult<Point> {
        self.transformer.transform_point(lon_lat, CoordinateSpace::LonLat, CoordinateSpace::FlatEarth)
    }

    /// Convert a flat-Earth point of the active system to lon/lat
    pub fn to_lon_lat(&self, flat: &Point) -> GeoResult<Point> {
        self.transformer.transform_point(flat, CoordinateSpace::FlatEarth, CoordinateSpace::LonLat)
    }

    /// Transform points between arbitrary coordinate spaces
    pub fn transform(&self, points: &[Point], from: CoordinateSpace, to: CoordinateSpace) -> GeoResult<Vec<Point>> {
        let result = self.transformer.transform_points(points, from, to)?;
        self.logger.log(&format!("Transformed {} points from {} to {}", points.len(), from, to))?;
        Ok(result)
    }

    /// Geographic bounding box of a circle around a lon/lat point
    ///
    /// Uses the ellipsoid of the active system, or WGS84 without one.
    pub fn bounding_box_around(&self, center: &Point, radius: f64) -> GeoResult<BoundingBox> {
        let ellipsoid = self.coordinate_system()
            .map(|system| *system.ellipsoid())
            .unwrap_or_default();
        geodesic_utils::bounding_box_around(center, radius, &ellipsoid)
    }
}
