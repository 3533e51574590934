//! Coordinate transformation between the spaces used by a ground station

use std::fmt;
use std::str::FromStr;
use log::debug;

use super::bbox::BoundingBox;
use super::flat_earth::FlatEarthCoordinateSystem;
use super::point::Point;
use super::web_mercator::{lon_lat_to_map_view, map_view_to_lon_lat};
use crate::errors::{GeoError, GeoResult};

/// Coordinate spaces a point can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// WGS84 longitude/latitude in degrees
    LonLat,
    /// Web Mercator meters as used by map views
    MapView,
    /// Local flat-Earth meters around an origin
    FlatEarth,
}

impl CoordinateSpace {
    /// Get a description of this coordinate space
    pub fn description(&self) -> &'static str {
        match self {
            CoordinateSpace::LonLat => "WGS 84 longitude/latitude",
            CoordinateSpace::MapView => "Map view (EPSG:3857)",
            CoordinateSpace::FlatEarth => "Flat Earth",
        }
    }
}

impl FromStr for CoordinateSpace {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "lonlat" | "wgs84" | "epsg:4326" => Ok(CoordinateSpace::LonLat),
            "mapview" | "mercator" | "epsg:3857" => Ok(CoordinateSpace::MapView),
            "flat" | "flat-earth" => Ok(CoordinateSpace::FlatEarth),
            other => Err(GeoError::ParseError(format!("Unknown coordinate space: {}", other))),
        }
    }
}

impl fmt::Display for CoordinateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Transformer for converting between coordinate spaces
///
/// Conversions that involve [`CoordinateSpace::FlatEarth`] need a flat-Earth
/// system; all others work without one.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTransformer {
    flat_earth: Option<FlatEarthCoordinateSystem>,
}

impl CoordinateTransformer {
    /// Transformer without a flat-Earth system
    pub fn new() -> Self {
        CoordinateTransformer { flat_earth: None }
    }

    /// Transformer around the given flat-Earth system
    pub fn with_flat_earth(system: FlatEarthCoordinateSystem) -> Self {
        CoordinateTransformer { flat_earth: Some(system) }
    }

    pub fn flat_earth(&self) -> Option<&FlatEarthCoordinateSystem> {
        self.flat_earth.as_ref()
    }

    fn require_flat_earth(&self) -> GeoResult<&FlatEarthCoordinateSystem> {
        self.flat_earth.as_ref().ok_or_else(|| {
            GeoError::ConfigError("Flat Earth conversion requested without an origin".to_string())
        })
    }

    /// Express a point in longitude/latitude
    fn to_lon_lat(&self, point: &Point, from: CoordinateSpace) -> GeoResult<Point> {
        match from {
            CoordinateSpace::LonLat => Ok(*point),
            CoordinateSpace::MapView => {
                let p = map_view_to_lon_lat(point.x, point.y);
                Ok(point.with_xy(p.x, p.y))
            },
            CoordinateSpace::FlatEarth => Ok(self.require_flat_earth()?.point_to_lon_lat(point)),
        }
    }

    /// Express a longitude/latitude point in the target space
    fn from_lon_lat(&self, point: &Point, to: CoordinateSpace) -> GeoResult<Point> {
        match to {
            CoordinateSpace::LonLat => Ok(*point),
            CoordinateSpace::MapView => {
                let p = lon_lat_to_map_view(point.x, point.y);
                Ok(point.with_xy(p.x, p.y))
            },
            CoordinateSpace::FlatEarth => Ok(self.require_flat_earth()?.point_from_lon_lat(point)),
        }
    }

    /// Transform a point between coordinate spaces
    pub fn transform_point(&self, point: &Point, from: CoordinateSpace, to: CoordinateSpace) -> GeoResult<Point> {
        if from == to {
            return Ok(*point);
        }

        let lon_lat = self.to_lon_lat(point, from)?;
        let result = self.from_lon_lat(&lon_lat, to)?;

        debug!("Transformed ({}, {}) from {} to ({}, {}) in {}",
               point.x, point.y, from, result.x, result.y, to);

        Ok(result)
    }

    /// Transform a batch of points between coordinate spaces
    pub fn transform_points(&self, points: &[Point], from: CoordinateSpace, to: CoordinateSpace) -> GeoResult<Vec<Point>> {
        points.iter()
            .map(|p| self.transform_point(p, from, to))
            .collect()
    }

    /// Transform a bounding box between coordinate spaces
    ///
    /// All four corners are transformed so that rotated flat-Earth frames
    /// still yield a box enclosing the original region.
    pub fn transform_bbox(&self, bbox: &BoundingBox, from: CoordinateSpace, to: CoordinateSpace) -> GeoResult<BoundingBox> {
        if from == to {
            return Ok(*bbox);
        }

        let corners = self.transform_points(&bbox.corners(), from, to)?;
        BoundingBox::from_points(&corners)
            .ok_or_else(|| GeoError::GenericError("Bounding box has no corners".to_string()))
    }
}
