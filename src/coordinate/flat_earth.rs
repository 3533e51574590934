//! Flat-Earth (local tangent plane) coordinate system
//!
//! Converts geodetic longitude/latitude pairs into planar coordinates in
//! meters around a fixed origin and back. North-south distances are scaled
//! with the meridional radius of curvature at the origin latitude and
//! east-west distances with the prime vertical radius times the cosine of
//! the origin latitude, so the approximation is accurate close to the origin.

use std::fmt;
use std::str::FromStr;
use log::debug;

use super::ellipsoid::{EllipsoidModel, WGS84};
use super::point::Point;
use crate::errors::{GeoError, GeoResult};

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Handedness of the planar axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConvention {
    /// North-east-up (left-handed)
    #[default]
    Neu,
    /// North-west-up (right-handed)
    Nwu,
}

impl AxisConvention {
    /// Short name used in configuration files
    pub fn code(&self) -> &'static str {
        match self {
            AxisConvention::Neu => "neu",
            AxisConvention::Nwu => "nwu",
        }
    }

    /// Sign applied to the lateral axis
    pub fn y_multiplier(&self) -> f64 {
        match self {
            AxisConvention::Neu => 1.0,
            AxisConvention::Nwu => -1.0,
        }
    }
}

impl FromStr for AxisConvention {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s {
            "neu" => Ok(AxisConvention::Neu),
            "nwu" => Ok(AxisConvention::Nwu),
            other => Err(GeoError::InvalidAxisConvention(other.to_string())),
        }
    }
}

impl fmt::Display for AxisConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Planar coordinate system centered at a geodetic origin
///
/// The system is immutable; build a new one when the origin, orientation,
/// axis convention or ellipsoid changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEarthCoordinateSystem {
    origin: Point,
    orientation: f64,
    axis_convention: AxisConvention,
    ellipsoid: EllipsoidModel,
    angle: f64,
    sin_angle: f64,
    cos_angle: f64,
    r1: f64,
    r2_cos_lat0: f64,
    y_mul: f64,
}

impl FlatEarthCoordinateSystem {
    /// Create a coordinate system on an explicit ellipsoid
    ///
    /// # Arguments
    /// * `origin` - Origin as longitude (`x`) and latitude (`y`) in degrees
    /// * `orientation` - Clockwise angle of the zero axis from north, in degrees
    /// * `axis_convention` - Handedness of the planar axes
    /// * `ellipsoid` - Earth model used for the radii of curvature
    pub fn new(
        origin: Point,
        orientation: f64,
        axis_convention: AxisConvention,
        ellipsoid: &EllipsoidModel,
    ) -> Self {
        let angle = orientation * DEG_TO_RAD;
        let lat0 = origin.y * DEG_TO_RAD;
        let a = ellipsoid.semi_major_axis();
        let e2 = ellipsoid.eccentricity_squared();

        let sin_lat0 = lat0.sin();
        let x = 1.0 - e2 * sin_lat0 * sin_lat0;
        let r1 = a * (1.0 - e2) / x.powf(1.5);
        let r2_cos_lat0 = a / x.sqrt() * lat0.cos();

        debug!(
            "Flat-Earth system at ({}, {}), orientation {}, {}: r1={}, r2*cos(lat0)={}",
            origin.x, origin.y, orientation, axis_convention, r1, r2_cos_lat0
        );

        FlatEarthCoordinateSystem {
            origin: Point::new(origin.x, origin.y),
            orientation,
            axis_convention,
            ellipsoid: *ellipsoid,
            angle,
            sin_angle: angle.sin(),
            cos_angle: angle.cos(),
            r1,
            r2_cos_lat0,
            y_mul: axis_convention.y_multiplier(),
        }
    }

    /// Create a coordinate system on the WGS84 ellipsoid
    pub fn with_wgs84(origin: Point, orientation: f64, axis_convention: AxisConvention) -> Self {
        Self::new(origin, orientation, axis_convention, &*WGS84)
    }

    /// Create a coordinate system from an axis convention given as text
    ///
    /// Fails with [`GeoError::InvalidAxisConvention`] unless the convention
    /// is `"neu"` or `"nwu"`.
    pub fn from_options(
        origin: Point,
        orientation: f64,
        axis_convention: &str,
        ellipsoid: Option<&EllipsoidModel>,
    ) -> GeoResult<Self> {
        let convention = axis_convention.parse::<AxisConvention>()?;
        Ok(Self::new(origin, orientation, convention, ellipsoid.unwrap_or(&*WGS84)))
    }

    /// Origin as longitude/latitude in degrees
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Orientation of the zero axis in degrees
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn axis_convention(&self) -> AxisConvention {
        self.axis_convention
    }

    pub fn ellipsoid(&self) -> &EllipsoidModel {
        &self.ellipsoid
    }

    /// Meridional radius of curvature at the origin latitude
    pub fn meridional_radius(&self) -> f64 {
        self.r1
    }

    /// Meters per radian of longitude at the origin latitude
    pub fn parallel_radius(&self) -> f64 {
        self.r2_cos_lat0
    }

    /// Convert a longitude/latitude pair in degrees to planar meters
    pub fn from_lon_lat(&self, lon: f64, lat: f64) -> (f64, f64) {
        let north = (lat - self.origin.y) * DEG_TO_RAD * self.r1;
        let east = (lon - self.origin.x) * DEG_TO_RAD * self.r2_cos_lat0;

        let x = north * self.cos_angle + east * self.sin_angle;
        let y = -north * self.sin_angle + east * self.cos_angle;

        (x, y * self.y_mul)
    }

    /// Convert planar meters back to a longitude/latitude pair in degrees
    pub fn to_lon_lat(&self, x: f64, y: f64) -> (f64, f64) {
        let y = y * self.y_mul;

        let north = x * self.cos_angle - y * self.sin_angle;
        let east = x * self.sin_angle + y * self.cos_angle;

        let lon = east / self.r2_cos_lat0 / DEG_TO_RAD + self.origin.x;
        let lat = north / self.r1 / DEG_TO_RAD + self.origin.y;

        (lon, lat)
    }

    /// Convert a geodetic point, passing altitude through
    pub fn point_from_lon_lat(&self, point: &Point) -> Point {
        let (x, y) = self.from_lon_lat(point.x, point.y);
        point.with_xy(x, y)
    }

    /// Convert a planar point, passing altitude through
    pub fn point_to_lon_lat(&self, point: &Point) -> Point {
        let (lon, lat) = self.to_lon_lat(point.x, point.y);
        point.with_xy(lon, lat)
    }

    /// Convert a batch of geodetic points
    pub fn points_from_lon_lat(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.point_from_lon_lat(p)).collect()
    }

    /// Convert a batch of planar points
    pub fn points_to_lon_lat(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.point_to_lon_lat(p)).collect()
    }

    /// Human-readable summary of the configuration
    pub fn description(&self) -> String {
        format!(
            "Flat Earth ({}) at lon={}, lat={}, orientation={} deg",
            self.axis_convention, self.origin.x, self.origin.y, self.orientation
        )
    }
}
