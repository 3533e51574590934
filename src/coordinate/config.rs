//! Flat-Earth coordinate system configuration
//!
//! A coordinate system is described by a `[coordinate_system]` table:
//!
//! ```toml
//! [coordinate_system]
//! origin = [19.0, 47.0]
//! orientation = 0.0
//! type = "neu"
//! ellipsoid = "WGS84"
//! ```
//!
//! An ellipsoid that is not in the registry is written by its parameters:
//! `ellipsoid = { semi_major_axis = 6371000.0, inverse_flattening = inf }`.

use std::fmt;
use std::fs;
use std::path::Path;
use log::{debug, info};

use super::ellipsoid::{as_f64, EllipsoidModel};
use super::flat_earth::{AxisConvention, FlatEarthCoordinateSystem};
use super::point::Point;
use crate::errors::{GeoError, GeoResult};

const SECTION: &str = "coordinate_system";

/// Ellipsoid reference in a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum EllipsoidSpec {
    /// Name of a registered ellipsoid
    Named(String),
    /// Explicit parameters; an infinite inverse flattening is a sphere
    Custom {
        semi_major_axis: f64,
        inverse_flattening: f64,
    },
}

impl EllipsoidSpec {
    /// Resolve to an ellipsoid model
    pub fn resolve(&self) -> GeoResult<EllipsoidModel> {
        match self {
            EllipsoidSpec::Named(name) => EllipsoidModel::named(name),
            EllipsoidSpec::Custom { semi_major_axis, inverse_flattening } => {
                if !semi_major_axis.is_finite() || *semi_major_axis <= 0.0 {
                    return Err(GeoError::ConfigError(format!(
                        "semi_major_axis must be a positive number, got {}", semi_major_axis
                    )));
                }
                if inverse_flattening.is_nan() || *inverse_flattening <= 1.0 {
                    return Err(GeoError::ConfigError(format!(
                        "inverse_flattening must be greater than 1 or inf, got {}", inverse_flattening
                    )));
                }
                Ok(EllipsoidModel::new(*semi_major_axis, *inverse_flattening))
            }
        }
    }

    /// Short label for listings
    pub fn label(&self) -> String {
        match self {
            EllipsoidSpec::Named(name) => name.clone(),
            EllipsoidSpec::Custom { .. } => "custom".to_string(),
        }
    }

    fn from_toml(value: &toml::Value) -> GeoResult<Self> {
        if let Some(name) = value.as_str() {
            return Ok(EllipsoidSpec::Named(name.to_string()));
        }

        let table = value.as_table().ok_or_else(|| GeoError::ConfigError(
            "ellipsoid must be a name or a table of parameters".to_string()
        ))?;
        let field = |key: &str| table.get(key)
            .and_then(as_f64)
            .ok_or_else(|| GeoError::ConfigError(format!("ellipsoid {} must be a number", key)));

        Ok(EllipsoidSpec::Custom {
            semi_major_axis: field("semi_major_axis")?,
            inverse_flattening: field("inverse_flattening")?,
        })
    }
}

impl fmt::Display for EllipsoidSpec {
    /// TOML value form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EllipsoidSpec::Named(name) => write!(f, "\"{}\"", name),
            EllipsoidSpec::Custom { semi_major_axis, inverse_flattening } => write!(
                f, "{{ semi_major_axis = {:?}, inverse_flattening = {:?} }}",
                semi_major_axis, inverse_flattening
            ),
        }
    }
}

impl From<&EllipsoidModel> for EllipsoidSpec {
    /// Registry name when the model is registered, parameters otherwise
    fn from(ellipsoid: &EllipsoidModel) -> Self {
        EllipsoidModel::known_names()
            .into_iter()
            .find(|name| EllipsoidModel::named(name).ok().as_ref() == Some(ellipsoid))
            .map(EllipsoidSpec::Named)
            .unwrap_or_else(|| EllipsoidSpec::Custom {
                semi_major_axis: ellipsoid.semi_major_axis(),
                inverse_flattening: ellipsoid.inverse_flattening(),
            })
    }
}

/// Unvalidated description of a flat-Earth coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystemConfig {
    /// Origin longitude/latitude in degrees
    pub origin: Point,
    /// Clockwise angle of the zero axis from north, in degrees
    pub orientation: f64,
    /// Axis convention as written, "neu" or "nwu"
    pub axis_convention: String,
    /// Registered name or explicit parameters
    pub ellipsoid: EllipsoidSpec,
}

impl CoordinateSystemConfig {
    /// Configuration with default orientation, convention and ellipsoid
    pub fn new(origin: Point) -> Self {
        CoordinateSystemConfig {
            origin,
            orientation: 0.0,
            axis_convention: AxisConvention::default().code().to_string(),
            ellipsoid: EllipsoidSpec::Named("WGS84".to_string()),
        }
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GeoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let section = toml_value.get(SECTION)
            .and_then(|v| v.as_table())
            .ok_or_else(|| GeoError::ConfigError(format!("Missing [{}] table", SECTION)))?;

        let origin = section.get("origin")
            .ok_or_else(|| GeoError::ConfigError("Missing origin".to_string()))
            .and_then(parse_origin)?;

        let mut config = CoordinateSystemConfig::new(origin);

        if let Some(value) = section.get("orientation") {
            config.orientation = as_f64(value)
                .ok_or_else(|| GeoError::ConfigError("orientation must be a number".to_string()))?;
        }

        if let Some(value) = section.get("type") {
            config.axis_convention = value.as_str()
                .ok_or_else(|| GeoError::ConfigError("type must be a string".to_string()))?
                .to_string();
        }

        if let Some(value) = section.get("ellipsoid") {
            config.ellipsoid = EllipsoidSpec::from_toml(value)?;
        }

        debug!("Parsed coordinate system config: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let path = path.as_ref();
        info!("Loading coordinate system config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate the configuration and build the coordinate system
    pub fn build(&self) -> GeoResult<FlatEarthCoordinateSystem> {
        let ellipsoid = self.ellipsoid.resolve()?;
        FlatEarthCoordinateSystem::from_options(
            self.origin,
            self.orientation,
            &self.axis_convention,
            Some(&ellipsoid),
        )
    }

    /// Render the configuration as a TOML document
    pub fn to_toml_string(&self) -> String {
        format!(
            "[{}]\norigin = [{:?}, {:?}]\norientation = {:?}\ntype = \"{}\"\nellipsoid = {}\n",
            SECTION, self.origin.x, self.origin.y, self.orientation, self.axis_convention, self.ellipsoid
        )
    }
}

impl From<&FlatEarthCoordinateSystem> for CoordinateSystemConfig {
    fn from(system: &FlatEarthCoordinateSystem) -> Self {
        CoordinateSystemConfig {
            origin: system.origin(),
            orientation: system.orientation(),
            axis_convention: system.axis_convention().code().to_string(),
            ellipsoid: EllipsoidSpec::from(system.ellipsoid()),
        }
    }
}

fn parse_origin(value: &toml::Value) -> GeoResult<Point> {
    let items = value.as_array()
        .ok_or_else(|| GeoError::ConfigError("origin must be an array [lon, lat]".to_string()))?;

    if items.len() != 2 {
        return Err(GeoError::ConfigError(format!(
            "origin must have exactly 2 elements, got {}", items.len()
        )));
    }

    match (as_f64(&items[0]), as_f64(&items[1])) {
        (Some(lon), Some(lat)) => Ok(Point::new(lon, lat)),
        _ => Err(GeoError::ConfigError("origin elements must be numbers".to_string())),
    }
}
