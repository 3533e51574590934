//! Reference ellipsoid models
//!
//! This module provides the ellipsoid value object used by the flat-Earth
//! transform and a registry of named ellipsoids parsed from the embedded
//! `ellipsoids.toml` definition file.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use log::debug;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    /// The WGS84 ellipsoid
    pub static ref WGS84: EllipsoidModel = EllipsoidModel::new(6_378_137.0, 298.257_223_563);

    // Parse the TOML file at startup
    static ref ELLIPSOID_REGISTRY: EllipsoidRegistry = {
        let content = include_str!("../../ellipsoids.toml");
        EllipsoidRegistry::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse ellipsoid definitions: {}", e);
            EllipsoidRegistry::default()
        })
    };
}

/// An ellipsoidal model of the Earth
///
/// All derived quantities are computed once in [`EllipsoidModel::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidModel {
    semi_major_axis: f64,
    inverse_flattening: f64,
    flattening: f64,
    eccentricity_squared: f64,
    eccentricity: f64,
    semi_minor_axis: f64,
    mean_radius: f64,
}

impl EllipsoidModel {
    /// Create an ellipsoid from its semi-major axis (meters) and inverse
    /// flattening. Pass `f64::INFINITY` as the inverse flattening for a sphere.
    pub fn new(semi_major_axis: f64, inverse_flattening: f64) -> Self {
        let flattening = 1.0 / inverse_flattening;
        let eccentricity_squared = flattening * (2.0 - flattening);
        let semi_minor_axis = semi_major_axis * (1.0 - flattening);

        EllipsoidModel {
            semi_major_axis,
            inverse_flattening,
            flattening,
            eccentricity_squared,
            eccentricity: eccentricity_squared.sqrt(),
            semi_minor_axis,
            mean_radius: (semi_minor_axis + 2.0 * semi_major_axis) / 3.0,
        }
    }

    /// Create a perfect sphere with the given radius
    pub fn sphere(radius: f64) -> Self {
        Self::new(radius, f64::INFINITY)
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// The squared eccentricity, `f(2 - f)`
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Mean radius `(b + 2a) / 3`
    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    /// Whether this model describes a perfect sphere
    pub fn is_sphere(&self) -> bool {
        self.flattening == 0.0
    }

    /// Look up a named ellipsoid (case-insensitive)
    pub fn named(name: &str) -> GeoResult<Self> {
        ELLIPSOID_REGISTRY.get(name)
            .ok_or_else(|| GeoError::UnknownEllipsoid(name.to_string()))
    }

    /// Names of all registered ellipsoids
    pub fn known_names() -> Vec<String> {
        ELLIPSOID_REGISTRY.names()
    }
}

impl Default for EllipsoidModel {
    fn default() -> Self {
        *WGS84
    }
}

/// Named ellipsoids keyed by lowercase name
#[derive(Debug, Default)]
struct EllipsoidRegistry {
    entries: BTreeMap<String, (String, EllipsoidModel)>,
}

impl EllipsoidRegistry {
    /// Parse ellipsoid definitions from a TOML string
    fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut registry = EllipsoidRegistry::default();

        if let Some(table) = toml_value.get("ellipsoids").and_then(|v| v.as_table()) {
            for (name, definition) in table {
                let a = definition.get("semi_major_axis").and_then(as_f64);
                let rf = definition.get("inverse_flattening").and_then(as_f64);

                match (a, rf) {
                    (Some(a), Some(rf)) => {
                        debug!("Registered ellipsoid {}: a={}, 1/f={}", name, a, rf);
                        registry.entries.insert(
                            name.to_lowercase(),
                            (name.clone(), EllipsoidModel::new(a, rf)),
                        );
                    },
                    _ => {
                        return Err(GeoError::ConfigError(format!(
                            "Ellipsoid '{}' needs numeric semi_major_axis and inverse_flattening",
                            name
                        )));
                    }
                }
            }
        }

        Ok(registry)
    }

    fn get(&self, name: &str) -> Option<EllipsoidModel> {
        self.entries.get(&name.trim().to_lowercase()).map(|(_, model)| *model)
    }

    fn names(&self) -> Vec<String> {
        self.entries.values().map(|(name, _)| name.clone()).collect()
    }
}

/// Read a TOML number that may have been written as an integer
pub(crate) fn as_f64(value: &toml::Value) -> Option<f64> {
    value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
}
