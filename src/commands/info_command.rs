//! Coordinate system description command
//!
//! Prints the parameters of the configured flat-Earth system, or the list
//! of known ellipsoids when no origin is configured.

use clap::ArgMatches;
use log::info;
use std::f64::consts::PI;

use crate::commands::command_traits::Command;
use crate::commands::coordinate_system_from_args;
use crate::coordinate::{CoordinateSystemConfig, EllipsoidModel, FlatEarthCoordinateSystem};
use crate::errors::GeoResult;
use crate::utils::logger::Logger;

/// Command for describing the coordinate system
pub struct InfoCommand<'a> {
    /// Configured flat-Earth system, if any
    system: Option<FlatEarthCoordinateSystem>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let system = coordinate_system_from_args(args)?;
        Ok(InfoCommand { system, logger })
    }

    fn describe_ellipsoid(name: &str, ellipsoid: &EllipsoidModel) -> String {
        let flattening = if ellipsoid.is_sphere() {
            "sphere".to_string()
        } else {
            format!("1/f = {}", ellipsoid.inverse_flattening())
        };
        format!("  {}: a = {} m, b = {:.3} m, {}", name, ellipsoid.semi_major_axis(),
                ellipsoid.semi_minor_axis(), flattening)
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn run(&self) -> GeoResult<Vec<String>> {
        let mut lines = Vec::new();

        let Some(system) = &self.system else {
            info!("No origin configured, listing ellipsoids");
            lines.push("Known ellipsoids:".to_string());
            for name in EllipsoidModel::known_names() {
                let ellipsoid = EllipsoidModel::named(&name)?;
                lines.push(Self::describe_ellipsoid(&name, &ellipsoid));
            }
            return Ok(lines);
        };

        let config = CoordinateSystemConfig::from(system);
        lines.push(system.description());
        lines.push(Self::describe_ellipsoid(&config.ellipsoid.label(), system.ellipsoid()));
        lines.push(format!("  Meridional radius: {:.3} m", system.meridional_radius()));
        lines.push(format!("  Meters per degree north: {:.3}", system.meridional_radius() * PI / 180.0));
        lines.push(format!("  Meters per degree east: {:.3}", system.parallel_radius() * PI / 180.0));
        lines.push(String::new());
        lines.extend(config.to_toml_string().lines().map(str::to_string));

        self.logger.log(&format!("Described {}", system.description()))?;
        Ok(lines)
    }
}
