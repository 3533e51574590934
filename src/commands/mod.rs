//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod info_command;
pub mod transform_command;
pub mod batch_command;
#[cfg(test)]
mod tests;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use info_command::InfoCommand;
pub use transform_command::TransformCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use log::info;
use crate::coordinate::{CoordinateSpace, Point, CoordinateSystemConfig, CoordinateTransformer, EllipsoidSpec,
                        FlatEarthCoordinateSystem};
use crate::errors::{GeoError, GeoResult};
use crate::utils::logger::Logger;
use crate::utils::string_utils::parse_coordinate;

/// Factory for creating command instances based on CLI arguments
pub struct GroundkitCommandFactory;

impl GroundkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GroundkitCommandFactory
    }
}

impl Default for GroundkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GroundkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        if args.contains_id("input-file") {
            Ok(Box::new(BatchCommand::new(args, logger)?))
        } else if args.contains_id("point") {
            Ok(Box::new(TransformCommand::new(args, logger)?))
        } else {
            // Default to describing the coordinate system
            Ok(Box::new(InfoCommand::new(args, logger)?))
        }
    }
}

/// Build the flat-Earth system described by the arguments, if any
///
/// A `--config` file takes precedence over the individual options. Without
/// either a config file or an origin there is no flat-Earth system.
pub fn coordinate_system_from_args(args: &ArgMatches) -> GeoResult<Option<FlatEarthCoordinateSystem>> {
    let config = if let Some(path) = args.get_one::<String>("config") {
        CoordinateSystemConfig::from_file(path)?
    } else if let Some(origin_str) = args.get_one::<String>("origin") {
        let origin = parse_coordinate(origin_str)?;
        let mut config = CoordinateSystemConfig::new(Point::new(origin.x, origin.y));

        if let Some(orientation) = args.get_one::<String>("orientation") {
            config.orientation = orientation.trim().parse::<f64>()
                .map_err(|_| GeoError::ParseError(format!("Invalid orientation: {}", orientation)))?;
        }
        if let Some(convention) = args.get_one::<String>("type") {
            config.axis_convention = convention.clone();
        }
        if let Some(ellipsoid) = args.get_one::<String>("ellipsoid") {
            config.ellipsoid = EllipsoidSpec::Named(ellipsoid.clone());
        }
        config
    } else {
        return Ok(None);
    };

    let system = config.build()?;
    info!("Using {}", system.description());
    Ok(Some(system))
}

/// Build the transformer and the source/target spaces from the arguments
pub fn transform_setup_from_args(args: &ArgMatches) -> GeoResult<(CoordinateTransformer, CoordinateSpace, CoordinateSpace)> {
    let from = parse_space(args, "from")?;
    let to = parse_space(args, "to")?;

    let transformer = match coordinate_system_from_args(args)? {
        Some(system) => CoordinateTransformer::with_flat_earth(system),
        None => CoordinateTransformer::new(),
    };

    Ok((transformer, from, to))
}

fn parse_space(args: &ArgMatches, id: &str) -> GeoResult<CoordinateSpace> {
    args.get_one::<String>(id)
        .ok_or_else(|| GeoError::GenericError(format!("Missing --{}", id)))?
        .parse::<CoordinateSpace>()
}
