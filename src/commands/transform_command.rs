//! Single point transform command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::transform_setup_from_args;
use crate::coordinate::{CoordinateSpace, CoordinateTransformer, Point};
use crate::errors::{GeoError, GeoResult};
use crate::utils::format_utils::{format_point, format_polar};
use crate::utils::logger::Logger;
use crate::utils::string_utils::parse_coordinate;

/// Command for transforming one point between coordinate spaces
pub struct TransformCommand<'a> {
    /// Point to transform
    point: Point,
    /// Space of the input point
    from: CoordinateSpace,
    /// Space of the result
    to: CoordinateSpace,
    /// Transformer holding the flat-Earth system
    transformer: CoordinateTransformer,
    /// Whether to print the polar form of flat-Earth results
    polar: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let point_str = args.get_one::<String>("point")
            .ok_or_else(|| GeoError::GenericError("Missing point".to_string()))?;
        let point = parse_coordinate(point_str)?;

        let (transformer, from, to) = transform_setup_from_args(args)?;

        Ok(TransformCommand {
            point,
            from,
            to,
            transformer,
            polar: args.get_flag("polar"),
            logger,
        })
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn run(&self) -> GeoResult<Vec<String>> {
        info!("Transforming ({}, {}) from {} to {}", self.point.x, self.point.y, self.from, self.to);

        let result = self.transformer.transform_point(&self.point, self.from, self.to)?;
        let mut lines = vec![format_point(&result, self.to)];

        if self.polar && self.to == CoordinateSpace::FlatEarth {
            lines.push(format_polar(&result));
        }

        self.logger.log(&format!("{} -> {}", format_point(&self.point, self.from), lines[0]))?;
        Ok(lines)
    }
}
