//! Batch transform command
//!
//! Transforms every point of a text file. Blank lines and lines starting
//! with `#` are skipped; anything else must be a coordinate.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::transform_setup_from_args;
use crate::coordinate::{CoordinateSpace, CoordinateTransformer, Point};
use crate::errors::{GeoError, GeoResult};
use crate::utils::format_utils::format_point;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::utils::string_utils::{is_blank_or_comment, parse_coordinate};

/// Command for transforming a file of points
pub struct BatchCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file, stdout if None
    output_file: Option<String>,
    /// Space of the input points
    from: CoordinateSpace,
    /// Space of the results
    to: CoordinateSpace,
    /// Transformer holding the flat-Earth system
    transformer: CoordinateTransformer,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let input_file = args.get_one::<String>("input-file")
            .ok_or_else(|| GeoError::GenericError("Missing input file".to_string()))?
            .clone();
        let output_file = args.get_one::<String>("output").cloned();

        let (transformer, from, to) = transform_setup_from_args(args)?;

        Ok(BatchCommand {
            input_file,
            output_file,
            from,
            to,
            transformer,
            logger,
        })
    }

    /// Parse the input file into points, reporting the line of any error
    fn read_points(&self) -> GeoResult<Vec<Point>> {
        let contents = fs::read_to_string(&self.input_file)?;
        let mut points = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            if is_blank_or_comment(line) {
                continue;
            }
            let point = parse_coordinate(line).map_err(|e| {
                GeoError::ParseError(format!("{}:{}: {}", self.input_file, index + 1, e))
            })?;
            points.push(point);
        }

        debug!("Read {} points from {}", points.len(), self.input_file);
        Ok(points)
    }

    /// Transform all points of the input file into output lines
    fn transform_all(&self, progress: &ProgressTracker) -> GeoResult<Vec<String>> {
        let points = self.read_points()?;
        let mut lines = Vec::with_capacity(points.len());

        for point in &points {
            let result = self.transformer.transform_point(point, self.from, self.to)?;
            lines.push(format_point(&result, self.to));
            progress.increment(1);
        }

        Ok(lines)
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn run(&self) -> GeoResult<Vec<String>> {
        info!("Transforming {} from {} to {}", self.input_file, self.from, self.to);
        let lines = self.transform_all(&ProgressTracker::hidden())?;
        self.logger.log(&format!("Transformed {} points from {}", lines.len(), self.input_file))?;
        Ok(lines)
    }

    fn execute(&self) -> GeoResult<()> {
        let Some(output_file) = &self.output_file else {
            for line in self.run()? {
                println!("{}", line);
            }
            return Ok(());
        };

        info!("Transforming {} into {}", self.input_file, output_file);
        let total = fs::read_to_string(&self.input_file)?
            .lines()
            .filter(|line| !is_blank_or_comment(line))
            .count() as u64;

        let progress = ProgressTracker::new(total, "Transforming");
        let lines = self.transform_all(&progress)?;
        progress.set_message(&format!("Writing {}", output_file));

        let mut writer = BufWriter::new(File::create(output_file)?);
        for line in &lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        progress.finish();

        info!("Wrote {} points to {}", lines.len(), output_file);
        self.logger.log(&format!("Transformed {} points from {} into {}",
                                 lines.len(), self.input_file, output_file))?;
        Ok(())
    }
}
