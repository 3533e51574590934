//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::utils::logger::Logger;
use crate::errors::GeoResult;

/// Represents an executable command in the application
pub trait Command {
    /// Compute the lines the command prints
    fn run(&self) -> GeoResult<Vec<String>>;

    /// Execute the command, printing its output
    fn execute(&self) -> GeoResult<()> {
        for line in self.run()? {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>>;
}
