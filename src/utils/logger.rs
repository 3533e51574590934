//! Logger utility for application-wide logging
//!
//! This module provides a logger that implements the `log` facade. Every
//! record is appended to a log file; warnings and errors are also echoed to
//! stderr so that stdout stays reserved for command output.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        File::create(Path::new(log_file))?;
        Self::append(log_file)
    }

    /// Creates a logger that appends to an existing log file
    ///
    /// Several loggers may share one file; each line is written in a single
    /// append.
    pub fn append(log_file: &str) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: LevelFilter::Info,
        })
    }

    /// Creates a logger without a log file
    pub fn console_only() -> Self {
        Logger {
            file: Mutex::new(None),
            level: LevelFilter::Warn,
        }
    }

    /// Sets the most verbose level that is recorded
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// The most verbose level that is recorded
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// The file is opened for appending so that it can be shared with a
    /// logger created by [`Logger::new`].
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `verbose` - Record debug output as well
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
        let global_logger = Logger::append(log_file)?.with_level(level);

        // Set up the global logger - we only call this once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let _ = Logger::log(self, &message);

            if record.level() <= Level::Warn {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_only_logger_accepts_messages() {
        let logger = Logger::console_only();
        assert!(logger.log("nothing is written").is_ok());
        assert_eq!(logger.level(), LevelFilter::Warn);
    }

    #[test]
    fn test_level_filtering() {
        let logger = Logger::console_only().with_level(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(!Log::enabled(&logger, &debug));
        assert!(Log::enabled(&logger, &info));
    }

    #[test]
    fn test_loggers_share_one_file() {
        let path = std::env::temp_dir().join(format!("groundkit-{}-shared.log", std::process::id()));
        let path_str = path.to_str().unwrap();

        let commands = Logger::new(path_str).unwrap();
        let records = Logger::append(path_str).unwrap();
        commands.log("Transformed 1 point").unwrap();
        Log::log(&records, &Record::builder()
            .level(Level::Info)
            .target("groundkit")
            .args(format_args!("Using flat Earth"))
            .build());
        commands.log("Described system").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Transformed 1 point\n[INFO] groundkit: Using flat Earth\nDescribed system\n"
        );

        // Creating a logger again starts a fresh file
        Logger::new(path_str).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        std::fs::remove_file(&path).ok();
    }
}
