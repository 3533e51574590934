//! Custom error types for coordinate processing

use std::fmt;
use std::io;

/// Geography-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Axis convention other than "neu" or "nwu"
    InvalidAxisConvention(String),
    /// Ellipsoid name not present in the registry
    UnknownEllipsoid(String),
    /// Invalid or incomplete configuration
    ConfigError(String),
    /// Malformed coordinate input
    ParseError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidAxisConvention(v) => write!(
                f,
                "Configuration error: invalid axis convention '{}' (expected 'neu' or 'nwu')",
                v
            ),
            GeoError::UnknownEllipsoid(name) => write!(f, "Configuration error: unknown ellipsoid '{}'", name),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl GeoError {
    /// Whether this error stems from an invalid configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GeoError::InvalidAxisConvention(_) | GeoError::UnknownEllipsoid(_) | GeoError::ConfigError(_)
        )
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

/// Result type for coordinate operations
pub type GeoResult<T> = Result<T, GeoError>;

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}
