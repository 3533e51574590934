//! Parsing of coordinate text
//!
//! Coordinates are written as two or three numbers separated by commas,
//! semicolons or whitespace, e.g. `19.05,47.5` or `12.5 -3 120`.

use lazy_static::lazy_static;
use regex::Regex;
use crate::coordinate::Point;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    static ref COORDINATE_PATTERN: Regex = Regex::new(
        r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*[,;\s]\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)(?:\s*[,;\s]\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?))?\s*$"
    ).expect("coordinate pattern is valid");
}

/// Parse a coordinate string into a point
///
/// # Arguments
/// * `text` - Two or three numbers, e.g. "lon,lat" or "x y z"
///
/// # Returns
/// The parsed point, with `z` set when a third number is present
pub fn parse_coordinate(text: &str) -> GeoResult<Point> {
    let captures = COORDINATE_PATTERN.captures(text)
        .ok_or_else(|| GeoError::ParseError(format!("Invalid coordinate: '{}'", text.trim())))?;

    let number = |index: usize| -> GeoResult<Option<f64>> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<f64>()
                .map(Some)
                .map_err(|_| GeoError::ParseError(format!("Invalid number: '{}'", m.as_str()))),
            None => Ok(None),
        }
    };

    let x = number(1)?.unwrap_or_default();
    let y = number(2)?.unwrap_or_default();

    Ok(match number(3)? {
        Some(z) => Point::new_3d(x, y, z),
        None => Point::new(x, y),
    })
}

/// Whether a line of a coordinate file carries no data
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
