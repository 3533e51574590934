//! Utility modules for common functionality
//!
//! This module provides the geometry helpers and the supporting utilities
//! used throughout the application.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod string_utils;
pub(crate) mod format_utils;
pub mod geometry_utils;
pub mod geodesic_utils;
