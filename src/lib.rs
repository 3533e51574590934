pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod commands;
pub mod api;

pub use crate::api::GroundKit;

pub use errors::{GeoError, GeoResult};
pub use coordinate::{AxisConvention, BoundingBox, CoordinateSpace, CoordinateSystemConfig, CoordinateTransformer,
                     EllipsoidModel, EllipsoidSpec, FlatEarthCoordinateSystem, Point, WGS84};
pub use utils::geometry_utils::{euclidean_distance, normalize_angle, to_polar};
