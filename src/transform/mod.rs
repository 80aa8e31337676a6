//! Coordinate transforms: CRS conversion and pixel mapping.

mod mapper;
mod projection;

pub use mapper::to_pixel;
pub use projection::{CrsTransformer, ProjectionError, EPSG_WEB_MERCATOR, EPSG_WGS84};
