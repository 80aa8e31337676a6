//! Core data types: points, labels, and raster georeferencing metadata.

mod point;
mod raster;

pub use point::{AnnotatedPoint, GeoPoint, PixelPoint, PlanarPoint, PointLabel};
pub use raster::{MetadataError, RasterMetadata};
