//! rastermark - point annotation over georeferenced rasters.
//!
//! Maps geographic clicks on a basemap to raster pixel indices and runs the
//! capture session that collects labeled points for an image-segmentation
//! backend. The pipeline: a click arrives as a [`model::GeoPoint`], the
//! [`transform::CrsTransformer`] projects it into the raster's coordinate
//! system, [`transform::to_pixel`] resolves the pixel cell, and the
//! [`session::AnnotationSession`] accumulates the labeled point until a
//! cancel submits everything through a [`gateway::SubmissionGateway`].
//!
//! Raster decoding, tile rendering, and UI chrome stay outside this crate;
//! they interact through the data types and traits defined here.

pub mod gateway;
pub mod input;
pub mod model;
pub mod session;
pub mod transform;

pub use gateway::{
    GatewayConfig, HttpGateway, SubmissionAck, SubmissionGateway, SubmissionRequest,
    TransportError,
};
pub use input::{dispatch, ViewerEvent};
pub use model::{
    AnnotatedPoint, GeoPoint, MetadataError, PixelPoint, PlanarPoint, PointLabel, RasterMetadata,
};
pub use session::{AnnotationSession, CancelOutcome, CaptureMode};
pub use transform::{to_pixel, CrsTransformer, ProjectionError};
