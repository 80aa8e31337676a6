//! Georeferencing metadata for a loaded raster.

use thiserror::Error;

/// Errors for malformed raster georeferencing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// Pixel size must be strictly positive on both axes
    #[error("invalid pixel {axis}: {value} (must be positive)")]
    InvalidPixelSize {
        /// Which axis the bad size was found on ("width" or "height")
        axis: &'static str,
        /// The offending size value
        value: f64,
    },
}

/// Georeferencing parameters of a raster, produced once when the raster is
/// loaded and immutable thereafter.
///
/// The origin is the minimum-X / maximum-Y corner of the georeferenced
/// extent: raster row 0 sits at the maximum-Y edge because raster rows grow
/// downward while geographic Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterMetadata {
    /// X coordinate of the extent's minimum-X edge
    pub origin_x: f64,
    /// Y coordinate of the extent's maximum-Y edge
    pub origin_max_y: f64,
    /// Pixel size along X, in CRS units (positive)
    pub pixel_width: f64,
    /// Pixel size along Y, in CRS units (positive)
    pub pixel_height: f64,
}

impl RasterMetadata {
    /// Create validated metadata from origin and pixel sizes.
    pub fn new(
        origin_x: f64,
        origin_max_y: f64,
        pixel_width: f64,
        pixel_height: f64,
    ) -> Result<Self, MetadataError> {
        let meta = Self {
            origin_x,
            origin_max_y,
            pixel_width,
            pixel_height,
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Create metadata from a standard six-element geotransform
    /// `[x_origin, x_res, 0, y_origin, 0, -y_res]`, the form raster readers
    /// expose for north-up imagery.
    pub fn from_geo_transform(gt: [f64; 6]) -> Result<Self, MetadataError> {
        Self::new(gt[0], gt[3], gt[1], -gt[5])
    }

    /// Check that both pixel sizes are strictly positive.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if !(self.pixel_width > 0.0) {
            return Err(MetadataError::InvalidPixelSize {
                axis: "width",
                value: self.pixel_width,
            });
        }
        if !(self.pixel_height > 0.0) {
            return Err(MetadataError::InvalidPixelSize {
                axis: "height",
                value: self.pixel_height,
            });
        }
        Ok(())
    }
}
