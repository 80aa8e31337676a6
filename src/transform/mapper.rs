//! Planar-coordinate to raster-pixel mapping.

use crate::model::{MetadataError, PixelPoint, PlanarPoint, RasterMetadata};

/// Map a planar coordinate to the integer pixel cell containing it.
///
/// X is a direct linear scale from the minimum-X origin; Y is inverted
/// because raster rows grow downward from the maximum-Y edge. `floor` (not
/// rounding) assigns the half-open pixel cell the point falls inside, the
/// standard raster addressing convention.
///
/// No bounds clamping is performed: points outside the georeferenced extent
/// yield out-of-range indices, and callers bounds-check before use.
pub fn to_pixel(planar: PlanarPoint, meta: &RasterMetadata) -> Result<PixelPoint, MetadataError> {
    meta.validate()?;

    let x = ((planar.x - meta.origin_x) / meta.pixel_width).floor() as i64;
    let y = ((meta.origin_max_y - planar.y) / meta.pixel_height).floor() as i64;
    Ok(PixelPoint::new(x, y))
}
