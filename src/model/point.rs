//! Point types for the geographic-to-raster annotation pipeline.

/// A geographic coordinate produced by a user interaction on the map.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180] degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a geographic point from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A coordinate in a projected (planar) coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    /// Create a planar point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An integer pixel index into a raster.
///
/// Indices are not clamped to the raster's valid range: a click outside the
/// georeferenced extent yields negative or oversized indices. Callers must
/// bounds-check against the raster dimensions before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    /// Create a pixel index.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Binary classification of an annotated point for the downstream
/// segmentation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLabel {
    /// Negative point, serialized as 0 (secondary click)
    Background,
    /// Positive point, serialized as 1 (primary click)
    Foreground,
}

impl PointLabel {
    /// Get the display name for this label.
    pub fn name(&self) -> &'static str {
        match self {
            PointLabel::Background => "background",
            PointLabel::Foreground => "foreground",
        }
    }

    /// Integer value used on the wire (0 = background, 1 = foreground).
    pub fn as_int(&self) -> u8 {
        match self {
            PointLabel::Background => 0,
            PointLabel::Foreground => 1,
        }
    }
}

/// A collected annotation: a pixel index paired with its label.
///
/// Sequences of annotated points preserve insertion order so that pixel and
/// label sequences stay positionally aligned when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedPoint {
    /// Pixel index in the raster
    pub pixel: PixelPoint,
    /// Foreground or background classification
    pub label: PointLabel,
}

impl AnnotatedPoint {
    /// Create an annotated point.
    pub fn new(pixel: PixelPoint, label: PointLabel) -> Self {
        Self { pixel, label }
    }
}
