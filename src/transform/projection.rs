//! Geographic-to-planar coordinate conversion using proj4rs.

use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use thiserror::Error;

use crate::model::{GeoPoint, PlanarPoint};

/// WGS84 geographic coordinates (longitude/latitude in degrees).
pub const EPSG_WGS84: u32 = 4326;

/// Web Mercator, the planar system used by slippy-map basemaps.
pub const EPSG_WEB_MERCATOR: u32 = 3857;

/// Errors from coordinate reference system conversion.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The EPSG code has no registered projection definition
    #[error("EPSG:{0} is not a supported coordinate reference system")]
    UnsupportedCrs(u32),

    /// The projection definition failed to initialize
    #[error("failed to initialize EPSG:{epsg}: {detail}")]
    Init {
        /// EPSG code of the failing projection
        epsg: u32,
        /// Underlying proj4rs failure
        detail: String,
    },

    /// The coordinate transform itself failed
    #[error("coordinate transform failed: {0}")]
    Transform(String),
}

/// Proj-string definition for a supported EPSG code.
fn proj_string(epsg: u32) -> Option<&'static str> {
    match epsg {
        4326 => Some("+proj=longlat +datum=WGS84 +no_defs"),
        3857 => Some(
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 \
             +k=1 +units=m +nadgrids=@null +no_defs",
        ),
        3035 => Some(
            "+proj=laea +lat_0=52 +lon_0=10 +x_0=4321000 +y_0=3210000 \
             +ellps=GRS80 +units=m +no_defs",
        ),
        32610 => Some("+proj=utm +zone=10 +datum=WGS84 +units=m +no_defs"),
        32633 => Some("+proj=utm +zone=33 +datum=WGS84 +units=m +no_defs"),
        _ => None,
    }
}

/// Whether the CRS uses degrees (needs radian conversion around proj4rs).
fn is_geographic(epsg: u32) -> bool {
    epsg == EPSG_WGS84
}

/// Reusable converter between two coordinate reference systems.
///
/// Conversion is a pure mathematical transform with no side effects: the same
/// input always yields the same output. The projection math is delegated to
/// proj4rs; this type owns the EPSG parameter contract.
pub struct CrsTransformer {
    source: Proj,
    target: Proj,
    source_epsg: u32,
    target_epsg: u32,
    source_is_geographic: bool,
    target_is_geographic: bool,
    /// Same CRS on both sides, transform is skipped entirely
    identity: bool,
}

impl std::fmt::Debug for CrsTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrsTransformer")
            .field("source_epsg", &self.source_epsg)
            .field("target_epsg", &self.target_epsg)
            .finish_non_exhaustive()
    }
}

impl CrsTransformer {
    /// Create a transformer between two EPSG-coded reference systems.
    ///
    /// Fails with [`ProjectionError::UnsupportedCrs`] when either code is not
    /// in the registry.
    pub fn new(source_epsg: u32, target_epsg: u32) -> Result<Self, ProjectionError> {
        let source_str =
            proj_string(source_epsg).ok_or(ProjectionError::UnsupportedCrs(source_epsg))?;
        let target_str =
            proj_string(target_epsg).ok_or(ProjectionError::UnsupportedCrs(target_epsg))?;

        let source = Proj::from_proj_string(source_str).map_err(|e| ProjectionError::Init {
            epsg: source_epsg,
            detail: format!("{e:?}"),
        })?;
        let target = Proj::from_proj_string(target_str).map_err(|e| ProjectionError::Init {
            epsg: target_epsg,
            detail: format!("{e:?}"),
        })?;

        Ok(Self {
            source,
            target,
            source_epsg,
            target_epsg,
            source_is_geographic: is_geographic(source_epsg),
            target_is_geographic: is_geographic(target_epsg),
            identity: source_epsg == target_epsg,
        })
    }

    /// Create a transformer from WGS84 longitude/latitude to a target CRS.
    ///
    /// This is the map-viewer case: clicks arrive as lat/lon and must land in
    /// the raster's planar system.
    pub fn wgs84_to(target_epsg: u32) -> Result<Self, ProjectionError> {
        Self::new(EPSG_WGS84, target_epsg)
    }

    /// Get the source EPSG code.
    pub fn source_epsg(&self) -> u32 {
        self.source_epsg
    }

    /// Get the target EPSG code.
    pub fn target_epsg(&self) -> u32 {
        self.target_epsg
    }

    /// Convert a geographic point (interpreted in the source CRS, x =
    /// longitude, y = latitude) to a planar point in the target CRS.
    pub fn project(&self, geo: GeoPoint) -> Result<PlanarPoint, ProjectionError> {
        let (x, y) = self.transform_xy(geo.longitude, geo.latitude)?;
        Ok(PlanarPoint::new(x, y))
    }

    /// Transform a raw coordinate pair from source to target CRS.
    ///
    /// Degree/radian conversion is applied automatically for geographic CRSs.
    pub fn transform_xy(&self, x: f64, y: f64) -> Result<(f64, f64), ProjectionError> {
        if self.identity {
            return Ok((x, y));
        }

        let (in_x, in_y) = if self.source_is_geographic {
            (x.to_radians(), y.to_radians())
        } else {
            (x, y)
        };

        let mut point = (in_x, in_y, 0.0);
        transform(&self.source, &self.target, &mut point)
            .map_err(|e| ProjectionError::Transform(format!("{e:?}")))?;

        let (out_x, out_y) = if self.target_is_geographic {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        Ok((out_x, out_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_crs_is_rejected() {
        match CrsTransformer::new(EPSG_WGS84, 99999) {
            Err(ProjectionError::UnsupportedCrs(99999)) => {}
            other => panic!("expected UnsupportedCrs, got {other:?}"),
        }
        assert!(CrsTransformer::new(99999, EPSG_WEB_MERCATOR).is_err());
    }

    #[test]
    fn test_identity_passes_coordinates_through() {
        let t = CrsTransformer::new(EPSG_WGS84, EPSG_WGS84).unwrap();
        let p = t.project(GeoPoint::new(37.7749, -122.4194)).unwrap();
        assert_eq!(p.x, -122.4194);
        assert_eq!(p.y, 37.7749);
    }

    #[test]
    fn test_wgs84_to_web_mercator_matches_spherical_formula() {
        // The 3857 definition uses a sphere (a == b), so the closed-form
        // spherical Mercator equations give the exact expected values.
        let t = CrsTransformer::wgs84_to(EPSG_WEB_MERCATOR).unwrap();
        let radius = 6378137.0;

        for &(lat, lon) in &[(0.0, 0.0), (37.7749, -122.4194), (-33.8688, 151.2093)] {
            let p = t.project(GeoPoint::new(lat, lon)).unwrap();
            let expected_x = lon.to_radians() * radius;
            let expected_y = (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0)
                .tan()
                .ln()
                * radius;
            assert!((p.x - expected_x).abs() < 1e-3, "x: {} vs {expected_x}", p.x);
            assert!((p.y - expected_y).abs() < 1e-3, "y: {} vs {expected_y}", p.y);
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let t = CrsTransformer::wgs84_to(EPSG_WEB_MERCATOR).unwrap();
        let geo = GeoPoint::new(45.0, 9.0);
        let a = t.project(geo).unwrap();
        let b = t.project(geo).unwrap();
        assert_eq!(a, b);
    }
}
