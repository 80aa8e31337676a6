//! Submission gateway: the seam between annotation sessions and the
//! segmentation backend.
//!
//! The session only depends on the [`SubmissionGateway`] trait; the shipped
//! [`HttpGateway`] POSTs the collected points as JSON. Submissions are
//! fire-and-forget: failures are reported but never retried.

mod http;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{PixelPoint, PointLabel};

pub use http::{GatewayConfig, HttpGateway};

/// Errors from submitting points to the backend.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Pixel and label sequences must be positionally aligned
    #[error("point/label length mismatch: {points} points, {labels} labels")]
    LengthMismatch {
        /// Number of pixel points supplied
        points: usize,
        /// Number of labels supplied
        labels: usize,
    },

    /// The HTTP request itself failed (connect, timeout, body)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("endpoint responded with status {0}")]
    Status(u16),
}

/// Acknowledgement of an accepted submission.
///
/// The response body is not interpreted beyond success/failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionAck {
    /// HTTP status code the endpoint answered with
    pub status: u16,
}

/// Wire shape of a point submission.
///
/// `point_coords` and `point_labels` are parallel sequences: the label at
/// index i classifies the pixel at index i.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// URI of the raster the points were marked on
    pub tif_link: String,
    /// Pixel indices as `[x, y]` pairs, in insertion order
    pub point_coords: Vec<(i64, i64)>,
    /// Labels (1 = foreground, 0 = background), positionally aligned
    pub point_labels: Vec<u8>,
}

impl SubmissionRequest {
    /// Build a request from parallel pixel and label sequences.
    ///
    /// Fails with [`TransportError::LengthMismatch`] when the sequences are
    /// not the same length.
    pub fn new(
        source_id: impl Into<String>,
        pixels: &[PixelPoint],
        labels: &[PointLabel],
    ) -> Result<Self, TransportError> {
        if pixels.len() != labels.len() {
            return Err(TransportError::LengthMismatch {
                points: pixels.len(),
                labels: labels.len(),
            });
        }
        Ok(Self {
            tif_link: source_id.into(),
            point_coords: pixels.iter().map(|p| (p.x, p.y)).collect(),
            point_labels: labels.iter().map(PointLabel::as_int).collect(),
        })
    }
}

/// Destination for collected annotation points.
///
/// Implementations send the points and report success/failure; they must not
/// retry on error, and callers never block session state on the outcome.
pub trait SubmissionGateway {
    /// Submit pixel points and their labels for the given raster source.
    ///
    /// Precondition: `pixels.len() == labels.len()`.
    fn submit(
        &self,
        source_id: &str,
        pixels: &[PixelPoint],
        labels: &[PointLabel],
    ) -> Result<SubmissionAck, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = SubmissionRequest::new(
            "https://storage.example/scene.tif",
            &[PixelPoint::new(5, 3), PixelPoint::new(120, 44)],
            &[PointLabel::Foreground, PointLabel::Background],
        )
        .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "tif_link": "https://storage.example/scene.tif",
                "point_coords": [[5, 3], [120, 44]],
                "point_labels": [1, 0],
            })
        );
    }

    #[test]
    fn test_request_preserves_insertion_order() {
        let request = SubmissionRequest::new(
            "scene.tif",
            &[
                PixelPoint::new(1, 1),
                PixelPoint::new(2, 2),
                PixelPoint::new(3, 3),
            ],
            &[
                PointLabel::Foreground,
                PointLabel::Foreground,
                PointLabel::Background,
            ],
        )
        .unwrap();
        assert_eq!(request.point_coords, vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(request.point_labels, vec![1, 1, 0]);
    }

    #[test]
    fn test_request_rejects_length_mismatch() {
        let err = SubmissionRequest::new(
            "scene.tif",
            &[PixelPoint::new(0, 0)],
            &[PointLabel::Foreground, PointLabel::Background],
        )
        .unwrap_err();
        match err {
            TransportError::LengthMismatch { points: 1, labels: 2 } => {}
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }
}
