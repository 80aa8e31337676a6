//! Annotation session: the capture-mode state machine.
//!
//! A session is created once a raster finishes loading and is owned
//! exclusively by the interaction context, so all transitions happen
//! synchronously on the calling event turn and no locking is involved. The
//! raster's source identifier is bound at creation time: a raster reload
//! mid-capture cannot retarget an in-flight submission.

use crate::gateway::{SubmissionAck, SubmissionGateway, TransportError};
use crate::model::{AnnotatedPoint, GeoPoint, PixelPoint, PointLabel, RasterMetadata};
use crate::transform::{to_pixel, CrsTransformer};

/// Whether user clicks are currently translated into annotation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// Clicks are ignored
    #[default]
    Idle,
    /// Clicks are recorded as labeled points
    Capturing,
}

impl CaptureMode {
    /// Check whether point recording is active.
    pub fn is_capturing(&self) -> bool {
        matches!(self, CaptureMode::Capturing)
    }
}

/// Observable result of a [`AnnotationSession::cancel`] call.
///
/// Whatever the outcome, the session has already returned to idle with an
/// empty point list by the time this value is produced.
#[derive(Debug)]
pub enum CancelOutcome {
    /// No points were collected, so nothing was sent
    NothingToSubmit,
    /// The gateway accepted the points
    Submitted(SubmissionAck),
    /// The gateway failed; the points are not retried
    SubmissionFailed(TransportError),
}

/// State machine collecting labeled points over one loaded raster.
pub struct AnnotationSession {
    source_id: String,
    transformer: CrsTransformer,
    metadata: RasterMetadata,
    gateway: Box<dyn SubmissionGateway>,
    points: Vec<AnnotatedPoint>,
    mode: CaptureMode,
}

impl AnnotationSession {
    /// Create an idle session for a loaded raster.
    ///
    /// `source_id` names the raster resource and is passed through unchanged
    /// to the gateway on submission.
    pub fn new(
        source_id: impl Into<String>,
        transformer: CrsTransformer,
        metadata: RasterMetadata,
        gateway: Box<dyn SubmissionGateway>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            transformer,
            metadata,
            gateway,
            points: Vec::new(),
            mode: CaptureMode::Idle,
        }
    }

    /// Get the current capture mode.
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Get the points collected so far, in arrival order.
    pub fn points(&self) -> &[AnnotatedPoint] {
        &self.points
    }

    /// Get the raster source identifier bound at creation.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Switch to capturing. Idempotent.
    pub fn enable_capture(&mut self) {
        if !self.mode.is_capturing() {
            log::debug!("capture enabled for {}", self.source_id);
        }
        self.mode = CaptureMode::Capturing;
    }

    /// Switch to idle. Collected points are kept until a cancel.
    pub fn disable_capture(&mut self) {
        self.mode = CaptureMode::Idle;
    }

    /// Record a labeled point at a geographic click location.
    ///
    /// Ignored while idle (input handlers are detached outside capture mode,
    /// so this is a no-op rather than an error). While capturing, the click
    /// is projected into the raster's CRS and mapped to a pixel index; a
    /// conversion or mapping failure drops the point with a warning and never
    /// raises to the caller.
    pub fn record_point(&mut self, geo: GeoPoint, label: PointLabel) {
        if !self.mode.is_capturing() {
            return;
        }

        let planar = match self.transformer.project(geo) {
            Ok(planar) => planar,
            Err(err) => {
                log::warn!("dropping {} point at {geo:?}: {err}", label.name());
                return;
            }
        };
        let pixel = match to_pixel(planar, &self.metadata) {
            Ok(pixel) => pixel,
            Err(err) => {
                log::warn!("dropping {} point at {geo:?}: {err}", label.name());
                return;
            }
        };

        log::debug!("recorded {} point at pixel {pixel:?}", label.name());
        self.points.push(AnnotatedPoint::new(pixel, label));
    }

    /// Cancel the capture: submit collected points (if any) and reset.
    ///
    /// The reset is unconditional and happens before the gateway outcome is
    /// known to the caller: the session is idle with an empty point list no
    /// matter how the submission goes, and nothing is retried.
    pub fn cancel(&mut self) -> CancelOutcome {
        self.mode = CaptureMode::Idle;
        let points = std::mem::take(&mut self.points);

        if points.is_empty() {
            return CancelOutcome::NothingToSubmit;
        }

        let pixels: Vec<PixelPoint> = points.iter().map(|p| p.pixel).collect();
        let labels: Vec<PointLabel> = points.iter().map(|p| p.label).collect();

        match self.gateway.submit(&self.source_id, &pixels, &labels) {
            Ok(ack) => {
                log::info!(
                    "submitted {} points for {} (status {})",
                    pixels.len(),
                    self.source_id,
                    ack.status
                );
                CancelOutcome::Submitted(ack)
            }
            Err(err) => {
                log::warn!("submission for {} failed: {err}", self.source_id);
                CancelOutcome::SubmissionFailed(err)
            }
        }
    }
}
