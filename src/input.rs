//! Interaction surface of the viewer, mapped onto session calls.
//!
//! Instead of attaching and detaching click handlers as capture mode flips,
//! every interaction is represented as an event and dispatched here; whether
//! a click has any effect is decided by the session's current state.

use crate::model::{GeoPoint, PointLabel};
use crate::session::{AnnotationSession, CancelOutcome};

/// User interactions the annotation layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    /// Primary (left) click at a geographic location
    PrimaryClick(GeoPoint),
    /// Secondary (right) click at a geographic location
    SecondaryClick(GeoPoint),
    /// The designated cancel key was pressed
    CancelKey,
    /// The capture-on control was activated
    EnableCapture,
    /// The capture-off control was activated
    DisableCapture,
}

/// Apply a viewer event to the session.
///
/// Primary clicks record foreground points, secondary clicks background
/// points (both only while capturing). Returns the submission outcome when
/// the event was a cancel, `None` otherwise.
pub fn dispatch(session: &mut AnnotationSession, event: ViewerEvent) -> Option<CancelOutcome> {
    match event {
        ViewerEvent::PrimaryClick(geo) => {
            session.record_point(geo, PointLabel::Foreground);
            None
        }
        ViewerEvent::SecondaryClick(geo) => {
            session.record_point(geo, PointLabel::Background);
            None
        }
        ViewerEvent::CancelKey => Some(session.cancel()),
        ViewerEvent::EnableCapture => {
            session.enable_capture();
            None
        }
        ViewerEvent::DisableCapture => {
            session.disable_capture();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{SubmissionAck, SubmissionGateway, TransportError};
    use crate::model::{PixelPoint, RasterMetadata};
    use crate::session::CaptureMode;
    use crate::transform::{CrsTransformer, EPSG_WGS84};

    struct NullGateway;

    impl SubmissionGateway for NullGateway {
        fn submit(
            &self,
            _source_id: &str,
            _pixels: &[PixelPoint],
            _labels: &[PointLabel],
        ) -> Result<SubmissionAck, TransportError> {
            Ok(SubmissionAck { status: 200 })
        }
    }

    fn test_session() -> AnnotationSession {
        let transformer = CrsTransformer::new(EPSG_WGS84, EPSG_WGS84).unwrap();
        let metadata = RasterMetadata::new(-180.0, 90.0, 1.0, 1.0).unwrap();
        AnnotationSession::new("scene.tif", transformer, metadata, Box::new(NullGateway))
    }

    #[test]
    fn test_click_events_map_to_labels() {
        let mut session = test_session();
        dispatch(&mut session, ViewerEvent::EnableCapture);
        dispatch(
            &mut session,
            ViewerEvent::PrimaryClick(GeoPoint::new(45.0, 0.0)),
        );
        dispatch(
            &mut session,
            ViewerEvent::SecondaryClick(GeoPoint::new(44.0, 1.0)),
        );

        let labels: Vec<u8> = session.points().iter().map(|p| p.label.as_int()).collect();
        assert_eq!(labels, vec![1, 0]);
    }

    #[test]
    fn test_cancel_key_yields_outcome() {
        let mut session = test_session();
        assert!(dispatch(&mut session, ViewerEvent::EnableCapture).is_none());
        let outcome = dispatch(&mut session, ViewerEvent::CancelKey);
        assert!(outcome.is_some());
        assert_eq!(session.mode(), CaptureMode::Idle);
    }

    #[test]
    fn test_clicks_before_enable_are_ignored() {
        let mut session = test_session();
        dispatch(
            &mut session,
            ViewerEvent::PrimaryClick(GeoPoint::new(45.0, 0.0)),
        );
        assert!(session.points().is_empty());
    }
}
