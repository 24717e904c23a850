use log::debug;

use parallax_geometry::{TriangulatedPoint, Triangulator};

use crate::error::TrackingError;
use crate::extractor::{HandLandmark, PointExtractor};
use crate::source::FrameSource;

/// Per-frame stereo tracking pipeline.
///
/// Owns one frame source and one extractor per camera plus the shared
/// triangulator, and follows a single configured landmark through both
/// views. Each [`advance`](StereoTracker::advance) call runs one iteration
/// of the pipeline; the surrounding loop, display and shutdown wiring stay
/// with the caller.
pub struct StereoTracker<L, R, E>
where
    L: FrameSource,
    R: FrameSource<Frame = L::Frame>,
    E: PointExtractor<L::Frame>,
{
    triangulator: Triangulator,
    left_source: L,
    right_source: R,
    left_extractor: E,
    right_extractor: E,
    landmark: HandLandmark,
}

impl<L, R, E> StereoTracker<L, R, E>
where
    L: FrameSource,
    R: FrameSource<Frame = L::Frame>,
    E: PointExtractor<L::Frame>,
{
    /// Creates a tracker that follows `landmark` through both cameras.
    ///
    /// Each camera gets its own extractor instance so implementations may
    /// keep per-stream tracking state.
    pub fn new(
        triangulator: Triangulator,
        left_source: L,
        right_source: R,
        left_extractor: E,
        right_extractor: E,
        landmark: HandLandmark,
    ) -> Self {
        Self {
            triangulator,
            left_source,
            right_source,
            left_extractor,
            right_extractor,
            landmark,
        }
    }

    /// The label this tracker follows.
    pub fn landmark(&self) -> HandLandmark {
        self.landmark
    }

    /// Runs one pipeline iteration: grab both frames, extract landmarks,
    /// select the tracked one on each side and triangulate the
    /// correspondence.
    ///
    /// Returns `Ok(None)` when either camera dropped its frame or either
    /// extractor detected nothing; callers skip such iterations. Device
    /// failures and geometric singularities surface as errors.
    pub fn advance(&mut self) -> Result<Option<TriangulatedPoint>, TrackingError> {
        // Both cameras are read every iteration so the streams stay in step
        // even when one side drops its frame.
        let left_frame = self
            .left_source
            .grab()
            .map_err(|e| TrackingError::Capture(Box::new(e)))?;
        let right_frame = self
            .right_source
            .grab()
            .map_err(|e| TrackingError::Capture(Box::new(e)))?;
        let (Some(mut left_frame), Some(mut right_frame)) = (left_frame, right_frame) else {
            debug!("camera dropped a frame, skipping iteration");
            return Ok(None);
        };

        let left_sets = self.left_extractor.extract(&mut left_frame);
        let right_sets = self.right_extractor.extract(&mut right_frame);
        let (Some(left_set), Some(right_set)) = (left_sets.first(), right_sets.first()) else {
            debug!("landmark not detected on both cameras, skipping iteration");
            return Ok(None);
        };

        let index = self.landmark.index();
        let left = left_set
            .point_at(index)
            .ok_or(TrackingError::LandmarkOutOfRange {
                index,
                len: left_set.len(),
            })?;
        let right = right_set
            .point_at(index)
            .ok_or(TrackingError::LandmarkOutOfRange {
                index,
                len: right_set.len(),
            })?;

        Ok(Some(self.triangulator.triangulate(left, right)?))
    }
}
