use parallax_geometry::NormalizedPoint;
use serde::{Deserialize, Serialize};

/// Labels of the tracked hand landmarks, in their fixed detection order.
///
/// The discriminant of each label is its index within a [`LandmarkSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandLandmark {
    /// Wrist.
    Wrist,
    /// Thumb carpometacarpal joint.
    ThumbCmc,
    /// Thumb metacarpophalangeal joint.
    ThumbMcp,
    /// Thumb interphalangeal joint.
    ThumbIp,
    /// Thumb tip.
    ThumbTip,
    /// Index finger metacarpophalangeal joint.
    IndexFingerMcp,
    /// Index finger proximal interphalangeal joint.
    IndexFingerPip,
    /// Index finger distal interphalangeal joint.
    IndexFingerDip,
    /// Index finger tip.
    IndexFingerTip,
    /// Middle finger metacarpophalangeal joint.
    MiddleFingerMcp,
    /// Middle finger proximal interphalangeal joint.
    MiddleFingerPip,
    /// Middle finger distal interphalangeal joint.
    MiddleFingerDip,
    /// Middle finger tip.
    MiddleFingerTip,
    /// Ring finger metacarpophalangeal joint.
    RingFingerMcp,
    /// Ring finger proximal interphalangeal joint.
    RingFingerPip,
    /// Ring finger distal interphalangeal joint.
    RingFingerDip,
    /// Ring finger tip.
    RingFingerTip,
    /// Pinky metacarpophalangeal joint.
    PinkyMcp,
    /// Pinky proximal interphalangeal joint.
    PinkyPip,
    /// Pinky distal interphalangeal joint.
    PinkyDip,
    /// Pinky tip.
    PinkyTip,
}

impl HandLandmark {
    /// Number of landmarks a full hand detection carries.
    pub const COUNT: usize = 21;

    /// Fixed index of this landmark within a [`LandmarkSet`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One detected instance's landmarks, ordered by their fixed labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: Vec<NormalizedPoint>,
}

impl LandmarkSet {
    /// Creates a set from points listed in fixed label order.
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    /// Point for the given landmark, if the set carries that many entries.
    pub fn get(&self, landmark: HandLandmark) -> Option<NormalizedPoint> {
        self.point_at(landmark.index())
    }

    /// Point at a raw label index.
    pub fn point_at(&self, index: usize) -> Option<NormalizedPoint> {
        self.points.get(index).copied()
    }

    /// Number of labeled points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set carries no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Detects tracked features in a frame and reports their landmarks.
///
/// Returns zero or more labeled point-sets, one per detected instance, each
/// ordered by the fixed label order with coordinates normalized to
/// `[0, 1] × [0, 1]`. Implementations may annotate the frame in place, and
/// are expected to swallow per-frame detection failures as an empty vector.
pub trait PointExtractor<F> {
    /// Extracts landmark sets from the frame.
    fn extract(&mut self, frame: &mut F) -> Vec<LandmarkSet>;
}
