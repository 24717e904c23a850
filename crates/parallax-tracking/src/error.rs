use thiserror::Error;

/// Errors raised by the stereo tracking pipeline.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// A camera device failed. Distinct from a transiently dropped frame,
    /// which the pipeline skips silently.
    #[error("camera capture failed: {0}")]
    Capture(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The configured landmark is not present in a detected point-set.
    #[error("landmark index {index} out of range for a set of {len} points")]
    LandmarkOutOfRange {
        /// Requested landmark index.
        index: usize,
        /// Number of points the detected set carried.
        len: usize,
    },

    /// The correspondence pair hit a geometric singularity.
    #[error(transparent)]
    Triangulation(#[from] parallax_geometry::TriangulationError),
}
