#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Parallax Tracking
//!
//! The boundary contracts of the two collaborators feeding the stereo
//! triangulation core (a [`FrameSource`] per camera and a [`PointExtractor`]
//! per frame stream), plus the per-frame pipeline step ([`StereoTracker`])
//! that composes source, extractor and triangulator while tolerating dropped
//! frames by skipping the iteration.

/// Error types for the tracking pipeline.
pub mod error;

/// Landmark labels, point-sets and the extraction boundary contract.
pub mod extractor;

/// Frame acquisition boundary contract.
pub mod source;

/// Per-frame stereo tracking pipeline.
pub mod tracker;

pub use error::TrackingError;
pub use extractor::{HandLandmark, LandmarkSet, PointExtractor};
pub use source::FrameSource;
pub use tracker::StereoTracker;
