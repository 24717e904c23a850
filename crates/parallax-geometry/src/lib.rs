#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Parallax Geometry
//!
//! Converts a pair of normalized 2D landmark observations from two
//! horizontally-offset cameras into a 3D position in millimeters, plus the
//! yaw and pitch viewing angles of that point relative to the rig center.
//!
//! The solver is a stateless, closed-form trigonometric pass: each call
//! depends only on the immutable rig configuration and the two input points,
//! so a [`Triangulator`] can be shared across threads without
//! synchronization.
//!
//! ## Example
//!
//! ```rust
//! use parallax_geometry::{NormalizedPoint, RigConfig, Triangulator};
//!
//! // 120 mm baseline, 70.3 degree horizontal field of view.
//! let rig = Triangulator::new(RigConfig::new(120.0, 70.3))?;
//!
//! // A point straight ahead of the rig appears right of center on the
//! // left camera and left of center on the right camera.
//! let point = rig.triangulate(
//!     NormalizedPoint::new(0.6, 0.5),
//!     NormalizedPoint::new(0.4, 0.5),
//! )?;
//!
//! assert_eq!(point.position, [0.0, 0.0, 426.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Angle-conversion primitives shared by the solver steps.
pub mod angles;

/// Error types for rig configuration and triangulation.
pub mod error;

/// Rig configuration and the stereo triangulation solver.
pub mod rig;

pub use angles::{arccot, pixel_to_angle};
pub use error::{ConfigError, TriangulationError};
pub use rig::{NormalizedPoint, RigConfig, TriangulatedPoint, Triangulator, DEFAULT_EPSILON};
