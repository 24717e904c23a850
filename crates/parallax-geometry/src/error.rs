use thiserror::Error;

/// Errors raised when validating a rig configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The stereo baseline is zero, negative, or not finite.
    #[error("inter-axial distance must be positive and finite, got {0} mm")]
    InvalidInterAxialDistance(f64),

    /// The horizontal viewing angle is outside the open interval (0, 180) degrees.
    #[error("viewing angle must lie strictly inside (0, 180) degrees, got {0}")]
    InvalidViewingAngle(f64),

    /// The aspect ratio is zero, negative, or not finite.
    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),

    /// The derived vertical viewing angle left the open interval (0, 180) degrees.
    #[error("derived vertical viewing angle must lie strictly inside (0, 180) degrees, got {0}")]
    InvalidVerticalViewingAngle(f64),

    /// The degeneracy threshold is zero, negative, or not finite.
    #[error("degeneracy epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Errors raised while triangulating one correspondence pair.
#[derive(Debug, Error)]
pub enum TriangulationError {
    /// The two sight rays are parallel within the configured epsilon; the
    /// point is effectively at infinity and its depth is unresolvable.
    #[error("sight rays are parallel (included angle {included_angle} rad), depth is unresolvable")]
    ParallelRays {
        /// Included angle between the two sight rays, radians.
        included_angle: f64,
    },

    /// The bearing towards the point is aligned with the stereo baseline
    /// within the configured epsilon; the horizontal offset is unresolvable.
    #[error("bearing is aligned with the stereo baseline (yaw {yaw} rad), horizontal offset is unresolvable")]
    BaselineAlignedBearing {
        /// Yaw at which the degeneracy was detected, radians.
        yaw: f64,
    },
}
