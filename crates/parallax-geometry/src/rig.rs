use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::angles::{arccot, pixel_to_angle};
use crate::error::{ConfigError, TriangulationError};

/// Default threshold below which a trigonometric denominator counts as
/// degenerate.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// A 2D point in normalized pixel coordinates.
///
/// `(0, 0)` is the top-left corner of the camera frame; `x` grows rightward
/// and `y` grows downward, both nominally in `[0, 1]`. Out-of-range values
/// are extrapolated by the solver, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal coordinate in `[0, 1]`, left to right.
    pub x: f64,
    /// Vertical coordinate in `[0, 1]`, top to bottom.
    pub y: f64,
}

impl NormalizedPoint {
    /// Creates a point from normalized pixel coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for NormalizedPoint {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

/// Static description of a two-camera stereo rig.
///
/// Constructed once per physical setup and reused for every frame pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    /// Distance between the two camera lenses in millimeters.
    pub inter_axial_distance: f64,
    /// Horizontal viewing angle of each camera in degrees, strictly inside
    /// (0, 180).
    pub viewing_angle: f64,
    /// Height/width ratio used to derive the vertical viewing angle
    /// (`vertical = viewing_angle * aspect_ratio`).
    pub aspect_ratio: f64,
    /// Distance from the front of the camera housing to the sensor plane in
    /// millimeters; subtracted from the computed depth so results are
    /// referenced to the housing front.
    pub sensor_offset: f64,
    /// Threshold below which a trigonometric denominator counts as
    /// degenerate.
    pub epsilon: f64,
}

impl RigConfig {
    /// Creates a configuration with the default aspect ratio (9/16), no
    /// sensor offset and the default degeneracy epsilon.
    pub fn new(inter_axial_distance: f64, viewing_angle: f64) -> Self {
        Self {
            inter_axial_distance,
            viewing_angle,
            aspect_ratio: 9.0 / 16.0,
            sensor_offset: 0.0,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Sets the height/width aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Sets the housing-front-to-sensor offset in millimeters.
    pub fn with_sensor_offset(mut self, sensor_offset: f64) -> Self {
        self.sensor_offset = sensor_offset;
        self
    }

    /// Sets the degeneracy detection threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Result of triangulating one correspondence pair.
///
/// Sign conventions, seen from behind the rig looking forward:
///
/// ```text
///             (+y)
///  (-x)  [left, right]  (+x)
///             (-y)
/// ```
///
/// with `z` growing away from the rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangulatedPoint {
    /// Position `[x, y, z]` in whole millimeters relative to the rig center:
    /// `x` positive to the right, `y` positive above, `z` positive away from
    /// the rig, measured from the housing front.
    pub position: [f64; 3],
    /// Yaw about the rig's vertical axis in radians; `π/2` is straight
    /// ahead.
    pub yaw: f64,
    /// Pitch about the rig's horizontal axis in radians; `0` is straight
    /// ahead, positive is above the horizontal center plane.
    pub pitch: f64,
}

/// Converts correspondence pairs observed on a stereo rig into 3D positions.
///
/// The solver is pure and stateless per call: it holds only the immutable
/// configuration and derived constants, making it safe to share across
/// threads without synchronization.
#[derive(Debug, Clone)]
pub struct Triangulator {
    config: RigConfig,
    /// Horizontal viewing angle in radians.
    fov: f64,
    /// Derived vertical viewing angle in radians.
    vertical_fov: f64,
    base_angle: f64,
    min_height: f64,
}

impl Triangulator {
    /// Builds a triangulator, validating the configuration preconditions.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the baseline is not positive, the
    /// horizontal or derived vertical viewing angle leaves (0, 180) degrees,
    /// or the aspect ratio or epsilon is not a positive finite number.
    pub fn new(config: RigConfig) -> Result<Self, ConfigError> {
        if !config.inter_axial_distance.is_finite() || config.inter_axial_distance <= 0.0 {
            return Err(ConfigError::InvalidInterAxialDistance(
                config.inter_axial_distance,
            ));
        }
        if !(config.viewing_angle > 0.0 && config.viewing_angle < 180.0) {
            return Err(ConfigError::InvalidViewingAngle(config.viewing_angle));
        }
        if !config.aspect_ratio.is_finite() || config.aspect_ratio <= 0.0 {
            return Err(ConfigError::InvalidAspectRatio(config.aspect_ratio));
        }
        let vertical_angle = config.viewing_angle * config.aspect_ratio;
        if vertical_angle >= 180.0 {
            return Err(ConfigError::InvalidVerticalViewingAngle(vertical_angle));
        }
        if !config.epsilon.is_finite() || config.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(config.epsilon));
        }

        let fov = config.viewing_angle.to_radians();
        let vertical_fov = vertical_angle.to_radians();
        let base_angle = (PI - fov) / 2.0;
        let min_height = config.inter_axial_distance / 2.0 * base_angle.tan();

        Ok(Self {
            config,
            fov,
            vertical_fov,
            base_angle,
            min_height,
        })
    }

    /// The configuration this triangulator was built from.
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Base angle `β = (π − fov) / 2` of the isosceles triangle spanned by
    /// the two cameras at infinite convergence, in radians.
    ///
    /// Diagnostic state; no solver step consumes it.
    pub fn base_angle(&self) -> f64 {
        self.base_angle
    }

    /// Minimum resolvable height `h_min = a/2 · tan β` in millimeters, the
    /// closest depth at which both frame edges still see the same point.
    ///
    /// Diagnostic state; no solver step consumes it.
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Triangulates one correspondence pair into a 3D position and viewing
    /// angles.
    ///
    /// A physical point in front of the rig appears further right on the
    /// left camera than on the right camera (`left.x > right.x`); a crossed
    /// pair triangulates behind the rig and yields a negative depth.
    ///
    /// # Arguments
    ///
    /// * `left` - Observation on the left camera, normalized to `[0, 1]`.
    /// * `right` - Observation on the right camera, normalized to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::ParallelRays`] when the two sight rays
    /// do not converge within the configured epsilon, and
    /// [`TriangulationError::BaselineAlignedBearing`] when the bearing is so
    /// close to the baseline direction that the horizontal offset cannot be
    /// resolved.
    pub fn triangulate(
        &self,
        left: NormalizedPoint,
        right: NormalizedPoint,
    ) -> Result<TriangulatedPoint, TriangulationError> {
        let (depth, yaw) = self.solve_depth(left.x, right.x)?;
        let x = self.solve_horizontal(depth, yaw)?;
        let (y, pitch) = self.solve_vertical(left.y, right.y, depth);
        Ok(TriangulatedPoint {
            position: [x, y, depth],
            yaw,
            pitch,
        })
    }

    /// Law-of-sines depth solver over the triangle formed by the two camera
    /// centers and the observed point. Returns the offset-corrected depth in
    /// whole millimeters and the yaw bearing.
    fn solve_depth(&self, x_left: f64, x_right: f64) -> Result<(f64, f64), TriangulationError> {
        let theta_r = pixel_to_angle(x_right, self.fov);
        // The left camera's bearing is measured from the opposite frame edge
        // so both angles describe the same triangle.
        let theta_l = PI - pixel_to_angle(x_left, self.fov);
        let gamma = PI - theta_r - theta_l;
        if gamma.sin().abs() < self.config.epsilon {
            return Err(TriangulationError::ParallelRays {
                included_angle: gamma,
            });
        }
        let height =
            self.config.inter_axial_distance * theta_r.sin() * theta_l.sin() / gamma.sin();
        let yaw = arccot(0.5 * (theta_r.cos() / theta_r.sin() - theta_l.cos() / theta_l.sin()));
        Ok(((height - self.config.sensor_offset).round(), yaw))
    }

    /// Horizontal offset from the rig's vertical center plane, positive to
    /// the right, in whole millimeters.
    fn solve_horizontal(&self, depth: f64, yaw: f64) -> Result<f64, TriangulationError> {
        let slope = yaw.tan();
        if slope.abs() < self.config.epsilon {
            return Err(TriangulationError::BaselineAlignedBearing { yaw });
        }
        Ok((-depth / slope).round())
    }

    /// Vertical offset from the rig's horizontal center plane, positive
    /// above, in whole millimeters, plus the pitch bearing. Pixel `y` grows
    /// downward while physical `y` grows upward; the `π/2` complement over
    /// the vertical field of view performs the flip.
    fn solve_vertical(&self, y_left: f64, y_right: f64, depth: f64) -> (f64, f64) {
        let mean = 0.5 * (y_left + y_right);
        let pitch = FRAC_PI_2 - pixel_to_angle(mean, self.vertical_fov);
        ((depth * pitch.tan()).round(), pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rig() -> Triangulator {
        Triangulator::new(RigConfig::new(120.0, 70.3)).unwrap()
    }

    #[test]
    fn rejects_non_positive_baseline() {
        assert!(matches!(
            Triangulator::new(RigConfig::new(0.0, 70.3)),
            Err(ConfigError::InvalidInterAxialDistance(_))
        ));
        assert!(matches!(
            Triangulator::new(RigConfig::new(-120.0, 70.3)),
            Err(ConfigError::InvalidInterAxialDistance(_))
        ));
    }

    #[test]
    fn rejects_viewing_angle_outside_open_interval() {
        for angle in [0.0, 180.0, -10.0, 360.0, f64::NAN] {
            assert!(matches!(
                Triangulator::new(RigConfig::new(120.0, angle)),
                Err(ConfigError::InvalidViewingAngle(_))
            ));
        }
    }

    #[test]
    fn rejects_bad_aspect_ratio() {
        assert!(matches!(
            Triangulator::new(RigConfig::new(120.0, 70.3).with_aspect_ratio(0.0)),
            Err(ConfigError::InvalidAspectRatio(_))
        ));
        // 100 * 2.0 pushes the derived vertical angle past 180 degrees.
        assert!(matches!(
            Triangulator::new(RigConfig::new(120.0, 100.0).with_aspect_ratio(2.0)),
            Err(ConfigError::InvalidVerticalViewingAngle(_))
        ));
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert!(matches!(
            Triangulator::new(RigConfig::new(120.0, 70.3).with_epsilon(0.0)),
            Err(ConfigError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn derived_constants_for_known_rig() {
        let rig = rig();
        assert_relative_eq!(rig.base_angle(), 0.9573130947188898, epsilon = 1e-12);
        assert_relative_eq!(rig.min_height(), 85.213197531742, epsilon = 1e-9);
    }

    #[test]
    fn centered_point_is_straight_ahead() {
        let point = rig()
            .triangulate(NormalizedPoint::new(0.6, 0.5), NormalizedPoint::new(0.4, 0.5))
            .unwrap();
        assert_eq!(point.position, [0.0, 0.0, 426.0]);
        assert_relative_eq!(point.yaw, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(point.pitch, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn off_center_point_matches_pinned_values() {
        let point = rig()
            .triangulate(
                NormalizedPoint::new(0.7, 0.4),
                NormalizedPoint::new(0.55, 0.42),
            )
            .unwrap();
        assert_eq!(point.position, [100.0, 37.0, 568.0]);
        assert_relative_eq!(point.yaw, 1.745040310668126, epsilon = 1e-9);
        assert_relative_eq!(point.pitch, 0.0646141239556004, epsilon = 1e-9);
    }

    #[test]
    fn sensor_offset_shifts_reported_depth() {
        let rig = Triangulator::new(RigConfig::new(120.0, 70.3).with_sensor_offset(15.0)).unwrap();
        let point = rig
            .triangulate(NormalizedPoint::new(0.6, 0.5), NormalizedPoint::new(0.4, 0.5))
            .unwrap();
        assert_eq!(point.position[2], 411.0);
    }

    #[test]
    fn crossed_pair_triangulates_behind_the_rig() {
        // Swapping the two observations places the intersection behind the
        // baseline; the depth is reported as-is with a negative sign.
        let point = rig()
            .triangulate(NormalizedPoint::new(0.4, 0.5), NormalizedPoint::new(0.6, 0.5))
            .unwrap();
        assert_eq!(point.position[2], -426.0);
    }

    #[test]
    fn depth_grows_as_disparity_shrinks() {
        let rig = rig();
        let mut previous = 0.0;
        for disparity in [0.3, 0.2, 0.1, 0.05, 0.02] {
            let point = rig
                .triangulate(
                    NormalizedPoint::new(0.5 + disparity / 2.0, 0.5),
                    NormalizedPoint::new(0.5 - disparity / 2.0, 0.5),
                )
                .unwrap();
            assert!(
                point.position[2] > previous,
                "depth {} did not grow at disparity {disparity}",
                point.position[2]
            );
            previous = point.position[2];
        }
    }

    #[test]
    fn parallel_rays_are_rejected() {
        // Both cameras dead center: the sight rays never converge.
        let result = rig().triangulate(
            NormalizedPoint::new(0.5, 0.5),
            NormalizedPoint::new(0.5, 0.5),
        );
        assert!(matches!(
            result,
            Err(TriangulationError::ParallelRays { .. })
        ));
    }

    #[test]
    fn baseline_aligned_bearing_is_rejected() {
        // An extrapolated observation far outside the frame drives the
        // bearing onto the baseline itself; with a loosened epsilon the
        // horizontal solver reports the degeneracy instead of a huge offset.
        let rig = Triangulator::new(RigConfig::new(120.0, 70.3).with_epsilon(1e-3)).unwrap();
        let result = rig.triangulate(
            NormalizedPoint::new(0.5, 0.5),
            NormalizedPoint::new(-5000.0, 0.5),
        );
        assert!(matches!(
            result,
            Err(TriangulationError::BaselineAlignedBearing { .. })
        ));
    }

    #[test]
    fn triangulator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Triangulator>();
    }
}
