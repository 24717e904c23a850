use std::f64::consts::{FRAC_PI_2, PI};

/// Inverse cotangent.
///
/// Returns the angle in radians in the open interval `(0, π)`; `arccot(0.0)`
/// is defined as `π/2`.
pub fn arccot(x: f64) -> f64 {
    if x == 0.0 {
        return FRAC_PI_2;
    }
    let angle = (1.0 / x).atan();
    if angle < 0.0 {
        angle + PI
    } else {
        angle
    }
}

/// Converts a normalized horizontal pixel coordinate to a bearing angle.
///
/// A camera with field of view `fov` maps normalized horizontal position
/// linearly into tangent-of-deviation space; inverting through the cotangent
/// recovers the absolute bearing at which the point is seen, measured from
/// the camera's left frame edge.
///
/// # Arguments
///
/// * `x` - Horizontal pixel coordinate normalized to `[0, 1]`. Values outside
///   the range are extrapolated, not rejected.
/// * `fov` - Viewing angle of the camera in radians, inside `(0, π)`.
///
/// # Returns
///
/// The bearing angle in radians, in `(0, π)` for in-range inputs; `π/2` is
/// the center of the frame.
pub fn pixel_to_angle(x: f64, fov: f64) -> f64 {
    let k = 0.5 * ((PI - fov) / 2.0).tan();
    arccot((0.5 - x) / k)
}
