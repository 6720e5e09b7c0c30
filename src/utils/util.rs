//! # Scalar Helpers
//!
//! Interpolation and angle conversions shared by the point helpers in
//! [`geometry`](super::geometry).
//!
//! None of these functions guard against degenerate input. `inv_lerp` with
//! `a == b` divides by zero and yields NaN or an infinity; callers that can hit
//! that case must check for it themselves.

/// Clamps a value between a minimum and maximum.
///
/// # Examples
///
/// ```
/// use road_geometry::utils::util::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linearly interpolates from `a` to `b`.
///
/// `t = 0` gives `a`, `t = 1` gives `b`; values outside `[0, 1]` extrapolate.
///
/// ```
/// use road_geometry::utils::util::lerp;
///
/// assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
/// ```
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `v` sits between `a` and `b`.
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    (v - a) / (b - a)
}

pub fn deg_to_rad(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(radian: f64) -> f64 {
    radian * 180.0 / std::f64::consts::PI
}
