//! Curve evaluation and interpolation.
//!
//! - Linear interpolation ([`lerp`])
//! - Catmull-Rom splines ([`catmull_rom`], [`catmull_rom_vec3`])
//! - Cubic Bezier curves ([`bezier_point`])
//!
//! # Usage
//!
//! ```rust
//! use zeus_math::{catmull_rom, lerp};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//!
//! // Passes through the two middle control points
//! assert_eq!(catmull_rom(0.0, 1.0, 2.0, 3.0, 0.0), 1.0);
//! assert_eq!(catmull_rom(0.0, 1.0, 2.0, 3.0, 1.0), 2.0);
//! ```

use crate::Vec3;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn catmull_rom_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -0.5 * t3 + t2 - 0.5 * t,
        1.5 * t3 - 2.5 * t2 + 1.0,
        -1.5 * t3 + 2.0 * t2 + 0.5 * t,
        0.5 * t3 - 0.5 * t2,
    ]
}

/// Uniform Catmull-Rom spline through four control points.
///
/// The curve runs from `b` (at `t = 0`) to `c` (at `t = 1`); `a` and `d`
/// only shape the tangents. `t` is clamped, so the endpoints are returned
/// exactly.
///
/// # Example
///
/// ```rust
/// use zeus_math::catmull_rom;
///
/// let mid = catmull_rom(0.0, 1.0, 2.0, 3.0, 0.5);
/// assert!((mid - 1.5).abs() < 1e-6);
/// ```
pub fn catmull_rom(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return b;
    }
    if t >= 1.0 {
        return c;
    }
    let [wa, wb, wc, wd] = catmull_rom_weights(t);
    a * wa + b * wb + c * wc + d * wd
}

/// [`catmull_rom`] applied per component.
pub fn catmull_rom_vec3(a: Vec3, b: Vec3, c: Vec3, d: Vec3, t: f32) -> Vec3 {
    if t <= 0.0 {
        return b;
    }
    if t >= 1.0 {
        return c;
    }
    let [wa, wb, wc, wd] = catmull_rom_weights(t);
    a * wa + b * wb + c * wc + d * wd
}

/// Point on a cubic Bezier curve.
///
/// `p0` and `p3` are the endpoints, `p1` and `p2` the handles. `t` is not
/// clamped.
///
/// # Example
///
/// ```rust
/// use zeus_math::{bezier_point, Vec3};
///
/// let p0 = Vec3::ZERO;
/// let p3 = Vec3::new(3.0, 0.0, 0.0);
/// let p = bezier_point(p0, Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), p3, 0.5);
/// assert!((p.x - 1.5).abs() < 1e-6);
/// ```
pub fn bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}
