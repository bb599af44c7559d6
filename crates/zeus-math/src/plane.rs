//! Oriented plane.

use crate::Vec3;

/// A plane `normal · p = d`.
///
/// The positive half-space (where [`Plane::signed_distance`] is `>= 0`) is
/// the side the normal points into.
///
/// # Example
///
/// ```rust
/// use zeus_math::{Plane, Vec3};
///
/// // Ground plane at y = 2, facing up
/// let plane = Plane::new(Vec3::Y, 2.0);
/// assert_eq!(plane.signed_distance(Vec3::new(5.0, 3.0, -1.0)), 1.0);
/// assert!(!plane.is_in_front(Vec3::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Distance from the origin along `normal`.
    pub d: f32,
}

impl Plane {
    /// Creates a plane from a unit normal and distance. Not normalized.
    #[inline]
    pub const fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Plane from the equation `a*x + b*y + c*z + w = 0`, normalized.
    ///
    /// A zero normal yields a degenerate plane with `normal == ZERO` that
    /// reports every point at distance 0.
    pub fn from_coefficients(a: f32, b: f32, c: f32, w: f32) -> Self {
        let n = Vec3::new(a, b, c);
        let len = n.length();
        if len > 0.0 {
            Self::new(n / len, -w / len)
        } else {
            Self::new(Vec3::ZERO, 0.0)
        }
    }

    /// Plane through three points, facing the side from which they appear
    /// counter-clockwise.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self::new(normal, normal.dot(a))
    }

    /// Signed distance from `p`: positive in front, negative behind.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) - self.d
    }

    /// Returns true if `p` is on or in front of the plane.
    #[inline]
    pub fn is_in_front(&self, p: Vec3) -> bool {
        self.signed_distance(p) >= 0.0
    }
}
