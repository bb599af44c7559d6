//! Axis-angle rotation type.

use crate::Vec3;

/// A rotation stored as a single vector: unit axis scaled by the angle in
/// radians.
///
/// The zero vector is the identity rotation.
///
/// # Example
///
/// ```rust
/// use zeus_math::{AxisAngle, Vec3};
///
/// let aa = AxisAngle::new(Vec3::Z, 0.5);
/// assert_eq!(aa.axis(), Vec3::Z);
/// assert_eq!(aa.angle(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle {
    vector: Vec3,
}

impl AxisAngle {
    /// No rotation.
    pub const ZERO: Self = Self { vector: Vec3::ZERO };

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` should be unit length; its magnitude is folded into the angle.
    #[inline]
    pub fn new(axis: Vec3, angle: f32) -> Self {
        Self {
            vector: axis * angle,
        }
    }

    /// Wraps an already scaled axis vector.
    #[inline]
    pub const fn from_vec(vector: Vec3) -> Self {
        Self { vector }
    }

    /// The scaled axis vector.
    #[inline]
    pub fn vector(&self) -> Vec3 {
        self.vector
    }

    /// Rotation angle in radians (never negative).
    #[inline]
    pub fn angle(&self) -> f32 {
        self.vector.length()
    }

    /// Unit rotation axis, or zero for the identity.
    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.vector.normalize()
    }

    /// Returns true if this is the identity rotation.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vector == Vec3::ZERO
    }
}

impl From<Vec3> for AxisAngle {
    fn from(vector: Vec3) -> Self {
        Self::from_vec(vector)
    }
}

impl From<AxisAngle> for Vec3 {
    fn from(aa: AxisAngle) -> Self {
        aa.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(AxisAngle::ZERO.is_zero());
        assert_eq!(AxisAngle::ZERO.angle(), 0.0);
        assert_eq!(AxisAngle::ZERO.axis(), Vec3::ZERO);
        assert_eq!(AxisAngle::default(), AxisAngle::ZERO);
    }

    #[test]
    fn test_new_scales_axis() {
        let aa = AxisAngle::new(Vec3::new(0.6, 0.0, 0.8), 2.0);
        assert!((aa.vector() - Vec3::new(1.2, 0.0, 1.6)).length() < 1e-6);
        assert!((aa.angle() - 2.0).abs() < 1e-6);
        assert!((aa.axis() - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);

        // Non-unit axis strengthens the rotation
        let aa = AxisAngle::new(Vec3::new(0.0, 2.0, 0.0), 0.5);
        assert!((aa.angle() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vector_conversions() {
        let v = Vec3::new(0.0, 0.5, 0.0);
        let aa = AxisAngle::from(v);
        assert_eq!(Vec3::from(aa), v);
        assert_eq!(aa.axis(), Vec3::Y);
    }
}
