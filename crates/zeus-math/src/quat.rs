//! Quaternion type for 3D rotations.
//!
//! [`Quat`] stores a scalar part `r` and a vector part `v`. A unit
//! quaternion represents a rotation; the type does not enforce unit length,
//! so normalize after operations that drift (repeated products, [`Quat::lerp`]).
//!
//! # Convention
//!
//! - Hamilton product, right-handed rotations
//! - Memory order `[x, y, z, r]`, the same as `glam::Quat` (`[x, y, z, w]`)
//! - 16-byte aligned for vector loads
//!
//! # Usage
//!
//! ```rust
//! use std::f32::consts::FRAC_PI_2;
//! use zeus_math::{Quat, Vec3};
//!
//! let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
//! let v = Quat::rotate(q, Vec3::X);
//! assert!((v - Vec3::Y).length() < 1e-6);
//!
//! // Compose: first q, then q again
//! let half_turn = q * q;
//! assert!((Quat::rotate(half_turn, Vec3::X) + Vec3::X).length() < 1e-6);
//! ```

use std::io::Read;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::trace;
use zeus_core::{Result, StreamReader};

use crate::{AxisAngle, Vec3};

/// Above this `cos(θ)` slerp falls back to [`Quat::nlerp`].
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.9995;

/// Vector parts shorter than this have no usable rotation axis.
const AXIS_EPSILON: f32 = 1e-6;

/// A quaternion `r + xi + yj + zk`.
///
/// Defaults to the identity rotation.
///
/// # Example
///
/// ```rust
/// use zeus_math::{Quat, Vec3};
///
/// let q = Quat::new(1.0, 0.0, 0.0, 0.0);
/// assert_eq!(q, Quat::IDENTITY);
/// assert_eq!(q.v(), Vec3::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Identity rotation (r = 1, v = 0).
    pub const IDENTITY: Self = Self::from_array([0.0, 0.0, 0.0, 1.0]);

    /// All components zero. Not a rotation.
    pub const ZERO: Self = Self::from_array([0.0; 4]);

    /// Creates a quaternion from scalar and vector components.
    #[inline]
    pub const fn new(r: f32, x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z, r] }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    #[inline]
    pub const fn from_scalar_vector(r: f32, v: Vec3) -> Self {
        Self::new(r, v.x, v.y, v.z)
    }

    /// Creates from `[x, y, z, r]`.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self { data: a }
    }

    /// Returns `[x, y, z, r]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Reads the scalar part, then the vector part.
    pub fn read_from<R: Read>(reader: &mut StreamReader<R>) -> Result<Self> {
        let r = reader.read_f32()?;
        let v = Vec3::read_from(reader)?;
        trace!(r, x = v.x, y = v.y, z = v.z, "read quaternion");
        Ok(Self::from_scalar_vector(r, v))
    }

    /// Rotation from Euler angles in radians.
    ///
    /// `angles.x` is pitch, `angles.y` yaw and `angles.z` roll, applied in
    /// Z-Y-X order. [`Quat::pitch`], [`Quat::yaw`] and [`Quat::roll`] invert
    /// this away from the poles.
    pub fn from_euler(angles: Vec3) -> Self {
        let (sx, cx) = (angles.x * 0.5).sin_cos();
        let (sy, cy) = (angles.y * 0.5).sin_cos();
        let (sz, cz) = (angles.z * 0.5).sin_cos();

        Self::new(
            cz * cy * cx + sz * sy * sx,
            cz * cy * sx - sz * sy * cx,
            cz * sy * cx + sz * cy * sx,
            sz * cy * cx - cz * sy * sx,
        )
    }

    /// Rotation of `angle` radians about `axis`: `(cos(a/2), axis * sin(a/2))`.
    ///
    /// A non-unit axis yields a non-unit quaternion, which changes the
    /// strength of the rotation rather than failing.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::from_scalar_vector(c, axis * s)
    }

    /// Scalar part.
    #[inline]
    pub fn r(&self) -> f32 {
        self.data[3]
    }

    /// First vector component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Second vector component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Third vector component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Vector part.
    #[inline]
    pub fn v(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Sets the scalar part.
    #[inline]
    pub fn set_r(&mut self, r: f32) {
        self.data[3] = r;
    }

    /// Sets the vector part.
    #[inline]
    pub fn set_v(&mut self, v: Vec3) {
        self.data[0] = v.x;
        self.data[1] = v.y;
        self.data[2] = v.z;
    }

    /// 4-component dot product `r·r' + v·v'`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.r() * other.r() + self.v().dot(other.v())
    }

    /// Squared magnitude.
    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// `(r, -v)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_scalar_vector(self.r(), -self.v())
    }

    /// Normalizes in place.
    ///
    /// A zero quaternion has no direction and becomes all NaN.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit-length copy. See [`Quat::normalize`].
    #[inline]
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Inverts in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// Multiplicative inverse: conjugate over magnitude squared.
    ///
    /// For a unit quaternion this is the conjugate.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.magnitude_squared()
    }

    /// Appends a rotation about the local X axis (`self * from_axis_angle`).
    pub fn rotate_x(&mut self, angle: f32) {
        *self *= Self::from_axis_angle(Vec3::X, angle);
    }

    /// Appends a rotation about the local Y axis (`self * from_axis_angle`).
    pub fn rotate_y(&mut self, angle: f32) {
        *self *= Self::from_axis_angle(Vec3::Y, angle);
    }

    /// Appends a rotation about the local Z axis (`self * from_axis_angle`).
    pub fn rotate_z(&mut self, angle: f32) {
        *self *= Self::from_axis_angle(Vec3::Z, angle);
    }

    /// Rotates `v` by `rotation` with the sandwich product `q * v * q⁻¹`.
    ///
    /// Uses the true inverse, so the magnitude of a non-unit `rotation`
    /// cancels out and only its direction matters.
    #[inline]
    pub fn rotate(rotation: Self, v: Vec3) -> Vec3 {
        (rotation * v * rotation.inverse()).v()
    }

    /// Converts to axis-angle.
    ///
    /// Returns [`AxisAngle::ZERO`] when the vector part is too short to
    /// define an axis.
    pub fn to_axis_angle(self) -> AxisAngle {
        let v = self.v();
        let len = v.length();
        if len < AXIS_EPSILON {
            return AxisAngle::ZERO;
        }
        let angle = 2.0 * len.atan2(self.r());
        AxisAngle::new(v / len, angle)
    }

    /// Logarithm of a unit quaternion.
    ///
    /// Returns the pure quaternion `(0, θ * axis)` where `θ = acos(r)`.
    /// The identity maps to zero.
    pub fn log(self) -> Self {
        let a = self.r().clamp(-1.0, 1.0).acos();
        let sina = a.sin();
        let v = if sina > 0.0 {
            self.v() * (a / sina)
        } else {
            self.v()
        };
        Self::from_scalar_vector(0.0, v)
    }

    /// Exponential of a pure quaternion; the scalar part is ignored.
    ///
    /// Inverse of [`Quat::log`] for unit quaternions.
    pub fn exp(self) -> Self {
        let a = self.v().length();
        let (sina, cosa) = a.sin_cos();
        let v = if a > 0.0 {
            self.v() * (sina / a)
        } else {
            self.v()
        };
        Self::from_scalar_vector(cosa, v)
    }

    /// Component-wise linear interpolation. Not normalized.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        a * (1.0 - t) + b * t
    }

    /// Normalized linear interpolation.
    ///
    /// Cheaper than [`Quat::slerp`] but without constant angular velocity.
    /// Does not correct for hemisphere.
    #[inline]
    pub fn nlerp(a: Self, b: Self, t: f32) -> Self {
        Self::lerp(a, b, t).normalized()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// - `t <= 0` returns `a`, `t >= 1` returns `b`
    /// - when `a·b < 0`, `b` is negated first so the path takes the short way
    /// - nearly coincident inputs fall back to [`Quat::nlerp`]
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::f32::consts::FRAC_PI_2;
    /// use zeus_math::{Quat, Vec3};
    ///
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
    /// let mid = Quat::slerp(a, b, 0.5);
    /// let expected = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2 / 2.0);
    /// assert!((mid - expected).magnitude() < 1e-5);
    /// ```
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        if t <= 0.0 {
            return a;
        }
        if t >= 1.0 {
            return b;
        }

        let mag = (a.magnitude_squared() * b.magnitude_squared()).sqrt();
        let mut cos_theta = a.dot(b) / mag;
        let mut end = b;
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end = -b;
        }

        if cos_theta > SLERP_LINEAR_THRESHOLD {
            return Self::nlerp(a, end, t);
        }

        let theta = cos_theta.acos();
        let inv_sin = 1.0 / theta.sin();
        a * (((1.0 - t) * theta).sin() * inv_sin) + end * ((t * theta).sin() * inv_sin)
    }

    /// Rotation about Z in radians.
    pub fn roll(&self) -> f32 {
        let (r, x, y, z) = (self.r(), self.x(), self.y(), self.z());
        (2.0 * (x * y + r * z)).atan2(r * r + x * x - y * y - z * z)
    }

    /// Rotation about X in radians.
    pub fn pitch(&self) -> f32 {
        let (r, x, y, z) = (self.r(), self.x(), self.y(), self.z());
        (2.0 * (y * z + r * x)).atan2(r * r - x * x - y * y + z * z)
    }

    /// Rotation about Y in radians.
    ///
    /// The `asin` argument is clamped, so quaternions slightly past a pole
    /// (or slightly off unit length) still give a finite angle.
    pub fn yaw(&self) -> f32 {
        let (r, x, y, z) = (self.r(), self.x(), self.y(), self.z());
        (-2.0 * (x * z - r * y)).clamp(-1.0, 1.0).asin()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_array(self.data)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::from_array(q.to_array())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.data, rhs.data);
        Self::from_array([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]])
    }
}

impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.data, rhs.data);
        Self::from_array([a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]])
    }
}

/// Hamilton product: `self` applied after `rhs` when rotating vectors.
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (r1, v1) = (self.r(), self.v());
        let (r2, v2) = (rhs.r(), rhs.v());
        Self::from_scalar_vector(r1 * r2 - v1.dot(v2), v2 * r1 + v1 * r2 + v1.cross(v2))
    }
}

/// Treats the vector as a pure quaternion `(0, v)`.
impl Mul<Vec3> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self {
        self * Self::from_scalar_vector(0.0, rhs)
    }
}

/// `self * rhs.inverse()`.
impl Div for Quat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let a = self.data;
        Self::from_array([a[0] * rhs, a[1] * rhs, a[2] * rhs, a[3] * rhs])
    }
}

/// Component-wise division by a scale.
///
/// Dividing by zero is undefined for a quaternion; the IEEE result comes
/// through as-is, so non-zero components become `±inf` and zero components
/// become NaN.
impl Div<f32> for Quat {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        let a = self.data;
        Self::from_array([a[0] / rhs, a[1] / rhs, a[2] / rhs, a[3] / rhs])
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Add<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn add(self, rhs: Quat) -> Quat {
        let a = rhs.data;
        Quat::from_array([self + a[0], self + a[1], self + a[2], self + a[3]])
    }
}

impl Sub<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn sub(self, rhs: Quat) -> Quat {
        let a = rhs.data;
        Quat::from_array([self - a[0], self - a[1], self - a[2], self - a[3]])
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        rhs * self
    }
}

impl AddAssign for Quat {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quat {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Quat {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// In-place [`Div<f32>`]; a zero scale leaves `±inf`/NaN components.
impl DivAssign<f32> for Quat {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<[f32; 4]> for Quat {
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Quat> for [f32; 4] {
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}

/// Euler angles, as [`Quat::from_euler`].
impl From<Vec3> for Quat {
    fn from(angles: Vec3) -> Self {
        Self::from_euler(angles)
    }
}

impl From<AxisAngle> for Quat {
    fn from(aa: AxisAngle) -> Self {
        Self::from_axis_angle(aa.axis(), aa.angle())
    }
}

impl From<Quat> for AxisAngle {
    fn from(q: Quat) -> Self {
        q.to_axis_angle()
    }
}

impl From<glam::Quat> for Quat {
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::Quat {
    fn from(q: Quat) -> Self {
        q.to_glam()
    }
}
