//! 4x4 matrix type for affine and projective transforms.
//!
//! Same conventions as [`Mat3`](crate::Mat3): column-major storage, column
//! vectors, right-handed coordinates. Projections target OpenGL clip space
//! (`-w <= z <= w`).
//!
//! # Usage
//!
//! ```rust
//! use zeus_math::{Mat4, Vec3};
//!
//! let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(1.0, 16.0 / 9.0, 0.1, 100.0);
//! let view_proj = proj * view;
//! let ndc = view_proj.project_point(Vec3::ZERO);
//! assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
//! ```

use std::ops::Mul;

use crate::{transpose, Backend, Vec3};

/// A 4x4 column-major matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_cols([[0.0; 4]; 4]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from row arrays.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut m = Self::from_cols(rows);
        transpose::transpose4x4_scalar(&mut m.cols);
        m
    }

    /// Translation by `t`.
    pub fn translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    /// Right-handed perspective projection into OpenGL clip space.
    ///
    /// `fov_y` is the vertical field of view in radians. The camera looks
    /// down `-Z`; `near` and `far` are positive distances.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let range = near - far;
        Self::from_cols([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / range, -1.0],
            [0.0, 0.0, 2.0 * far * near / range, 0.0],
        ])
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);
        Self::from_cols([
            [s.x, u.x, -f.x, 0.0],
            [s.y, u.y, -f.y, 0.0],
            [s.z, u.z, -f.z, 0.0],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
        ])
    }

    /// Element at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// Column `i`.
    #[inline]
    pub fn col(&self, i: usize) -> [f32; 4] {
        self.cols[i]
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> [f32; 4] {
        [self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i]]
    }

    /// Column storage.
    #[inline]
    pub fn as_cols(&self) -> &[[f32; 4]; 4] {
        &self.cols
    }

    /// Transposes in place on the active backend.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        transpose::transpose4x4(&mut self.cols);
    }

    /// Transposes in place on an explicit backend.
    #[inline]
    pub fn transpose_in_place_with(&mut self, backend: Backend) {
        transpose::transpose4x4_with(&mut self.cols, backend);
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose_in_place();
        m
    }

    /// [`Mat4::transposed`] on an explicit backend.
    #[inline]
    pub fn transposed_with(&self, backend: Backend) -> Self {
        let mut m = *self;
        m.transpose_in_place_with(backend);
        m
    }

    /// `self * v` for a homogeneous vector.
    #[inline]
    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (col, &s) in self.cols.iter().zip(v.iter()) {
            for (o, c) in out.iter_mut().zip(col) {
                *o += c * s;
            }
        }
        out
    }

    /// Transforms a point (`w = 1`), ignoring the projective row.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a direction (`w = 0`).
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_vec4([v.x, v.y, v.z, 0.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a point and divides by `w`.
    #[inline]
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        Vec3::new(x, y, z) / w
    }

    /// Multiplies two matrices.
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_cols([
            self.transform_vec4(other.cols[0]),
            self.transform_vec4(other.cols[1]),
            self.transform_vec4(other.cols[2]),
            self.transform_vec4(other.cols[3]),
        ])
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.cols)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        m.to_glam()
    }
}
