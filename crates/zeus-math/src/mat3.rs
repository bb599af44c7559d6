//! 3x3 matrix type for rotations and linear transforms.
//!
//! # Convention
//!
//! Matrices are stored **column-major**, each column padded to four lanes
//! so it fills one vector register, and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! The padding lane is always `+0.0`.
//!
//! # Usage
//!
//! ```rust
//! use zeus_math::{Mat3, Quat, Vec3};
//!
//! let q = Quat::from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
//! let m = Mat3::from_quat(q);
//! assert!((m * Vec3::X - Vec3::Y).length() < 1e-6);
//! ```

use std::ops::Mul;

use crate::{transpose, Backend, Quat, Vec3};

/// A 3x3 matrix with padded column storage.
///
/// # Example
///
/// ```rust
/// use zeus_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Mat3 {
    cols: [[f32; 4]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        cols: [[0.0; 4]; 3],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            cols: [
                [cols[0][0], cols[0][1], cols[0][2], 0.0],
                [cols[1][0], cols[1][1], cols[1][2], 0.0],
                [cols[2][0], cols[2][1], cols[2][2], 0.0],
            ],
        }
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeus_math::Mat3;
    ///
    /// let m = Mat3::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    ///     [7.0, 8.0, 9.0],
    /// ]);
    /// assert_eq!(m.get(0, 2), 3.0);
    /// assert_eq!(m.get(2, 0), 7.0);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self::from_cols([
            [rows[0][0], rows[1][0], rows[2][0]],
            [rows[0][1], rows[1][1], rows[2][1]],
            [rows[0][2], rows[1][2], rows[2][2]],
        ])
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Rotation matrix of a unit quaternion.
    ///
    /// `Mat3::from_quat(q) * v` equals `Quat::rotate(q, v)` up to rounding.
    pub fn from_quat(q: Quat) -> Self {
        let (r, x, y, z) = (q.r(), q.x(), q.y(), q.z());
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (rx, ry, rz) = (r * x2, r * y2, r * z2);

        Self::from_cols([
            [1.0 - (yy + zz), xy + rz, xz - ry],
            [xy - rz, 1.0 - (xx + zz), yz + rx],
            [xz + ry, yz - rx, 1.0 - (xx + yy)],
        ])
    }

    /// Element at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.cols[0][i], self.cols[1][i], self.cols[2][i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        let c = self.cols[i];
        Vec3::new(c[0], c[1], c[2])
    }

    /// Padded column storage, as loaded by the vector kernels.
    #[inline]
    pub fn as_cols_padded(&self) -> &[[f32; 4]; 3] {
        &self.cols
    }

    /// Transposes in place on the active backend.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        transpose::transpose3x3(&mut self.cols);
    }

    /// Transposes in place on an explicit backend.
    #[inline]
    pub fn transpose_in_place_with(&mut self, backend: Backend) {
        transpose::transpose3x3_with(&mut self.cols, backend);
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose_in_place();
        m
    }

    /// [`Mat3::transposed`] on an explicit backend.
    #[inline]
    pub fn transposed_with(&self, backend: Backend) -> Self {
        let mut m = *self;
        m.transpose_in_place_with(backend);
        m
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        self.col(0) * v.x + self.col(1) * v.y + self.col(2) * v.z
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_col_vecs(
            self.transform(other.col(0)),
            self.transform(other.col(1)),
            self.transform(other.col(2)),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
    }

    /// Converts to glam Mat3.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            self.col(0).to_glam(),
            self.col(1).to_glam(),
            self.col(2).to_glam(),
        )
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl From<Quat> for Mat3 {
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}

impl From<glam::Mat3> for Mat3 {
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat3> for glam::Mat3 {
    fn from(m: Mat3) -> Self {
        m.to_glam()
    }
}
