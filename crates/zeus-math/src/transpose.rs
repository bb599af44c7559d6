//! Matrix transpose kernels.
//!
//! Both paths produce bit-identical output: transposition only moves
//! values, and the padding lane of a 3x3 column is `+0.0` on either path.
//! [`Mat3`](crate::Mat3) and [`Mat4`](crate::Mat4) call into these; they are
//! public so the paths can be compared and benchmarked directly.
//!
//! # Example
//!
//! ```rust
//! use zeus_math::{Backend, transpose};
//!
//! let mut a = [[1.0, 2.0, 3.0, 0.0], [4.0, 5.0, 6.0, 0.0], [7.0, 8.0, 9.0, 0.0]];
//! let mut b = a;
//! transpose::transpose3x3_with(&mut a, Backend::Scalar);
//! transpose::transpose3x3_with(&mut b, Backend::Simd);
//! assert_eq!(a, b);
//! ```

use crate::Backend;

/// Transposes a padded 3x3 column-major matrix in place.
#[inline]
pub fn transpose3x3(cols: &mut [[f32; 4]; 3]) {
    transpose3x3_with(cols, Backend::active());
}

/// [`transpose3x3`] on an explicit backend.
#[inline]
pub fn transpose3x3_with(cols: &mut [[f32; 4]; 3], backend: Backend) {
    match backend.resolve() {
        #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
        Backend::Simd => crate::simd::transpose3x3_x4(cols),
        _ => transpose3x3_scalar(cols),
    }
}

/// Scalar 3x3 transpose: swaps the three off-diagonal pairs.
///
/// Writes `+0.0` into the padding lane so the result matches the vector path.
#[inline]
pub fn transpose3x3_scalar(cols: &mut [[f32; 4]; 3]) {
    swap(cols, (0, 1), (1, 0));
    swap(cols, (0, 2), (2, 0));
    swap(cols, (1, 2), (2, 1));
    for col in cols.iter_mut() {
        col[3] = 0.0;
    }
}

/// Transposes a 4x4 column-major matrix in place.
#[inline]
pub fn transpose4x4(cols: &mut [[f32; 4]; 4]) {
    transpose4x4_with(cols, Backend::active());
}

/// [`transpose4x4`] on an explicit backend.
#[inline]
pub fn transpose4x4_with(cols: &mut [[f32; 4]; 4], backend: Backend) {
    match backend.resolve() {
        #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
        Backend::Simd => crate::simd::transpose4x4_x4(cols),
        _ => transpose4x4_scalar(cols),
    }
}

/// Scalar 4x4 transpose: swaps the six off-diagonal pairs.
#[inline]
pub fn transpose4x4_scalar(cols: &mut [[f32; 4]; 4]) {
    for c in 0..4 {
        for r in (c + 1)..4 {
            swap(cols, (c, r), (r, c));
        }
    }
}

#[inline]
fn swap<const N: usize>(cols: &mut [[f32; 4]; N], a: (usize, usize), b: (usize, usize)) {
    let tmp = cols[a.0][a.1];
    cols[a.0][a.1] = cols[b.0][b.1];
    cols[b.0][b.1] = tmp;
}
