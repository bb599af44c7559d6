//! Vectorized kernel paths.
//!
//! Portable four-wide arithmetic goes through the `wide` crate. Register
//! shuffles that `wide` does not expose use `std::arch` directly:
//!
//! - SSE on `x86_64` (baseline, always present)
//! - NEON on `aarch64` (baseline, always present)
//!
//! These functions are the vector halves of dual-path kernels. Callers
//! normally go through the dispatching wrappers in [`crate::transpose`] and
//! [`crate::fast_inv_sqrt`], which pick a path from [`crate::Backend`].

use wide::f32x4;

/// Hardware estimate of `1 / sqrt(v)` for 4 values.
///
/// Roughly 12 bits of precision; refine before use.
///
/// # Example
///
/// ```rust
/// use zeus_math::simd::recip_sqrt_x4;
///
/// let r = recip_sqrt_x4(&[4.0, 16.0, 1.0, 0.25]);
/// assert!((r[0] - 0.5).abs() < 1e-3);
/// assert!((r[3] - 2.0).abs() < 1e-2);
/// ```
#[inline]
pub fn recip_sqrt_x4(values: &[f32; 4]) -> [f32; 4] {
    f32x4::from(*values).recip_sqrt().to_array()
}

/// Transposes the 3x3 block of a padded column-major matrix.
///
/// The fourth lane of every column is written as `+0.0`.
#[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
pub fn transpose3x3_x4(cols: &mut [[f32; 4]; 3]) {
    // SAFETY: the target baseline guarantees SSE2 / NEON, and every pointer
    // comes from a `[f32; 4]` which holds exactly one vector.
    unsafe { arch::transpose3x3(cols) }
}

/// Transposes a 4x4 column-major matrix.
#[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
pub fn transpose4x4_x4(cols: &mut [[f32; 4]; 4]) {
    // SAFETY: see `transpose3x3_x4`.
    unsafe { arch::transpose4x4(cols) }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod arch {
    use std::arch::x86_64::*;

    pub unsafe fn transpose3x3(cols: &mut [[f32; 4]; 3]) {
        // SAFETY: unaligned loads/stores of 4 floats from 4-float arrays.
        unsafe {
            let c0 = _mm_loadu_ps(cols[0].as_ptr());
            let c1 = _mm_loadu_ps(cols[1].as_ptr());
            let c2 = _mm_loadu_ps(cols[2].as_ptr());
            let zero = _mm_setzero_ps();

            let lo01 = _mm_unpacklo_ps(c0, c1);
            let lo2z = _mm_unpacklo_ps(c2, zero);
            let hi01 = _mm_unpackhi_ps(c0, c1);
            let hi2z = _mm_unpackhi_ps(c2, zero);

            _mm_storeu_ps(cols[0].as_mut_ptr(), _mm_movelh_ps(lo01, lo2z));
            _mm_storeu_ps(cols[1].as_mut_ptr(), _mm_movehl_ps(lo2z, lo01));
            _mm_storeu_ps(cols[2].as_mut_ptr(), _mm_movelh_ps(hi01, hi2z));
        }
    }

    pub unsafe fn transpose4x4(cols: &mut [[f32; 4]; 4]) {
        // SAFETY: as above.
        unsafe {
            let c0 = _mm_loadu_ps(cols[0].as_ptr());
            let c1 = _mm_loadu_ps(cols[1].as_ptr());
            let c2 = _mm_loadu_ps(cols[2].as_ptr());
            let c3 = _mm_loadu_ps(cols[3].as_ptr());

            let lo01 = _mm_unpacklo_ps(c0, c1);
            let lo23 = _mm_unpacklo_ps(c2, c3);
            let hi01 = _mm_unpackhi_ps(c0, c1);
            let hi23 = _mm_unpackhi_ps(c2, c3);

            _mm_storeu_ps(cols[0].as_mut_ptr(), _mm_movelh_ps(lo01, lo23));
            _mm_storeu_ps(cols[1].as_mut_ptr(), _mm_movehl_ps(lo23, lo01));
            _mm_storeu_ps(cols[2].as_mut_ptr(), _mm_movelh_ps(hi01, hi23));
            _mm_storeu_ps(cols[3].as_mut_ptr(), _mm_movehl_ps(hi23, hi01));
        }
    }
}

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod arch {
    use std::arch::aarch64::*;

    pub unsafe fn transpose3x3(cols: &mut [[f32; 4]; 3]) {
        // SAFETY: 4-float loads/stores from 4-float arrays.
        unsafe {
            let c0 = vld1q_f32(cols[0].as_ptr());
            let c1 = vld1q_f32(cols[1].as_ptr());
            let c2 = vld1q_f32(cols[2].as_ptr());
            let zero = vdupq_n_f32(0.0);

            let lo01 = vzip1q_f32(c0, c1);
            let lo2z = vzip1q_f32(c2, zero);
            let hi01 = vzip2q_f32(c0, c1);
            let hi2z = vzip2q_f32(c2, zero);

            vst1q_f32(cols[0].as_mut_ptr(), vcombine_f32(vget_low_f32(lo01), vget_low_f32(lo2z)));
            vst1q_f32(cols[1].as_mut_ptr(), vcombine_f32(vget_high_f32(lo01), vget_high_f32(lo2z)));
            vst1q_f32(cols[2].as_mut_ptr(), vcombine_f32(vget_low_f32(hi01), vget_low_f32(hi2z)));
        }
    }

    pub unsafe fn transpose4x4(cols: &mut [[f32; 4]; 4]) {
        // SAFETY: as above.
        unsafe {
            let c0 = vld1q_f32(cols[0].as_ptr());
            let c1 = vld1q_f32(cols[1].as_ptr());
            let c2 = vld1q_f32(cols[2].as_ptr());
            let c3 = vld1q_f32(cols[3].as_ptr());

            let lo01 = vzip1q_f32(c0, c1);
            let lo23 = vzip1q_f32(c2, c3);
            let hi01 = vzip2q_f32(c0, c1);
            let hi23 = vzip2q_f32(c2, c3);

            vst1q_f32(cols[0].as_mut_ptr(), vcombine_f32(vget_low_f32(lo01), vget_low_f32(lo23)));
            vst1q_f32(cols[1].as_mut_ptr(), vcombine_f32(vget_high_f32(lo01), vget_high_f32(lo23)));
            vst1q_f32(cols[2].as_mut_ptr(), vcombine_f32(vget_low_f32(hi01), vget_low_f32(hi23)));
            vst1q_f32(cols[3].as_mut_ptr(), vcombine_f32(vget_high_f32(hi01), vget_high_f32(hi23)));
        }
    }
}
