//! Fast approximations of transcendental functions.
//!
//! Each kernel trades accuracy for latency and keeps the exact curve that
//! existing game data was tuned against. These are not drop-in replacements
//! for the `std` functions: the error bounds and edge-case outputs below are
//! part of the contract.
//!
//! | Function | Domain | Max error |
//! |----------|--------|-----------|
//! | [`fast_inv_sqrt`] | `v > 0` (normal) | `1e-12` relative |
//! | [`fast_sqrt`] | `v > 0` (normal) | `1e-12` relative |
//! | [`fast_arc_cos`] | `|v| < 0.925` | `5e-3` rad against `-acos(v)` |
//! | [`fast_sin`] | `[-π, π]` after reduction | `1.5e-3` absolute |
//! | [`fast_cos`] | `[-π, π]` after reduction | `5e-4` absolute |
//!
//! # Usage
//!
//! ```rust
//! use zeus_math::{fast_cos, fast_inv_sqrt, floor_power_of_two};
//!
//! assert!((fast_inv_sqrt(4.0) - 0.5).abs() < 1e-12);
//! assert!((fast_cos(0.0) - 1.0).abs() < 1e-6);
//! assert_eq!(floor_power_of_two(255), 128);
//! ```

use std::f32::consts::PI;
use std::f64::consts::{PI as PI_F64, TAU as TAU_F64};

use crate::{simd, Backend};

/// Returned by [`fast_inv_sqrt`] for negative input: `1 / (0x7FFF_FFFF as f32)`.
pub const INV_SQRT_NEGATIVE: f64 = 1.0 / 2_147_483_648.0;

/// Returned by [`fast_inv_sqrt`] for zero: `1 / (0x7F80_0000 as f32)`.
pub const INV_SQRT_ZERO: f64 = 1.0 / 2_139_095_040.0;

/// Inputs with `|v|` at or above this use the exact arccosine.
pub const ARC_COS_POLY_LIMIT: f32 = 0.925;

const INV_SQRT_MAGIC: u64 = 0x5fe6_eb50_c7b5_37a9;
const SEED_ITERATIONS: usize = 2;
const REFINE_PASSES: usize = 5;

// Odd polynomial approximating asin on |v| < 0.925.
const ASIN_C1: f64 = 0.998_227_18;
const ASIN_C3: f64 = 0.205_866_04;
const ASIN_C5: f64 = -0.114_254_2;
const ASIN_C7: f64 = 0.296_978_2;

const COS_C2: f32 = -0.499_980_3;
const COS_C4: f32 = 0.041_620_344;
const COS_C6: f32 = -0.001_363_610_3;
const COS_C8: f32 = 0.000_020_169_435;

const SIN_C1: f32 = 0.999_805_87;
const SIN_C3: f32 = -0.166_216_58;
const SIN_C5: f32 = 0.008_087_107_9;
const SIN_C7: f32 = -0.000_152_976_99;

/// Approximate `1 / sqrt(v)` using the active [`Backend`].
///
/// - `v < 0` returns [`INV_SQRT_NEGATIVE`]
/// - `v == 0` returns [`INV_SQRT_ZERO`]
/// - `v > 0` seeds an estimate and refines it with fixed Newton-Raphson
///   passes; NaN propagates
///
/// Subnormal inputs get a poor seed and may not converge to the documented
/// bound.
#[inline]
pub fn fast_inv_sqrt(v: f64) -> f64 {
    fast_inv_sqrt_with(v, Backend::active())
}

/// [`fast_inv_sqrt`] with an explicit backend.
///
/// The scalar path seeds with the magic-constant bit trick; the SIMD path
/// seeds with the hardware reciprocal square root estimate when `v` fits a
/// normal `f32`. Both then run the same refinement, so they agree within
/// the documented bound.
pub fn fast_inv_sqrt_with(v: f64, backend: Backend) -> f64 {
    if v < 0.0 {
        return INV_SQRT_NEGATIVE;
    }
    if v == 0.0 {
        return INV_SQRT_ZERO;
    }

    let seed = match backend.resolve() {
        Backend::Simd if fits_normal_f32(v) => simd::recip_sqrt_x4(&[v as f32; 4])[0] as f64,
        _ => f64::from_bits(INV_SQRT_MAGIC.wrapping_sub(v.to_bits() >> 1)),
    };
    refine_inv_sqrt(v, seed)
}

/// Approximate `sqrt(v)` as `v * fast_inv_sqrt(v)`.
///
/// Shares the sentinels of [`fast_inv_sqrt`] for `v <= 0`.
#[inline]
pub fn fast_sqrt(v: f64) -> f64 {
    if v <= 0.0 {
        return fast_inv_sqrt(v);
    }
    v * fast_inv_sqrt(v)
}

fn refine_inv_sqrt(v: f64, seed: f64) -> f64 {
    let half = v * 0.5;
    let mut q = seed;
    for _ in 0..SEED_ITERATIONS {
        q *= 1.5 - half * q * q;
    }
    for _ in 0..REFINE_PASSES {
        q = 0.5 * q * (3.0 - v * q * q);
    }
    q
}

#[inline]
fn fits_normal_f32(v: f64) -> bool {
    v >= f32::MIN_POSITIVE as f64 && v <= f32::MAX as f64
}

/// Approximate arccosine in radians.
///
/// For `|v| >= 0.925` this is the exact `acos(v)`. Inside that range it
/// evaluates an odd polynomial for `asin(v)` and returns
/// `asin(v) - π/2`, which is `-acos(v)`: the result is sign-inverted
/// relative to the true arccosine. Callers rely on this curve; do not
/// "fix" the sign here.
///
/// The coefficients are the legacy tuned constants regrouped as
/// `x·(c1 + c3·x² + c5·x⁴ + c7·x⁶)`. Evaluated in their original Horner
/// order they do not track arccosine at all. The regrouped curve stays within
/// `5e-3` of `-acos(v)` (about `4e-3` at worst near the `0.925` cut-off),
/// which is looser than a `1e-3` target and is the bound callers get.
///
/// # Example
///
/// ```rust
/// use zeus_math::fast_arc_cos;
///
/// let approx = fast_arc_cos(0.5);
/// assert!((approx + 0.5f32.acos()).abs() < 5e-3);
/// assert_eq!(fast_arc_cos(1.0), 0.0);
/// ```
pub fn fast_arc_cos(v: f32) -> f32 {
    if v.abs() >= ARC_COS_POLY_LIMIT {
        return v.acos();
    }

    let x = f64::from(v);
    let sq = x * x;
    let asin = x * (ASIN_C1 + sq * (ASIN_C3 + sq * (ASIN_C5 + sq * ASIN_C7)));
    (asin - std::f64::consts::FRAC_PI_2) as f32
}

/// Largest power of two `<= x`.
///
/// Returns 0 for `x == 0`. Negative input has no meaningful answer and the
/// result is unspecified (currently `i32::MIN`); callers must not pass it.
///
/// # Example
///
/// ```rust
/// use zeus_math::floor_power_of_two;
///
/// assert_eq!(floor_power_of_two(1), 1);
/// assert_eq!(floor_power_of_two(256), 256);
/// assert_eq!(floor_power_of_two(1000), 512);
/// ```
#[inline]
pub fn floor_power_of_two(x: i32) -> i32 {
    if x == 0 {
        return 0;
    }
    1i32 << (31 - x.leading_zeros())
}

/// Maps an angle with `|radians| > π` into `[-π, π]`.
///
/// Works on the sign-stripped bit pattern so both signs reduce the same way,
/// then restores the sign. Angles with `|radians| <= π`, including exactly
/// `±π`, are returned unchanged. Whole turns are removed in `f64`, so every
/// finite input lands in range; accuracy against the true angle degrades once
/// the input is far past `1e12`. Non-finite input yields NaN.
#[inline]
pub fn reduce_angle(radians: f32) -> f32 {
    if radians.abs() <= PI {
        return radians;
    }

    let magnitude = f32::from_bits(radians.to_bits() & 0x7fff_ffff);
    let mut wrapped = f64::from(magnitude).rem_euclid(TAU_F64);
    if wrapped > PI_F64 {
        wrapped -= TAU_F64;
    }
    let reduced = wrapped as f32;
    if radians.is_sign_negative() {
        -reduced
    } else {
        reduced
    }
}

/// Approximate cosine after range reduction.
///
/// The even polynomial is `1 + c2·x² + c4·x⁴ + c6·x⁶ + c8·x⁸`: the unit
/// constant plus four tuned coefficients, so degree 8. The `x⁸` term is what
/// holds the `5e-4` bound out to `±π`; dropping it leaves a degree-6 curve
/// that misses cosine by about `0.2` near the ends of the interval.
///
/// # Example
///
/// ```rust
/// use zeus_math::fast_cos;
///
/// assert!((fast_cos(std::f32::consts::PI) + 1.0).abs() < 5e-4);
/// ```
#[inline]
pub fn fast_cos(radians: f32) -> f32 {
    let x = reduce_angle(radians);
    let sq = x * x;
    1.0 + sq * (COS_C2 + sq * (COS_C4 + sq * (COS_C6 + sq * COS_C8)))
}

/// Approximate sine (odd polynomial times the reduced angle).
///
/// # Example
///
/// ```rust
/// use zeus_math::fast_sin;
///
/// assert!((fast_sin(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1.5e-3);
/// ```
#[inline]
pub fn fast_sin(radians: f32) -> f32 {
    let x = reduce_angle(radians);
    let sq = x * x;
    x * (SIN_C1 + sq * (SIN_C3 + sq * (SIN_C5 + sq * SIN_C7)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_inv_sqrt_sentinels() {
        assert_eq!(fast_inv_sqrt(-1.0), INV_SQRT_NEGATIVE);
        assert_eq!(fast_inv_sqrt(-1e-30), INV_SQRT_NEGATIVE);
        assert_eq!(fast_inv_sqrt(0.0), INV_SQRT_ZERO);
        assert_eq!(fast_inv_sqrt(-0.0), INV_SQRT_ZERO);
        assert_eq!(INV_SQRT_NEGATIVE, 1.0 / (0x7FFF_FFFF as f32) as f64);
        assert_eq!(INV_SQRT_ZERO, 1.0 / (0x7F80_0000 as f32) as f64);
    }

    #[test]
    fn test_inv_sqrt_values() {
        for backend in [Backend::Scalar, Backend::Simd] {
            for v in [0.25, 1.0, 2.0, 4.0, 9.0, 100.0, 1e-20, 1e20] {
                let expected = 1.0 / f64::sqrt(v);
                let got = fast_inv_sqrt_with(v, backend);
                assert!(((got - expected) / expected).abs() < 1e-12, "v={v} got={got}");
            }
        }
    }

    #[test]
    fn test_inv_sqrt_outside_f32_range() {
        // SIMD seed does not apply; falls back to the bit trick
        let v = 1e300;
        let got = fast_inv_sqrt_with(v, Backend::Simd);
        assert!(((got - 1e-150) / 1e-150).abs() < 1e-12);
    }

    #[test]
    fn test_inv_sqrt_nan() {
        assert!(fast_inv_sqrt(f64::NAN).is_nan());
    }

    #[test]
    fn test_fast_sqrt() {
        assert!((fast_sqrt(16.0) - 4.0).abs() < 1e-12);
        assert!((fast_sqrt(2.0) - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(fast_sqrt(0.0), INV_SQRT_ZERO);
        assert_eq!(fast_sqrt(-4.0), INV_SQRT_NEGATIVE);
    }

    #[test]
    fn test_arc_cos_exact_region() {
        assert_eq!(fast_arc_cos(1.0), 0.0);
        assert_eq!(fast_arc_cos(0.95), 0.95f32.acos());
        assert_eq!(fast_arc_cos(-0.925), (-0.925f32).acos());
        assert!((fast_arc_cos(-1.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_arc_cos_sign_inverted() {
        // Inside the polynomial region the result is -acos(v)
        for i in -90..=90 {
            let v = i as f32 / 100.0;
            let got = fast_arc_cos(v);
            assert!(got < 0.0);
            assert!((got + v.acos()).abs() < 5e-3, "v={v} got={got}");
        }
    }

    #[test]
    fn test_floor_power_of_two() {
        assert_eq!(floor_power_of_two(0), 0);
        assert_eq!(floor_power_of_two(1), 1);
        assert_eq!(floor_power_of_two(2), 2);
        assert_eq!(floor_power_of_two(3), 2);
        assert_eq!(floor_power_of_two(255), 128);
        assert_eq!(floor_power_of_two(256), 256);
        assert_eq!(floor_power_of_two(257), 256);
        assert_eq!(floor_power_of_two(i32::MAX), 1 << 30);
    }

    #[test]
    fn test_reduce_angle() {
        assert_eq!(reduce_angle(1.0), 1.0);
        assert_eq!(reduce_angle(PI), PI);
        assert_eq!(reduce_angle(-PI), -PI);
        assert!((reduce_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((reduce_angle(-TAU - 0.5) + 0.5).abs() < 1e-5);
        assert!((reduce_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        let r = reduce_angle(100.0);
        assert!(r.abs() <= PI);
        assert!((r.sin() - 100.0f32.sin()).abs() < 1e-4);
    }

    #[test]
    fn test_reduce_angle_huge_inputs() {
        for x in [1e8f32, 1e10, 2.7e10, 1e12, f32::MAX] {
            for v in [x, -x] {
                let r = reduce_angle(v);
                assert!(r.abs() <= PI, "x={v} reduced={r}");
                assert!(fast_sin(v).is_finite() && fast_sin(v).abs() <= 1.01, "sin x={v}");
                assert!(fast_cos(v).is_finite() && fast_cos(v).abs() <= 1.01, "cos x={v}");
            }
        }
    }

    #[test]
    fn test_fast_trig_huge_inputs_track_std() {
        for x in [1e8f32, 1e10, 1e12] {
            let exact = f64::from(x);
            assert!((f64::from(fast_sin(x)) - exact.sin()).abs() < 2e-3, "sin x={x}");
            assert!((f64::from(fast_cos(x)) - exact.cos()).abs() < 2e-3, "cos x={x}");
        }
    }

    #[test]
    fn test_reduce_angle_non_finite() {
        assert!(reduce_angle(f32::INFINITY).is_nan());
        assert!(reduce_angle(f32::NAN).is_nan());
    }

    #[test]
    fn test_arc_cos_odd_polynomial() {
        // asin(-v) = -asin(v), so the two halves sum to -π
        for i in 1..92 {
            let v = i as f32 / 100.0;
            assert!((fast_arc_cos(v) + fast_arc_cos(-v) + PI).abs() < 1e-6, "v={v}");
        }
    }

    #[test]
    fn test_fast_trig_accuracy() {
        for i in -1000..=1000 {
            let x = i as f32 / 1000.0 * PI;
            assert!((fast_cos(x) - x.cos()).abs() < 5e-4, "cos x={x}");
            assert!((fast_sin(x) - x.sin()).abs() < 1.5e-3, "sin x={x}");
        }
    }

    #[test]
    fn test_fast_trig_reduction_boundary() {
        let above = f32::from_bits(PI.to_bits() + 1);
        assert!((fast_cos(PI) - fast_cos(above)).abs() < 1e-5);
        assert!((fast_sin(PI) - fast_sin(above)).abs() < 1e-5);
        assert!((fast_cos(-PI) - fast_cos(-above)).abs() < 1e-5);
        assert!((fast_sin(-PI) - fast_sin(-above)).abs() < 1e-5);
    }

    #[test]
    fn test_fast_trig_large_angles() {
        for x in [4.0f32, 7.5, -9.0, 20.0, -50.0] {
            assert!((fast_cos(x) - x.cos()).abs() < 1e-3, "cos x={x}");
            assert!((fast_sin(x) - x.sin()).abs() < 2e-3, "sin x={x}");
        }
    }
}
