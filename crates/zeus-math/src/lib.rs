//! # zeus-math
//!
//! 3D math primitives for real-time rendering and simulation.
//!
//! - [`Vec3`] - 3-component vectors
//! - [`Quat`], [`AxisAngle`] - rotations, interpolation (lerp, nlerp, slerp)
//! - [`Mat3`], [`Mat4`] - matrices with dual-path transpose kernels
//! - Fast approximations ([`fast_inv_sqrt`], [`fast_sin`], [`fast_cos`], ...)
//! - Curves ([`catmull_rom`], [`bezier_point`])
//! - [`Frustum`] culling of [`AABox`], [`Sphere`] and points
//!
//! # Design
//!
//! Matrices are **column-major** and use **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Quaternions and matrix columns are 16-byte aligned so kernels can load
//! them straight into vector registers. Kernels with a vectorized path pick
//! it through [`Backend`], which can be forced with the `ZEUS_BACKEND`
//! environment variable.
//!
//! # Usage
//!
//! ```rust
//! use zeus_math::{Mat3, Quat, Vec3};
//!
//! let q = Quat::from_axis_angle(Vec3::Y, 0.5);
//! let v = Vec3::new(1.0, 0.0, 0.0);
//!
//! let by_quat = Quat::rotate(q, v);
//! let by_matrix = Mat3::from_quat(q) * v;
//! assert!((by_quat - by_matrix).length() < 1e-6);
//! ```
//!
//! # Features
//!
//! - `simd` (default) - SSE/NEON transpose and reciprocal square root paths
//! - `serde` - `Serialize`/`Deserialize` for all value types
//!
//! # Dependencies
//!
//! - [`glam`] - interop conversions
//! - [`wide`] - portable SIMD arithmetic
//! - [`rayon`] - parallel batch culling
//! - `zeus-core` - errors and stream reading

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod axis_angle;
mod backend;
mod fast;
mod frustum;
mod interp;
mod mat3;
mod mat4;
mod plane;
mod quat;
mod vec3;
mod volume;
pub mod simd;
pub mod transpose;

pub use axis_angle::*;
pub use backend::*;
pub use fast::*;
pub use frustum::*;
pub use interp::*;
pub use mat3::*;
pub use mat4::*;
pub use plane::*;
pub use quat::*;
pub use vec3::*;
pub use volume::*;

pub use zeus_core::{Endian, Error, Result, StreamReader};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Mat4 as GlamMat4, Quat as GlamQuat, Vec3 as GlamVec3};
}
