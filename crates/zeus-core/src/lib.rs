//! # zeus-core
//!
//! Core types shared by the zeus-rs crates.
//!
//! - [`Error`], [`Result`] - Error handling for the fallible edges of the library
//! - [`StreamReader`], [`Endian`] - Sequential `f32` reader for binary asset data
//!
//! ## Crate Structure
//!
//! ```text
//! zeus-core (this crate)
//!    ^
//!    |
//!    +-- zeus-math (vectors, quaternions, matrices, frustum culling)
//!    +-- zeus-bench (benchmarks)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod stream;

pub use error::*;
pub use stream::*;
