//! Error types for zeus-rs operations.
//!
//! The math primitives themselves are total: degenerate inputs produce
//! documented fallback values instead of errors. Only the edges of the
//! library can fail:
//!
//! - Reading values from a binary stream ([`crate::StreamReader`])
//! - Parsing configuration such as a kernel backend name
//!
//! # Usage
//!
//! ```rust
//! use zeus_core::{Error, Result};
//!
//! fn parse_lanes(name: &str) -> Result<u32> {
//!     match name {
//!         "scalar" => Ok(1),
//!         "simd" => Ok(4),
//!         other => Err(Error::unknown_backend(other)),
//!     }
//! }
//!
//! assert!(parse_lanes("avx9000").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::StreamReader`] - Truncated or unreadable input
//! - `zeus-math` - Backend parsing, stream construction of vectors and quaternions

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the boundaries of zeus-rs.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading from a stream.
    ///
    /// A stream that ends before all components of a value were read
    /// surfaces here as [`std::io::ErrorKind::UnexpectedEof`].
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A kernel backend name could not be parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeus_core::Error;
    ///
    /// let err = Error::unknown_backend("avx9000");
    /// assert!(err.to_string().contains("avx9000"));
    /// ```
    #[error("unknown backend '{0}' (expected auto, scalar or simd)")]
    UnknownBackend(String),
}

impl Error {
    /// Creates an [`Error::UnknownBackend`] error.
    #[inline]
    pub fn unknown_backend(name: impl Into<String>) -> Self {
        Self::UnknownBackend(name.into())
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns `true` if the stream ended before a value was complete.
    #[inline]
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_backend() {
        let err = Error::unknown_backend("mmx");
        let msg = err.to_string();
        assert!(msg.contains("mmx"));
        assert!(msg.contains("scalar"));
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = io_err.into();
        assert!(err.is_io_error());
        assert!(err.is_unexpected_eof());
        assert!(err.to_string().contains("short read"));
    }

    #[test]
    fn test_other_io_kind_is_not_eof() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(err.is_io_error());
        assert!(!err.is_unexpected_eof());
    }
}
