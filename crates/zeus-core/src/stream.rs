//! Sequential float reader for binary asset data.
//!
//! Legacy asset files store vectors and quaternions as packed `f32`
//! components, big-endian by default. [`StreamReader`] wraps any
//! [`std::io::Read`] and hands out one component at a time, which is all the
//! math types need to construct themselves.
//!
//! # Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use zeus_core::StreamReader;
//!
//! let bytes = 1.5f32.to_be_bytes();
//! let mut reader = StreamReader::new(Cursor::new(bytes));
//! assert_eq!(reader.read_f32().unwrap(), 1.5);
//! ```

use std::io::Read;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use tracing::trace;

use crate::Result;

/// Byte order of the values in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Most significant byte first (legacy asset default).
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

/// Reads `f32` components sequentially from a byte source.
#[derive(Debug)]
pub struct StreamReader<R> {
    inner: R,
    endian: Endian,
    position: u64,
}

impl<R: Read> StreamReader<R> {
    /// Creates a big-endian reader.
    #[inline]
    pub fn new(inner: R) -> Self {
        Self::with_endian(inner, Endian::Big)
    }

    /// Creates a reader with an explicit byte order.
    #[inline]
    pub fn with_endian(inner: R, endian: Endian) -> Self {
        Self {
            inner,
            endian,
            position: 0,
        }
    }

    /// Byte order used by this reader.
    #[inline]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads the next `f32`.
    ///
    /// Returns [`crate::Error::Io`] if the source fails or ends early.
    pub fn read_f32(&mut self) -> Result<f32> {
        let value = match self.endian {
            Endian::Big => self.inner.read_f32::<BigEndian>()?,
            Endian::Little => self.inner.read_f32::<LittleEndian>()?,
        };
        self.position += 4;
        trace!(position = self.position, value, "read_f32");
        Ok(value)
    }

    /// Reads `N` consecutive `f32` values.
    pub fn read_array<const N: usize>(&mut self) -> Result<[f32; N]> {
        let mut out = [0.0; N];
        for v in &mut out {
            *v = self.read_f32()?;
        }
        Ok(out)
    }

    /// Consumes the reader and returns the underlying source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }
}
