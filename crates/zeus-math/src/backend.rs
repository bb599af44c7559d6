//! Kernel backend selection.
//!
//! Several kernels in this crate exist twice: a vectorized path and a scalar
//! fallback with the same contract. [`Backend`] names the two paths and
//! resolves which one runs.
//!
//! # Resolution
//!
//! [`Backend::active`] resolves once per process:
//!
//! 1. `ZEUS_BACKEND` environment variable (`auto`, `scalar`, `simd`)
//! 2. Otherwise the best path for the build target ([`Backend::detect`])
//!
//! A forced path that is not available on this build falls back to
//! detection and logs a warning.
//!
//! # Example
//!
//! ```rust
//! use zeus_math::Backend;
//!
//! let backend = Backend::active();
//! assert_ne!(backend, Backend::Auto);
//! assert!(backend.is_available());
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, warn};
use zeus_core::Error;

/// Environment variable that forces a kernel backend.
pub const BACKEND_ENV: &str = "ZEUS_BACKEND";

/// Kernel implementation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Pick the best available path.
    #[default]
    Auto,
    /// Plain scalar code, available everywhere.
    Scalar,
    /// Four-wide vector code (SSE2 on x86_64, NEON on aarch64).
    Simd,
}

impl Backend {
    /// Returns true if this path can run on the current build.
    pub fn is_available(&self) -> bool {
        match self {
            Self::Auto | Self::Scalar => true,
            Self::Simd => simd_supported(),
        }
    }

    /// Human-readable name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Scalar => "scalar",
            Self::Simd => "simd",
        }
    }

    /// Best available concrete path for this build.
    pub fn detect() -> Self {
        if simd_supported() {
            Self::Simd
        } else {
            Self::Scalar
        }
    }

    /// Turns `Auto` (or an unavailable request) into a concrete path.
    ///
    /// Runs on every `*_with` kernel call, so a fallback is only logged at
    /// debug level here; [`Backend::active`] warns about it once.
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto => Self::detect(),
            other if other.is_available() => other,
            other => {
                debug!(requested = other.name(), "Backend unavailable on this build, falling back");
                Self::detect()
            }
        }
    }

    /// Process-wide backend, resolved on first use.
    pub fn active() -> Self {
        static ACTIVE: OnceLock<Backend> = OnceLock::new();
        *ACTIVE.get_or_init(|| {
            let requested = match backend_override() {
                Some(name) => name.parse::<Backend>().unwrap_or_else(|e: Error| {
                    warn!(error = %e, "Ignoring {}", BACKEND_ENV);
                    Self::Auto
                }),
                None => Self::Auto,
            };
            if !requested.is_available() {
                warn!(requested = requested.name(), "Backend unavailable on this build, falling back");
            }
            let backend = requested.resolve();
            debug!(requested = requested.name(), backend = backend.name(), "Selected kernel backend");
            backend
        })
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "scalar" => Ok(Self::Scalar),
            "simd" => Ok(Self::Simd),
            _ => Err(Error::unknown_backend(s)),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend override from the environment, if set.
pub fn backend_override() -> Option<String> {
    env::var(BACKEND_ENV).ok().filter(|v| !v.trim().is_empty())
}

#[inline]
const fn simd_supported() -> bool {
    cfg!(all(
        feature = "simd",
        any(target_arch = "x86_64", target_arch = "aarch64")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("auto".parse::<Backend>().unwrap(), Backend::Auto);
        assert_eq!("Scalar".parse::<Backend>().unwrap(), Backend::Scalar);
        assert_eq!(" SIMD ".parse::<Backend>().unwrap(), Backend::Simd);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "avx512".parse::<Backend>().unwrap_err();
        assert!(err.to_string().contains("avx512"));
    }

    #[test]
    fn test_name_round_trip() {
        for b in [Backend::Auto, Backend::Scalar, Backend::Simd] {
            assert_eq!(b.name().parse::<Backend>().unwrap(), b);
            assert_eq!(b.to_string(), b.name());
        }
    }

    #[test]
    fn test_resolve_is_concrete() {
        assert_ne!(Backend::Auto.resolve(), Backend::Auto);
        assert_eq!(Backend::Scalar.resolve(), Backend::Scalar);
        assert!(Backend::Simd.resolve().is_available());
    }

    #[test]
    fn test_repeated_resolve_is_stable() {
        let first = Backend::Simd.resolve();
        for _ in 0..1000 {
            assert_eq!(Backend::Simd.resolve(), first);
        }
        if !Backend::Simd.is_available() {
            assert_eq!(first, Backend::Scalar);
        }
    }

    #[test]
    fn test_active_is_stable() {
        let a = Backend::active();
        assert_eq!(a, Backend::active());
        assert!(a.is_available());
    }

    #[test]
    fn test_scalar_always_available() {
        assert!(Backend::Scalar.is_available());
        assert!(Backend::Auto.is_available());
    }
}
