//! Error types for the Anarion DWMAC glue layer
//!
//! Errors are split by origin:
//! - [`GlueError`]: failures detected by this glue layer during probe
//! - [`Error::Platform`]: failures reported by the host stmmac framework,
//!   passed through without interpretation
//!
//! Every error is fatal to device attachment. There is no retry path.

use crate::driver::config::PhyInterface;

// =============================================================================
// Glue Errors
// =============================================================================

/// Probe-time errors raised by the glue layer itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlueError {
    /// The control block (second memory resource) could not be mapped
    ResourceUnavailable,
    /// Device-managed storage for the glue state could not be allocated
    OutOfMemory,
    /// The requested PHY interface mode is not in the RGMII family
    UnsupportedConfiguration(PhyInterface),
}

impl core::fmt::Display for GlueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GlueError::UnsupportedConfiguration(mode) => {
                write!(f, "{} ({mode})", self.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl GlueError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            GlueError::ResourceUnavailable => "cannot get reset region",
            GlueError::OutOfMemory => "out of memory",
            GlueError::UnsupportedConfiguration(_) => "unsupported phy-mode",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// Error returned from [`probe`](crate::probe), generic over the host
/// framework's own error type `E`.
///
/// ```ignore
/// match anarion_dwmac::probe(&mut pdev) {
///     Err(Error::Glue(GlueError::UnsupportedConfiguration(mode))) => { /* ... */ }
///     Err(Error::Platform(e)) => return Err(e),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Error raised by the glue layer
    Glue(GlueError),
    /// Error returned verbatim from a host framework call
    Platform(E),
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Glue(e) => write!(f, "anarion: {e}"),
            Error::Platform(e) => write!(f, "stmmac: {e}"),
        }
    }
}

impl<E> From<GlueError> for Error<E> {
    fn from(e: GlueError) -> Self {
        Error::Glue(e)
    }
}

impl<E> Error<E> {
    /// Returns the glue error, if this error originated in the glue layer
    pub fn glue(&self) -> Option<GlueError> {
        match self {
            Error::Glue(e) => Some(*e),
            Error::Platform(_) => None,
        }
    }

    /// Unwraps a host framework error, if that is where this error came from
    pub fn into_platform(self) -> Option<E> {
        match self {
            Error::Platform(e) => Some(e),
            Error::Glue(_) => None,
        }
    }
}

/// Result type alias for glue operations
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Result type alias for operations that can only fail inside the glue layer
pub type GlueResult<T> = core::result::Result<T, GlueError>;

// =============================================================================
// Unit Tests
// =============================================================================
