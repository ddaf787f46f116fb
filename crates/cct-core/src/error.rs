//! Error types for cct-core operations.
//!
//! Numeric degeneracy (division by zero, overflow, NaN operands) is never an
//! error in this workspace: it propagates as IEEE-754 NaN/Inf through every
//! conversion. The [`Error`] enum is reserved for contract violations that
//! cannot be expressed as a value:
//!
//! - Array shape violations (a chromaticity array without a trailing pair axis)
//! - Spectral data that does not describe a valid sampling
//!
//! # Usage
//!
//! ```rust
//! use cct_core::{Error, Result};
//!
//! fn check_pairs(shape: &[usize]) -> Result<()> {
//!     match shape.last() {
//!         Some(&2) => Ok(()),
//!         got => Err(Error::trailing_axis(2, got.copied(), shape)),
//!     }
//! }
//!
//! assert!(check_pairs(&[3, 2]).is_ok());
//! assert!(check_pairs(&[3, 4]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::broadcast`] - Trailing axis validation
//! - `cct-spectral` - Spectral shape and colour matching function validation
//! - `cct-temperature` - Public conversion functions

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colour temperature computations.
///
/// # Categories
///
/// - **Shape errors**: [`TrailingAxis`](Error::TrailingAxis), [`Shape`](Error::Shape)
/// - **Spectral data errors**: [`InvalidSpectralShape`](Error::InvalidSpectralShape),
///   [`LengthMismatch`](Error::LengthMismatch)
#[derive(Debug, Error)]
pub enum Error {
    /// The trailing axis of an input array has the wrong length.
    ///
    /// Chromaticity arrays must end with an axis of length 2 holding the
    /// `(u, v)` pair. A rank-0 array has no trailing axis at all, reported
    /// as `got: None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cct_core::Error;
    ///
    /// let err = Error::trailing_axis(2, Some(3), &[4, 3]);
    /// assert!(err.to_string().contains("[4, 3]"));
    /// ```
    #[error("expected trailing axis of length {expected}, got {} (shape {shape:?})", fmt_axis(.got))]
    TrailingAxis {
        /// Required trailing axis length
        expected: usize,
        /// Actual trailing axis length, `None` for rank-0 input
        got: Option<usize>,
        /// Full shape of the offending array
        shape: Vec<usize>,
    },

    /// A spectral sampling is not usable.
    ///
    /// Returned when the interval is not strictly positive, the start lies
    /// after the end, or any bound is not finite.
    #[error("invalid spectral shape ({start}, {end}, {interval}): {reason}")]
    InvalidSpectralShape {
        /// First wavelength in nanometres
        start: f64,
        /// Last wavelength in nanometres
        end: f64,
        /// Sampling interval in nanometres
        interval: f64,
        /// Why the shape was rejected
        reason: String,
    },

    /// Tabulated data does not match the sampling it claims to cover.
    #[error("length mismatch: expected {expected} samples, got {got}")]
    LengthMismatch {
        /// Number of samples the spectral shape implies
        expected: usize,
        /// Number of samples provided
        got: usize,
    },

    /// Array construction or reshaping failed.
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Generic error with custom message.
    ///
    /// Prefer specific error variants when possible.
    #[error("{0}")]
    Other(String),
}

fn fmt_axis(got: &Option<usize>) -> String {
    match got {
        Some(n) => n.to_string(),
        None => "no axis".to_string(),
    }
}

impl Error {
    /// Creates an [`Error::TrailingAxis`] error.
    #[inline]
    pub fn trailing_axis(expected: usize, got: Option<usize>, shape: &[usize]) -> Self {
        Self::TrailingAxis {
            expected,
            got,
            shape: shape.to_vec(),
        }
    }

    /// Creates an [`Error::InvalidSpectralShape`] error.
    #[inline]
    pub fn invalid_spectral_shape(
        start: f64,
        end: f64,
        interval: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSpectralShape {
            start,
            end,
            interval,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this error describes an array shape violation.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::TrailingAxis { .. } | Self::Shape(_))
    }

    /// Returns `true` if this error describes invalid spectral data.
    #[inline]
    pub fn is_spectral_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpectralShape { .. } | Self::LengthMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_axis() {
        let err = Error::trailing_axis(2, Some(3), &[5, 3]);
        let msg = err.to_string();
        assert!(msg.contains("length 2"));
        assert!(msg.contains("got 3"));
        assert!(msg.contains("[5, 3]"));
        assert!(err.is_shape_error());
        assert!(!err.is_spectral_error());
    }

    #[test]
    fn test_trailing_axis_rank_zero() {
        let err = Error::trailing_axis(2, None, &[]);
        assert!(err.to_string().contains("no axis"));
    }

    #[test]
    fn test_spectral_errors() {
        let err = Error::invalid_spectral_shape(830.0, 360.0, 1.0, "start after end");
        assert!(err.to_string().contains("start after end"));
        assert!(err.is_spectral_error());

        let err = Error::length_mismatch(471, 470);
        let msg = err.to_string();
        assert!(msg.contains("471"));
        assert!(msg.contains("470"));
        assert!(err.is_spectral_error());
    }

    #[test]
    fn test_shape_error_conversion() {
        let shape_err = ndarray::Array::from_shape_vec(ndarray::IxDyn(&[2, 2]), vec![1.0; 3])
            .unwrap_err();
        let err: Error = shape_err.into();
        assert!(err.is_shape_error());
    }
}
