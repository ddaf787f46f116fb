//! Spectral sampling description.

use cct_core::{Error, Result};

/// Regular wavelength sampling in nanometres.
///
/// A shape covers `start`, `start + interval`, ... up to and including `end`.
///
/// # Example
///
/// ```rust
/// use cct_spectral::SpectralShape;
///
/// let shape = SpectralShape::new(360.0, 830.0, 1.0).unwrap();
/// assert_eq!(shape.len(), 471);
/// assert_eq!(shape.wavelengths().nth(195), Some(555.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralShape {
    start: f64,
    end: f64,
    interval: f64,
}

impl SpectralShape {
    /// Sampling of the CIE 1931 2 degree standard observer table.
    pub const CIE_1931: Self = Self {
        start: 360.0,
        end: 830.0,
        interval: 1.0,
    };

    /// Default integration range for blackbody chromaticities.
    pub const VISIBLE: Self = Self {
        start: 360.0,
        end: 780.0,
        interval: 1.0,
    };

    /// Creates a validated spectral shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpectralShape`] if any value is not finite,
    /// `interval` is not strictly positive or `start > end`.
    pub fn new(start: f64, end: f64, interval: f64) -> Result<Self> {
        if !(start.is_finite() && end.is_finite() && interval.is_finite()) {
            return Err(Error::invalid_spectral_shape(
                start,
                end,
                interval,
                "bounds and interval must be finite",
            ));
        }
        if interval <= 0.0 {
            return Err(Error::invalid_spectral_shape(
                start,
                end,
                interval,
                "interval must be positive",
            ));
        }
        if start > end {
            return Err(Error::invalid_spectral_shape(
                start,
                end,
                interval,
                "start after end",
            ));
        }
        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// First wavelength in nanometres.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last wavelength in nanometres.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Sampling interval in nanometres.
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Number of samples covered by this shape.
    #[inline]
    pub fn len(&self) -> usize {
        ((self.end - self.start) / self.interval).round() as usize + 1
    }

    /// Always `false`: a valid shape holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `wavelength` lies within `start..=end`.
    #[inline]
    pub fn contains(&self, wavelength: f64) -> bool {
        (self.start..=self.end).contains(&wavelength)
    }

    /// Iterates over the sample wavelengths in nanometres.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.interval)
    }
}

impl Default for SpectralShape {
    fn default() -> Self {
        Self::CIE_1931
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cie_1931_shape() {
        let shape = SpectralShape::default();
        assert_eq!(shape.len(), 471);
        assert_eq!(shape.wavelengths().next(), Some(360.0));
        assert_eq!(shape.wavelengths().last(), Some(830.0));
    }

    #[test]
    fn test_visible_shape() {
        let shape = SpectralShape::VISIBLE;
        assert_eq!(shape.len(), 421);
        assert!(shape.contains(360.0));
        assert!(shape.contains(780.0));
        assert!(!shape.contains(781.0));
        assert!(!shape.contains(f64::NAN));
    }

    #[test]
    fn test_coarse_shape() {
        let shape = SpectralShape::new(380.0, 780.0, 5.0).unwrap();
        assert_eq!(shape.len(), 81);
        assert_eq!(shape.wavelengths().nth(4), Some(400.0));
    }

    #[test]
    fn test_single_sample() {
        let shape = SpectralShape::new(555.0, 555.0, 1.0).unwrap();
        assert_eq!(shape.len(), 1);
        assert!(!shape.is_empty());
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(SpectralShape::new(830.0, 360.0, 1.0).is_err());
        assert!(SpectralShape::new(360.0, 830.0, 0.0).is_err());
        assert!(SpectralShape::new(360.0, 830.0, -1.0).is_err());
        assert!(SpectralShape::new(f64::NAN, 830.0, 1.0).is_err());
        assert!(SpectralShape::new(360.0, f64::INFINITY, 1.0).is_err());
    }
}
