//! Colour matching functions.
//!
//! A [`Cmfs`] is a named table of `[x̄, ȳ, z̄]` triplets sampled on a
//! [`SpectralShape`]. The built-in [`CIE_1931_2_DEGREE_STANDARD_OBSERVER`]
//! borrows static data; tables supplied at runtime are owned.

use std::borrow::Cow;

use cct_core::{Error, Result};

use crate::cie1931::CIE_1931_2_DEGREE_DATA;
use crate::shape::SpectralShape;

/// CIE 1931 2 degree standard observer, 360 nm to 830 nm at 1 nm.
pub static CIE_1931_2_DEGREE_STANDARD_OBSERVER: Cmfs = Cmfs {
    name: Cow::Borrowed("CIE 1931 2 Degree Standard Observer"),
    shape: SpectralShape::CIE_1931,
    data: Cow::Borrowed(&CIE_1931_2_DEGREE_DATA),
};

/// Named colour matching functions on a regular wavelength grid.
///
/// # Example
///
/// ```rust
/// use cct_spectral::{Cmfs, SpectralShape};
///
/// let shape = SpectralShape::new(500.0, 510.0, 5.0).unwrap();
/// let cmfs = Cmfs::new(
///     "coarse",
///     shape,
///     vec![[0.0049, 0.323, 0.272], [0.0093, 0.4073, 0.2123], [0.0633, 0.503, 0.1582]],
/// )
/// .unwrap();
///
/// assert_eq!(cmfs.len(), 3);
/// assert_eq!(cmfs.at(505.0), Some([0.0093, 0.4073, 0.2123]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cmfs {
    name: Cow<'static, str>,
    shape: SpectralShape,
    data: Cow<'static, [[f64; 3]]>,
}

impl Cmfs {
    /// Creates colour matching functions from owned data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `data` does not hold exactly one
    /// row per wavelength of `shape`.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        shape: SpectralShape,
        data: Vec<[f64; 3]>,
    ) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(Error::length_mismatch(shape.len(), data.len()));
        }
        Ok(Self {
            name: name.into(),
            shape,
            data: Cow::Owned(data),
        })
    }

    /// Display name of the observer.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wavelength sampling of the table.
    #[inline]
    pub fn shape(&self) -> SpectralShape {
        self.shape
    }

    /// Rows of `[x̄, ȳ, z̄]` in wavelength order.
    #[inline]
    pub fn data(&self) -> &[[f64; 3]] {
        &self.data
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over `(wavelength_nm, [x̄, ȳ, z̄])` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, [f64; 3])> + '_ {
        self.shape.wavelengths().zip(self.data.iter().copied())
    }

    /// Row at an exact sample wavelength, `None` between samples or out of range.
    pub fn at(&self, wavelength: f64) -> Option<[f64; 3]> {
        let offset = (wavelength - self.shape.start()) / self.shape.interval();
        if offset < 0.0 || offset.fract() != 0.0 {
            return None;
        }
        self.data.get(offset as usize).copied()
    }
}

impl Default for Cmfs {
    fn default() -> Self {
        CIE_1931_2_DEGREE_STANDARD_OBSERVER.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_observer_integrity() {
        let cmfs = &CIE_1931_2_DEGREE_STANDARD_OBSERVER;
        assert_eq!(cmfs.len(), 471);
        assert_eq!(cmfs.len(), cmfs.shape().len());
        assert_eq!(cmfs.at(380.0), Some([0.001368, 0.000039, 0.006450001]));
        assert_eq!(cmfs.at(450.0), Some([0.3362, 0.038, 1.77211]));
        assert_eq!(cmfs.at(600.0), Some([1.0622, 0.631, 0.0008]));
        assert_eq!(cmfs.at(830.0), Some([0.000001251141, 0.00000045181, 0.0]));
    }

    #[test]
    fn test_standard_observer_follows_nodes() {
        // Short-wave 1 nm rows of ȳ and z̄ are a six-point interpolation of
        // the 5 nm nodes, weights in 1/750.
        const WEIGHTS: [[f64; 6]; 4] = [
            [8.0, -66.0, 688.0, 142.0, -24.0, 2.0],
            [9.0, -78.0, 534.0, 336.0, -57.0, 6.0],
            [6.0, -57.0, 336.0, 534.0, -78.0, 9.0],
            [2.0, -24.0, 142.0, 688.0, -66.0, 8.0],
        ];
        let cmfs = &CIE_1931_2_DEGREE_STANDARD_OBSERVER;

        for node in (370..540).step_by(5) {
            for (offset, weights) in (1..5).zip(&WEIGHTS) {
                let row = cmfs.at((node + offset) as f64).unwrap();
                for channel in 1..3 {
                    let expected = weights
                        .iter()
                        .zip(-2..4)
                        .map(|(w, d)| w * cmfs.at((node + 5 * d) as f64).unwrap()[channel])
                        .sum::<f64>()
                        / 750.0;
                    assert_relative_eq!(row[channel], expected, max_relative = 2e-6);
                }
            }
        }
    }

    #[test]
    fn test_standard_observer_luminance_peak() {
        let (peak, _) = CIE_1931_2_DEGREE_STANDARD_OBSERVER
            .iter()
            .max_by(|a, b| a.1[1].total_cmp(&b.1[1]))
            .unwrap();
        assert_eq!(peak, 555.0);
        assert_eq!(CIE_1931_2_DEGREE_STANDARD_OBSERVER.at(555.0).unwrap()[1], 1.0);
    }

    #[test]
    fn test_standard_observer_non_negative() {
        assert!(CIE_1931_2_DEGREE_STANDARD_OBSERVER
            .data()
            .iter()
            .flatten()
            .all(|v| *v >= 0.0));
    }

    #[test]
    fn test_at_out_of_range() {
        let cmfs = Cmfs::default();
        assert_eq!(cmfs.at(359.0), None);
        assert_eq!(cmfs.at(831.0), None);
        assert_eq!(cmfs.at(555.5), None);
    }

    #[test]
    fn test_length_mismatch() {
        let shape = SpectralShape::new(500.0, 510.0, 5.0).unwrap();
        let err = Cmfs::new("short", shape, vec![[0.0; 3]; 2]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Cmfs::default().name(), "CIE 1931 2 Degree Standard Observer");
    }
}
