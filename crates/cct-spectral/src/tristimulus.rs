//! Blackbody tristimulus integration.
//!
//! Tristimulus values of a spectral distribution `S` under an equal-energy
//! illuminant are the sums
//!
//! ```text
//! X = k Σ S(λ) x̄(λ) Δλ,  Y = k Σ S(λ) ȳ(λ) Δλ,  Z = k Σ S(λ) z̄(λ) Δλ
//! k = 100 / Σ ȳ(λ) Δλ
//! ```
//!
//! [`BlackbodyIntegrator`] precomputes everything that does not depend on
//! temperature so that one evaluation is a single pass over the samples.

use crate::cmfs::Cmfs;
use crate::planck::{C1, C2};
use crate::shape::SpectralShape;

/// Nanometres to metres.
const NM_TO_M: f64 = 1e-9;

/// Integrates blackbody spectra against colour matching functions.
///
/// # Example
///
/// ```rust
/// use cct_spectral::{BlackbodyIntegrator, CIE_1931_2_DEGREE_STANDARD_OBSERVER};
///
/// let integrator = BlackbodyIntegrator::new(&CIE_1931_2_DEGREE_STANDARD_OBSERVER);
/// let [x, y, z] = integrator.xyz(6500.0);
/// assert!(x > 0.0 && y > 0.0 && z > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BlackbodyIntegrator {
    /// `c1 · λ⁻⁵` per sample
    c1_lambda5: Vec<f64>,
    /// `c2 / λ` per sample
    c2_lambda: Vec<f64>,
    /// `k · Δλ · [x̄, ȳ, z̄]` per sample
    weights: Vec<[f64; 3]>,
}

impl BlackbodyIntegrator {
    /// Precomputes the per-wavelength terms over every sample of `cmfs`.
    pub fn new(cmfs: &Cmfs) -> Self {
        Self::with_shape(cmfs, cmfs.shape())
    }

    /// Precomputes the per-wavelength terms over the samples of `cmfs` that
    /// fall within the bounds of `shape`.
    ///
    /// The sampling interval is always that of `cmfs`. A range that holds no
    /// sample yields an integrator whose chromaticities are NaN.
    pub fn with_shape(cmfs: &Cmfs, shape: SpectralShape) -> Self {
        let interval = cmfs.shape().interval();
        let samples = || cmfs.iter().filter(|(wavelength, _)| shape.contains(*wavelength));

        let y_sum: f64 = samples().map(|(_, [_, y, _])| y * interval).sum();
        let w = 100.0 / y_sum * interval;

        let mut c1_lambda5 = Vec::with_capacity(cmfs.len());
        let mut c2_lambda = Vec::with_capacity(cmfs.len());
        let mut weights = Vec::with_capacity(cmfs.len());
        for (wavelength, [x, y, z]) in samples() {
            let l = wavelength * NM_TO_M;
            c1_lambda5.push(C1 / l.powi(5));
            c2_lambda.push(C2 / l);
            weights.push([w * x, w * y, w * z]);
        }

        Self {
            c1_lambda5,
            c2_lambda,
            weights,
        }
    }

    /// Number of spectral samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if there are no spectral samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// CIE XYZ tristimulus values of a blackbody at `temperature` kelvin.
    ///
    /// Values are not normalised to `Y = 100`; only their ratios are
    /// meaningful for chromaticity.
    pub fn xyz(&self, temperature: f64) -> [f64; 3] {
        let mut xyz = [0.0; 3];
        for ((c1, c2), [wx, wy, wz]) in self
            .c1_lambda5
            .iter()
            .zip(&self.c2_lambda)
            .zip(&self.weights)
        {
            let m = c1 / (c2 / temperature).exp_m1();
            xyz[0] += m * wx;
            xyz[1] += m * wy;
            xyz[2] += m * wz;
        }
        xyz
    }
}

impl Default for BlackbodyIntegrator {
    /// CIE 1931 2 degree standard observer over [`SpectralShape::VISIBLE`].
    fn default() -> Self {
        Self::with_shape(
            &crate::cmfs::CIE_1931_2_DEGREE_STANDARD_OBSERVER,
            SpectralShape::VISIBLE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmfs::CIE_1931_2_DEGREE_STANDARD_OBSERVER;
    use crate::planck::planck_law;
    use approx::assert_relative_eq;

    #[test]
    fn test_equal_energy_luminance() {
        // A flat spectrum of 1 integrates to Y = 100
        let integrator = BlackbodyIntegrator::default();
        let y: f64 = integrator.weights.iter().map(|w| w[1]).sum();
        assert_relative_eq!(y, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_matches_planck_law() {
        let shape = SpectralShape::new(500.0, 600.0, 50.0).unwrap();
        let cmfs = Cmfs::new(
            "three lines",
            shape,
            vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        )
        .unwrap();
        let integrator = BlackbodyIntegrator::new(&cmfs);
        let [x, y, z] = integrator.xyz(3000.0);

        let k = 100.0 / 50.0;
        assert_relative_eq!(x, k * 50.0 * planck_law(500e-9, 3000.0), max_relative = 1e-12);
        assert_relative_eq!(y, k * 50.0 * planck_law(550e-9, 3000.0), max_relative = 1e-12);
        assert_relative_eq!(z, k * 50.0 * planck_law(600e-9, 3000.0), max_relative = 1e-12);
    }

    #[test]
    fn test_with_shape_trims_samples() {
        let full = BlackbodyIntegrator::new(&CIE_1931_2_DEGREE_STANDARD_OBSERVER);
        let visible = BlackbodyIntegrator::default();
        assert_eq!(full.len(), 471);
        assert_eq!(visible.len(), 421);

        // Renormalised over the shorter range
        let y: f64 = visible.weights.iter().map(|w| w[1]).sum();
        assert_relative_eq!(y, 100.0, max_relative = 1e-12);
        assert_eq!(visible.c2_lambda.last(), Some(&(C2 / (780.0 * NM_TO_M))));
    }

    #[test]
    fn test_with_shape_outside_table() {
        let shape = SpectralShape::new(900.0, 1000.0, 1.0).unwrap();
        let integrator = BlackbodyIntegrator::with_shape(&CIE_1931_2_DEGREE_STANDARD_OBSERVER, shape);
        assert!(integrator.is_empty());
        assert_eq!(integrator.xyz(5000.0), [0.0; 3]);
    }

    #[test]
    fn test_blue_shift_with_temperature() {
        let integrator = BlackbodyIntegrator::new(&CIE_1931_2_DEGREE_STANDARD_OBSERVER);
        let [x0, _, z0] = integrator.xyz(2000.0);
        let [x1, _, z1] = integrator.xyz(10000.0);
        assert!(z0 / x0 < z1 / x1);
    }

    #[test]
    fn test_degenerate_temperatures() {
        let integrator = BlackbodyIntegrator::default();
        assert_eq!(integrator.xyz(0.0), [0.0; 3]);
        assert!(integrator.xyz(f64::NAN).iter().all(|v| v.is_nan()));
        // Infinite exitance times zero z̄ above 650 nm
        assert!(integrator.xyz(f64::INFINITY)[2].is_nan());
    }
}
