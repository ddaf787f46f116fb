//! Correlated colour temperature from the Planckian locus, Planck (1900).
//!
//! The forward direction places a blackbody of temperature `T` on the
//! CIE 1960 UCS diagram: Planck's law is integrated against the colour
//! matching functions of an observer to get CIE XYZ, which is projected to
//! `uv`. The inverse direction has no closed form, so `T` is recovered by
//! minimising the squared `uv` distance to the target, starting from
//! [`SEED_CCT`].
//!
//! Invalid temperatures are not rejected. `T = 0`, `T = ±∞` and NaN produce
//! NaN chromaticities, and NaN or infinite `uv` targets produce whatever the
//! minimiser ends on (usually NaN). Batches never abort because of a single
//! degenerate element.
//!
//! # Example
//!
//! ```rust
//! use cct_temperature::planck1900::{cct_to_uv_scalar, uv_to_cct_scalar};
//!
//! let uv = cct_to_uv_scalar(4000.0);
//! let cct = uv_to_cct_scalar(uv, None);
//!
//! assert!((cct - 4000.0).abs() < 4000.0 * 1e-7);
//! ```

use std::sync::OnceLock;

use cct_core::broadcast::{map_pairs_to_scalars, map_scalars_to_pairs};
use cct_core::Result;
use cct_optim::{minimize, Minimum, OptimisationSettings, ResolvedSettings};
use cct_spectral::{
    xyz_to_uv, BlackbodyIntegrator, Cmfs, SpectralShape, CIE_1931_2_DEGREE_STANDARD_OBSERVER,
};
use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use tracing::trace;

/// Starting temperature of the inverse search, in kelvin.
pub const SEED_CCT: f64 = 6500.0;

/// Planckian locus evaluator for one set of colour matching functions.
///
/// Construction precomputes the per-wavelength terms; evaluation is a single
/// pass over the spectral samples. Use [`Planck1900::standard`] for the
/// CIE 1931 2 degree standard observer over [`SpectralShape::VISIBLE`].
#[derive(Debug, Clone)]
pub struct Planck1900 {
    observer: String,
    integrator: BlackbodyIntegrator,
}

impl Planck1900 {
    /// Builds an evaluator over every sample of `cmfs`.
    pub fn new(cmfs: &Cmfs) -> Self {
        Self::with_shape(cmfs, cmfs.shape())
    }

    /// Builds an evaluator over the samples of `cmfs` within `shape`.
    pub fn with_shape(cmfs: &Cmfs, shape: SpectralShape) -> Self {
        Self {
            observer: cmfs.name().to_string(),
            integrator: BlackbodyIntegrator::with_shape(cmfs, shape),
        }
    }

    /// Shared evaluator over the CIE 1931 2 degree standard observer,
    /// integrated from 360 nm to 780 nm.
    pub fn standard() -> &'static Planck1900 {
        static INSTANCE: OnceLock<Planck1900> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Planck1900::with_shape(&CIE_1931_2_DEGREE_STANDARD_OBSERVER, SpectralShape::VISIBLE)
        })
    }

    /// Name of the observer this evaluator was built for.
    pub fn observer(&self) -> &str {
        &self.observer
    }

    /// Chromaticity `[u, v]` of a blackbody at `cct` kelvin.
    #[inline]
    pub fn uv(&self, cct: f64) -> [f64; 2] {
        xyz_to_uv(self.integrator.xyz(cct))
    }

    /// Squared `uv` distance between the locus at `cct` and `target`.
    #[inline]
    pub fn distance(&self, cct: f64, target: [f64; 2]) -> f64 {
        let [u, v] = self.uv(cct);
        (u - target[0]).powi(2) + (v - target[1]).powi(2)
    }

    /// Cost function of the inverse search for a fixed `target`.
    ///
    /// The returned closure is NaN wherever the locus is NaN.
    pub fn objective(&self, target: [f64; 2]) -> impl Fn(f64) -> f64 + '_ {
        move |cct| self.distance(cct, target)
    }

    /// Minimises the inverse objective for a single `uv` pair.
    pub fn solve(&self, uv: [f64; 2], settings: &ResolvedSettings) -> Minimum {
        minimize(self.objective(uv), SEED_CCT, settings)
    }

    /// Converts temperatures of any shape `S` to `uv` of shape `S + [2]`.
    ///
    /// # Errors
    ///
    /// Returns [`cct_core::Error::Shape`] if the output shape overflows.
    pub fn cct_to_uv<S, D>(&self, cct: &ArrayBase<S, D>) -> Result<ArrayD<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        trace!(shape = ?cct.shape(), count = cct.len(), "planck1900::cct_to_uv");
        map_scalars_to_pairs(cct, |t| self.uv(t))
    }

    /// Converts `uv` of shape `S + [2]` to temperatures of shape `S`.
    ///
    /// `None` settings and `OptimisationSettings::default()` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`cct_core::Error::TrailingAxis`] if the last axis of `uv` is
    /// not of length 2.
    pub fn uv_to_cct<S, D>(
        &self,
        uv: &ArrayBase<S, D>,
        settings: Option<&OptimisationSettings>,
    ) -> Result<ArrayD<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let resolved = settings.copied().unwrap_or_default().resolve();
        trace!(
            shape = ?uv.shape(),
            method = %resolved.method,
            "planck1900::uv_to_cct"
        );
        map_pairs_to_scalars(uv, |pair| self.solve(pair, &resolved).x)
    }
}

impl Default for Planck1900 {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Converts temperatures to CIE 1960 UCS `uv` with the standard observer.
///
/// # Errors
///
/// Returns [`cct_core::Error::Shape`] if the output shape overflows.
///
/// # Example
///
/// ```rust
/// use cct_temperature::planck1900::cct_to_uv;
/// use ndarray::array;
///
/// let uv = cct_to_uv(&array![[4000.0, 7000.0, 25000.0]])?;
/// assert_eq!(uv.shape(), &[1, 3, 2]);
/// # Ok::<(), cct_temperature::Error>(())
/// ```
pub fn cct_to_uv<S, D>(cct: &ArrayBase<S, D>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Planck1900::standard().cct_to_uv(cct)
}

/// Converts one temperature to `[u, v]` with the standard observer.
#[inline]
pub fn cct_to_uv_scalar(cct: f64) -> [f64; 2] {
    Planck1900::standard().uv(cct)
}

/// Converts CIE 1960 UCS `uv` to temperatures with the standard observer.
///
/// # Errors
///
/// Returns [`cct_core::Error::TrailingAxis`] if the last axis of `uv` is not
/// of length 2.
///
/// # Example
///
/// ```rust
/// use cct_optim::{Method, OptimisationSettings};
/// use cct_temperature::planck1900::uv_to_cct;
/// use ndarray::array;
///
/// let settings = OptimisationSettings::from(Method::NelderMead);
/// let cct = uv_to_cct(&array![0.198126929048352, 0.307025980523306], Some(&settings)).unwrap();
///
/// assert_eq!(cct.ndim(), 0);
/// assert!((cct.sum() - 7000.0).abs() < 7000.0 * 1e-7);
/// ```
pub fn uv_to_cct<S, D>(
    uv: &ArrayBase<S, D>,
    settings: Option<&OptimisationSettings>,
) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Planck1900::standard().uv_to_cct(uv, settings)
}

/// Converts one `[u, v]` pair to a temperature with the standard observer.
pub fn uv_to_cct_scalar(uv: [f64; 2], settings: Option<&OptimisationSettings>) -> f64 {
    let resolved = settings.copied().unwrap_or_default().resolve();
    Planck1900::standard().solve(uv, &resolved).x
}
