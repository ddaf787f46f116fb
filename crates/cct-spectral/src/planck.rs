//! Planck's law of blackbody radiation.
//!
//! Spectral radiant exitance of a blackbody at wavelength `λ` (metres) and
//! temperature `T` (kelvin), in a medium of refractive index 1:
//!
//! ```text
//! M(λ, T) = c1 · λ⁻⁵ / (exp(c2 / (λ·T)) − 1)
//! ```
//!
//! The radiation constants are the rounded values colorimetric tables are
//! computed with, not the exact CODATA products. `exp_m1` keeps precision
//! for large `λ·T`. No input is rejected: `T = 0` yields `0`, `T = ±∞`
//! yields `±∞`, and NaN propagates.

/// First radiation constant `2πhc²` in W·m².
pub const C1: f64 = 3.741771e-16;

/// Second radiation constant `hc/k` in m·K, as fixed by ITS-90.
pub const C2: f64 = 1.4388e-2;

/// Spectral radiant exitance in W/m³.
///
/// # Arguments
///
/// * `wavelength` - Wavelength in metres
/// * `temperature` - Temperature in kelvin
///
/// # Example
///
/// ```rust
/// use cct_spectral::planck_law;
///
/// let m = planck_law(500e-9, 5000.0);
/// assert!((m / 3.8032323e13 - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn planck_law(wavelength: f64, temperature: f64) -> f64 {
    C1 / (wavelength.powi(5) * (C2 / (wavelength * temperature)).exp_m1())
}
