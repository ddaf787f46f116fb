//! # cct-spectral
//!
//! Spectral colorimetry needed to place a blackbody on a chromaticity diagram.
//!
//! - [`SpectralShape`] - Regular wavelength sampling
//! - [`Cmfs`] - Colour matching functions, with the built-in
//!   [`CIE_1931_2_DEGREE_STANDARD_OBSERVER`]
//! - [`planck_law`] - Blackbody spectral exitance
//! - [`BlackbodyIntegrator`] - Blackbody tristimulus values for a given observer,
//!   by default over [`SpectralShape::VISIBLE`]
//! - [`xyz_to_ucs`], [`ucs_to_uv`], [`xyz_to_uv`] - CIE 1960 UCS conversions
//!
//! # Usage
//!
//! ```rust
//! use cct_spectral::{BlackbodyIntegrator, xyz_to_uv};
//!
//! let integrator = BlackbodyIntegrator::default();
//! let [u, v] = xyz_to_uv(integrator.xyz(4000.0));
//!
//! assert!((u - 0.225109670227493).abs() < 1.5e-7);
//! assert!((v - 0.334387366663923).abs() < 1.5e-7);
//! ```
//!
//! # Dependencies
//!
//! - [`cct-core`] - Error types
//!
//! # Used By
//!
//! - `cct-temperature` - Planck 1900 locus evaluation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie1931;
pub mod cmfs;
pub mod planck;
pub mod shape;
pub mod tristimulus;
pub mod ucs;

pub use cmfs::{Cmfs, CIE_1931_2_DEGREE_STANDARD_OBSERVER};
pub use planck::{planck_law, C1, C2};
pub use shape::SpectralShape;
pub use tristimulus::BlackbodyIntegrator;
pub use ucs::{ucs_to_uv, xyz_to_ucs, xyz_to_uv};
