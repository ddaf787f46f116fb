//! # cct-temperature
//!
//! Correlated colour temperature (CCT) conversions.
//!
//! This crate converts between a blackbody temperature in kelvin and its
//! chromaticity in the CIE 1960 UCS `uv` plane:
//!
//! - [`cct_to_uv_planck1900`] - Temperature to `uv` via Planck's law
//! - [`uv_to_cct_planck1900`] - `uv` to temperature via 1-D minimisation
//! - [`Planck1900`] - Evaluator for caller-supplied colour matching functions
//!
//! Both directions accept arrays of any rank. Temperatures of shape `S` map to
//! `uv` of shape `S + [2]` and back.
//!
//! # Usage
//!
//! ```rust
//! use cct_temperature::{cct_to_uv_planck1900, uv_to_cct_planck1900};
//! use ndarray::array;
//!
//! let cct = array![[2500.0, 4000.0], [7000.0, 25000.0]];
//! let uv = cct_to_uv_planck1900(&cct).unwrap();
//! assert_eq!(uv.shape(), &[2, 2, 2]);
//!
//! let back = uv_to_cct_planck1900(&uv, None).unwrap();
//! assert_eq!(back.shape(), &[2, 2]);
//! assert!((back[[1, 1]] - 25000.0).abs() < 25000.0 * 1e-7);
//! ```
//!
//! # Dependencies
//!
//! - [`cct-core`] - Errors and batch dispatch
//! - [`cct-spectral`] - Colour matching functions, Planck's law, UCS
//! - [`cct-optim`] - Nelder-Mead and Brent minimisers
//! - [`ndarray`] - n-dimensional inputs and outputs
//! - [`tracing`] - Diagnostics
//!
//! ## Feature Flags
//!
//! - `parallel` - Evaluate batch elements with rayon (enabled by default)
//! - `serde` - Serialization for [`OptimisationSettings`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod planck1900;

pub use cct_core::{Error, Result};
pub use cct_optim::{Method, OptimisationSettings};
pub use planck1900::{
    cct_to_uv as cct_to_uv_planck1900, uv_to_cct as uv_to_cct_planck1900, Planck1900,
};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use cct_temperature::prelude::*;
/// ```
pub mod prelude {
    pub use crate::planck1900::{cct_to_uv_scalar, uv_to_cct_scalar, Planck1900};
    pub use crate::{cct_to_uv_planck1900, uv_to_cct_planck1900};
    pub use cct_core::{Error, Result};
    pub use cct_optim::{Method, OptimisationSettings};
}
