//! # cct-core
//!
//! Core types for correlated colour temperature computation.
//!
//! This crate provides the pieces shared by every other crate of the
//! workspace:
//!
//! - [`Error`], [`Result`] - Error type for shape and spectral data violations
//! - [`broadcast`] - Elementwise dispatch of scalar kernels over n-d arrays
//!
//! ## Crate Structure
//!
//! ```text
//! cct-core (this crate)
//!    ^
//!    |
//!    +-- cct-spectral (CMFs, Planck's law, UCS)
//!    +-- cct-optim (1-D minimisers)
//!    +-- cct-temperature (Planck 1900 CCT <-> uv)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Evaluate batch elements with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod broadcast;
pub mod error;

pub use broadcast::{map_pairs_to_scalars, map_scalars_to_pairs};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use cct_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::broadcast::{map_pairs_to_scalars, map_scalars_to_pairs};
    pub use crate::error::{Error, Result};
}
