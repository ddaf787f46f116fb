//! # cct-optim
//!
//! Derivative-free minimisation of scalar functions of one variable.
//!
//! - [`NelderMead`] - Downhill simplex (default)
//! - [`Brent`] - Bracketing plus parabolic interpolation
//! - [`OptimisationSettings`] - Optional user configuration, resolved into
//!   [`ResolvedSettings`]
//! - [`minimize`] - Dispatch on the configured [`Method`]
//!
//! # Usage
//!
//! ```rust
//! use cct_optim::{minimize, OptimisationSettings};
//!
//! let settings = OptimisationSettings::new().with_fatol(1e-12).resolve();
//! let min = minimize(|t| (t - 5500.0).powi(2), 6500.0, &settings);
//!
//! assert!(min.converged);
//! assert!((min.x - 5500.0).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`cct-core`] - Error types
//! - [`tracing`] - Non-convergence diagnostics
//! - [`serde`] - Settings (de)serialization (optional)
//!
//! # Used By
//!
//! - `cct-temperature` - Inverse CCT search
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for [`OptimisationSettings`]
//!   and [`Method`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod brent;
pub mod minimizer;
pub mod nelder_mead;
pub mod settings;

pub use brent::Brent;
pub use minimizer::{minimize, Minimizer, Minimum};
pub use nelder_mead::NelderMead;
pub use settings::{Method, OptimisationSettings, ResolvedSettings};
