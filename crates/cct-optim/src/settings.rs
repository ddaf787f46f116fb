//! Optimisation configuration.
//!
//! [`OptimisationSettings`] is what callers pass around: every field is
//! optional and unset fields fall back to library defaults when the settings
//! are [resolved](OptimisationSettings::resolve). An absent configuration and
//! `OptimisationSettings::default()` therefore behave identically.
//!
//! # Defaults
//!
//! | Field | Nelder-Mead | Brent |
//! |-------|-------------|-------|
//! | `xatol` | 1e-4 | - |
//! | `fatol` | 1e-10 | - |
//! | `xtol` | - | 1.48e-8 |
//! | `max_iterations` | 200 | 500 |
//! | `max_evaluations` | 200 | unbounded |

use std::fmt;
use std::str::FromStr;

use cct_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default absolute parameter tolerance of the simplex search.
pub const DEFAULT_XATOL: f64 = 1e-4;

/// Default absolute cost tolerance of the simplex search.
pub const DEFAULT_FATOL: f64 = 1e-10;

/// Default relative parameter tolerance of Brent's method.
pub const DEFAULT_XTOL: f64 = 1.48e-8;

/// Default iteration and evaluation cap of the simplex search.
pub const DEFAULT_NELDER_MEAD_MAX_ITERATIONS: usize = 200;

/// Default iteration cap of Brent's method.
pub const DEFAULT_BRENT_MAX_ITERATIONS: usize = 500;

/// Minimisation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Nelder-Mead downhill simplex.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Nelder-Mead", alias = "nelder-mead"))]
    NelderMead,
    /// Brent's parabolic interpolation with golden-section fallback.
    #[cfg_attr(feature = "serde", serde(rename = "Brent", alias = "brent"))]
    Brent,
}

impl Method {
    /// Canonical name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NelderMead => "Nelder-Mead",
            Self::Brent => "Brent",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a method name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nelder-mead" | "neldermead" => Ok(Self::NelderMead),
            "brent" => Ok(Self::Brent),
            _ => Err(Error::other(format!("unknown optimisation method: {s}"))),
        }
    }
}

/// User-facing optimisation settings with optional fields.
///
/// # Example
///
/// ```rust
/// use cct_optim::{Method, OptimisationSettings};
///
/// let settings = OptimisationSettings::new()
///     .with_method(Method::Brent)
///     .with_xtol(1e-10);
///
/// let resolved = settings.resolve();
/// assert_eq!(resolved.method, Method::Brent);
/// assert_eq!(resolved.max_iterations, 500);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct OptimisationSettings {
    /// Minimisation method.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub method: Option<Method>,
    /// Absolute parameter tolerance (Nelder-Mead).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub xatol: Option<f64>,
    /// Absolute cost tolerance (Nelder-Mead).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fatol: Option<f64>,
    /// Relative parameter tolerance (Brent).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub xtol: Option<f64>,
    /// Iteration cap.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_iterations: Option<usize>,
    /// Cost function evaluation cap (Nelder-Mead).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_evaluations: Option<usize>,
}

impl OptimisationSettings {
    /// Creates settings with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimisation method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the absolute parameter tolerance.
    pub fn with_xatol(mut self, xatol: f64) -> Self {
        self.xatol = Some(xatol);
        self
    }

    /// Sets the absolute cost tolerance.
    pub fn with_fatol(mut self, fatol: f64) -> Self {
        self.fatol = Some(fatol);
        self
    }

    /// Sets the relative parameter tolerance.
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = Some(xtol);
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the evaluation cap.
    pub fn with_max_evaluations(mut self, max_evaluations: usize) -> Self {
        self.max_evaluations = Some(max_evaluations);
        self
    }

    /// Merges these settings over the defaults of the selected method.
    pub fn resolve(&self) -> ResolvedSettings {
        let method = self.method.unwrap_or_default();
        let defaults = ResolvedSettings::for_method(method);
        ResolvedSettings {
            method,
            xatol: self.xatol.unwrap_or(defaults.xatol),
            fatol: self.fatol.unwrap_or(defaults.fatol),
            xtol: self.xtol.unwrap_or(defaults.xtol),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            max_evaluations: self.max_evaluations.unwrap_or(defaults.max_evaluations),
        }
    }
}

impl From<Method> for OptimisationSettings {
    fn from(method: Method) -> Self {
        Self::new().with_method(method)
    }
}

/// Fully specified optimisation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSettings {
    /// Minimisation method.
    pub method: Method,
    /// Absolute parameter tolerance (Nelder-Mead).
    pub xatol: f64,
    /// Absolute cost tolerance (Nelder-Mead).
    pub fatol: f64,
    /// Relative parameter tolerance (Brent).
    pub xtol: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Cost function evaluation cap.
    pub max_evaluations: usize,
}

impl ResolvedSettings {
    /// Library defaults for `method`.
    pub fn for_method(method: Method) -> Self {
        let (max_iterations, max_evaluations) = match method {
            Method::NelderMead => (
                DEFAULT_NELDER_MEAD_MAX_ITERATIONS,
                DEFAULT_NELDER_MEAD_MAX_ITERATIONS,
            ),
            Method::Brent => (DEFAULT_BRENT_MAX_ITERATIONS, usize::MAX),
        };
        Self {
            method,
            xatol: DEFAULT_XATOL,
            fatol: DEFAULT_FATOL,
            xtol: DEFAULT_XTOL,
            max_iterations,
            max_evaluations,
        }
    }
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Self::for_method(Method::default())
    }
}

impl From<&OptimisationSettings> for ResolvedSettings {
    fn from(settings: &OptimisationSettings) -> Self {
        settings.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let resolved = OptimisationSettings::default().resolve();
        assert_eq!(resolved, ResolvedSettings::default());
        assert_eq!(resolved.method, Method::NelderMead);
        assert_eq!(resolved.xatol, 1e-4);
        assert_eq!(resolved.fatol, 1e-10);
        assert_eq!(resolved.max_iterations, 200);
        assert_eq!(resolved.max_evaluations, 200);
    }

    #[test]
    fn test_partial_override() {
        let resolved = OptimisationSettings::new().with_fatol(1e-12).resolve();
        assert_eq!(resolved.fatol, 1e-12);
        assert_eq!(resolved.xatol, DEFAULT_XATOL);
    }

    #[test]
    fn test_brent_defaults() {
        let resolved = OptimisationSettings::from(Method::Brent).resolve();
        assert_eq!(resolved.xtol, 1.48e-8);
        assert_eq!(resolved.max_iterations, 500);
    }

    #[test]
    fn test_method_names() {
        assert_eq!("Nelder-Mead".parse::<Method>().unwrap(), Method::NelderMead);
        assert_eq!("nelder-mead".parse::<Method>().unwrap(), Method::NelderMead);
        assert_eq!("BRENT".parse::<Method>().unwrap(), Method::Brent);
        assert!("powell".parse::<Method>().is_err());
        assert_eq!(Method::NelderMead.to_string(), "Nelder-Mead");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_settings() {
        let settings: OptimisationSettings =
            serde_json::from_str(r#"{"method": "Brent", "max_iterations": 50}"#).unwrap();
        assert_eq!(settings.method, Some(Method::Brent));
        assert_eq!(settings.max_iterations, Some(50));
        assert_eq!(settings.xtol, None);

        let settings: OptimisationSettings =
            serde_json::from_str(r#"{"method": "Nelder-Mead", "fatol": 1e-12}"#).unwrap();
        assert_eq!(settings.method, Some(Method::NelderMead));
        assert_eq!(settings.fatol, Some(1e-12));

        let empty: OptimisationSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, OptimisationSettings::default());

        let json = serde_json::to_string(&OptimisationSettings::from(Method::Brent)).unwrap();
        assert_eq!(json, r#"{"method":"Brent"}"#);
    }
}
