//! Minimiser trait, result type and method dispatch.

use tracing::debug;

use crate::brent::Brent;
use crate::nelder_mead::NelderMead;
use crate::settings::{Method, ResolvedSettings};

/// Outcome of a one-dimensional minimisation.
///
/// A search that stops on an iteration or evaluation cap still reports the
/// best point it found, with `converged` set to `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Best parameter found.
    pub x: f64,
    /// Cost at `x`.
    pub fun: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Cost function evaluations performed.
    pub evaluations: usize,
    /// Whether the tolerance criterion was met.
    pub converged: bool,
}

/// A derivative-free scalar minimiser.
pub trait Minimizer {
    /// Minimises `f` starting from `x0`.
    fn minimize<F>(&self, f: F, x0: f64) -> Minimum
    where
        F: FnMut(f64) -> f64;
}

/// Minimises `f` from `x0` with the method and tolerances in `settings`.
///
/// Never fails: non-convergence is logged at debug level and the best point
/// found is returned.
///
/// # Example
///
/// ```rust
/// use cct_optim::{minimize, Method, OptimisationSettings};
///
/// let settings = OptimisationSettings::from(Method::Brent).resolve();
/// let min = minimize(|x| (x - 2.0).powi(2), 1.0, &settings);
/// assert!((min.x - 2.0).abs() < 1e-6);
/// ```
pub fn minimize<F>(f: F, x0: f64, settings: &ResolvedSettings) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let min = match settings.method {
        Method::NelderMead => NelderMead::from(settings).minimize(f, x0),
        Method::Brent => Brent::from(settings).minimize(f, x0),
    };

    if !min.converged {
        debug!(
            method = %settings.method,
            x0,
            x = min.x,
            fun = min.fun,
            iterations = min.iterations,
            evaluations = min.evaluations,
            "minimisation stopped without converging"
        );
    }

    min
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::OptimisationSettings;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dispatch_nelder_mead() {
        let settings = OptimisationSettings::default().resolve();
        let min = minimize(|x| (x - 3000.0).powi(2), 6500.0, &settings);
        let direct = NelderMead::default().minimize(|x| (x - 3000.0).powi(2), 6500.0);
        assert_eq!(min, direct);
    }

    #[test]
    fn test_dispatch_brent() {
        let settings = OptimisationSettings::from(Method::Brent).resolve();
        let min = minimize(f64::cos, 3.0, &settings);
        assert!(min.converged);
        assert_abs_diff_eq!(min.x, std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluation_cap() {
        let settings = OptimisationSettings::new()
            .with_max_evaluations(10)
            .resolve();
        let min = minimize(|x| (x - 3000.0).powi(2), 6500.0, &settings);
        assert!(!min.converged);
        assert!(min.evaluations >= 10 && min.evaluations <= 12);
    }
}
