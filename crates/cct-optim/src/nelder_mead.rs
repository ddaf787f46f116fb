//! Nelder-Mead downhill simplex in one dimension.
//!
//! The simplex is the pair `{x0, 1.05·x0}` (or `{0, 0.00025}` when `x0 = 0`).
//! Each iteration reflects the worst vertex through the best one and then
//! expands, contracts or shrinks depending on the reflected cost:
//!
//! | Step | Coefficient |
//! |------|-------------|
//! | Reflection | 1 |
//! | Expansion | 2 |
//! | Contraction | 0.5 |
//! | Shrink | 0.5 |
//!
//! The search stops when both vertices lie within `xatol` of each other and
//! their costs within `fatol`, or when the iteration or evaluation cap is hit.
//!
//! NaN costs sort after every number, so a simplex vertex with a NaN cost is
//! always the one replaced. A cost function returning NaN everywhere runs to
//! the evaluation cap and never panics.

use std::cmp::Ordering;

use crate::minimizer::{Minimizer, Minimum};
use crate::settings::{
    ResolvedSettings, DEFAULT_FATOL, DEFAULT_NELDER_MEAD_MAX_ITERATIONS, DEFAULT_XATOL,
};

const RHO: f64 = 1.0;
const CHI: f64 = 2.0;
const PSI: f64 = 0.5;
const SIGMA: f64 = 0.5;

/// Relative offset of the second initial vertex.
const NONZDELT: f64 = 0.05;
/// Second initial vertex when starting from zero.
const ZDELT: f64 = 0.00025;

/// Nelder-Mead simplex minimiser.
///
/// # Example
///
/// ```rust
/// use cct_optim::{Minimizer, NelderMead};
///
/// let min = NelderMead::default().minimize(|x| (x - 3.0).powi(2), 10.0);
/// assert!(min.converged);
/// assert!((min.x - 3.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMead {
    /// Absolute tolerance on the simplex width.
    pub xatol: f64,
    /// Absolute tolerance on the cost spread.
    pub fatol: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// Cost function evaluation cap.
    pub max_evaluations: usize,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            xatol: DEFAULT_XATOL,
            fatol: DEFAULT_FATOL,
            max_iterations: DEFAULT_NELDER_MEAD_MAX_ITERATIONS,
            max_evaluations: DEFAULT_NELDER_MEAD_MAX_ITERATIONS,
        }
    }
}

impl From<&ResolvedSettings> for NelderMead {
    fn from(settings: &ResolvedSettings) -> Self {
        Self {
            xatol: settings.xatol,
            fatol: settings.fatol,
            max_iterations: settings.max_iterations,
            max_evaluations: settings.max_evaluations,
        }
    }
}

/// Orders costs ascending with NaN after every number.
fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Puts the best vertex first. Ties keep their order.
#[inline]
fn sort_simplex(sim: &mut [f64; 2], fsim: &mut [f64; 2]) {
    if nan_last(fsim[1], fsim[0]) == Ordering::Less {
        sim.swap(0, 1);
        fsim.swap(0, 1);
    }
}

impl Minimizer for NelderMead {
    fn minimize<F>(&self, mut f: F, x0: f64) -> Minimum
    where
        F: FnMut(f64) -> f64,
    {
        let x1 = if x0 != 0.0 { (1.0 + NONZDELT) * x0 } else { ZDELT };
        let mut sim = [x0, x1];
        let mut fsim = [f(x0), f(x1)];
        let mut evaluations = 2;
        let mut iterations = 1;
        let mut converged = false;

        sort_simplex(&mut sim, &mut fsim);

        while evaluations < self.max_evaluations && iterations < self.max_iterations {
            if (sim[1] - sim[0]).abs() <= self.xatol && (fsim[0] - fsim[1]).abs() <= self.fatol {
                converged = true;
                break;
            }

            // With a single parameter the centroid is the best vertex.
            let xbar = sim[0];
            let xr = (1.0 + RHO) * xbar - RHO * sim[1];
            let fxr = f(xr);
            evaluations += 1;

            if fxr < fsim[0] {
                let xe = (1.0 + RHO * CHI) * xbar - RHO * CHI * sim[1];
                let fxe = f(xe);
                evaluations += 1;

                if fxe < fxr {
                    sim[1] = xe;
                    fsim[1] = fxe;
                } else {
                    sim[1] = xr;
                    fsim[1] = fxr;
                }
            } else {
                let mut shrink = false;

                if fxr < fsim[1] {
                    // Outside contraction
                    let xc = (1.0 + PSI * RHO) * xbar - PSI * RHO * sim[1];
                    let fxc = f(xc);
                    evaluations += 1;

                    if fxc <= fxr {
                        sim[1] = xc;
                        fsim[1] = fxc;
                    } else {
                        shrink = true;
                    }
                } else {
                    // Inside contraction
                    let xcc = (1.0 - PSI) * xbar + PSI * sim[1];
                    let fxcc = f(xcc);
                    evaluations += 1;

                    if fxcc < fsim[1] {
                        sim[1] = xcc;
                        fsim[1] = fxcc;
                    } else {
                        shrink = true;
                    }
                }

                if shrink {
                    sim[1] = sim[0] + SIGMA * (sim[1] - sim[0]);
                    fsim[1] = f(sim[1]);
                    evaluations += 1;
                }
            }

            iterations += 1;
            sort_simplex(&mut sim, &mut fsim);
        }

        Minimum {
            x: sim[0],
            fun: fsim[0],
            iterations,
            evaluations,
            converged,
        }
    }
}
