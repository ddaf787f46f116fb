//! Brent's method for one-dimensional minimisation.
//!
//! The minimum is first bracketed by walking downhill from `{x0, 1.05·x0}`
//! with golden-ratio steps and parabolic extrapolation. Brent's search then
//! narrows the bracket using parabolic interpolation through the three best
//! points, falling back to golden-section steps when the parabola is not
//! trustworthy.
//!
//! Comparisons involving NaN are false, so a NaN cost is never accepted as an
//! improvement. The bracket and the search both have hard iteration caps.

use crate::minimizer::{Minimizer, Minimum};
use crate::settings::{ResolvedSettings, DEFAULT_BRENT_MAX_ITERATIONS, DEFAULT_XTOL};

/// Golden ratio used for bracket growth.
const GOLDEN: f64 = 1.618034;
/// Guard against a vanishing parabola denominator.
const VERY_SMALL: f64 = 1e-21;
/// Maximum parabolic step relative to the current bracket.
const GROW_LIMIT: f64 = 110.0;
/// Iteration cap of the bracketing phase.
const BRACKET_MAX_ITERATIONS: usize = 1000;
/// Golden-section fraction `(3 - √5) / 2`.
const CG: f64 = 0.3819660;
/// Absolute floor of the tolerance.
const MINTOL: f64 = 1e-11;

/// Brent minimiser.
///
/// # Example
///
/// ```rust
/// use cct_optim::{Brent, Minimizer};
///
/// let min = Brent::default().minimize(f64::cos, 3.0);
/// assert!(min.converged);
/// assert!((min.x - std::f64::consts::PI).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent {
    /// Relative tolerance on the minimiser.
    pub xtol: f64,
    /// Iteration cap of the search phase.
    pub max_iterations: usize,
    /// Cost function evaluation cap of the search phase.
    pub max_evaluations: usize,
}

impl Default for Brent {
    fn default() -> Self {
        Self {
            xtol: DEFAULT_XTOL,
            max_iterations: DEFAULT_BRENT_MAX_ITERATIONS,
            max_evaluations: usize::MAX,
        }
    }
}

impl From<&ResolvedSettings> for Brent {
    fn from(settings: &ResolvedSettings) -> Self {
        Self {
            xtol: settings.xtol,
            max_iterations: settings.max_iterations,
            max_evaluations: settings.max_evaluations,
        }
    }
}

/// Three points with `f(xb)` no greater than the outer costs, when found.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    xa: f64,
    xb: f64,
    xc: f64,
    fb: f64,
}

fn bracket<F>(f: &mut F, xa: f64, xb: f64, evaluations: &mut usize) -> Bracket
where
    F: FnMut(f64) -> f64,
{
    let (mut xa, mut xb) = (xa, xb);
    let (mut fa, mut fb) = (f(xa), f(xb));
    if fa < fb {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut fa, &mut fb);
    }
    let mut xc = xb + GOLDEN * (xb - xa);
    let mut fc = f(xc);
    *evaluations += 3;

    let mut iterations = 0;
    while fc < fb {
        let tmp1 = (xb - xa) * (fb - fc);
        let tmp2 = (xb - xc) * (fb - fa);
        let val = tmp2 - tmp1;
        let denom = if val.abs() < VERY_SMALL {
            2.0 * VERY_SMALL
        } else {
            2.0 * val
        };
        let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / denom;
        let wlim = xb + GROW_LIMIT * (xc - xb);

        if iterations >= BRACKET_MAX_ITERATIONS {
            break;
        }
        iterations += 1;

        let fw;
        if (w - xc) * (xb - w) > 0.0 {
            // Parabolic minimum between xb and xc
            let fw_inner = f(w);
            *evaluations += 1;
            if fw_inner < fc {
                xa = xb;
                xb = w;
                fb = fw_inner;
                break;
            } else if fw_inner > fb {
                xc = w;
                break;
            }
            w = xc + GOLDEN * (xc - xb);
            fw = f(w);
            *evaluations += 1;
        } else if (w - wlim) * (wlim - xc) >= 0.0 {
            w = wlim;
            fw = f(w);
            *evaluations += 1;
        } else if (w - wlim) * (xc - w) > 0.0 {
            let fw_outer = f(w);
            *evaluations += 1;
            if fw_outer < fc {
                let next = w + GOLDEN * (w - xc);
                xb = xc;
                xc = w;
                w = next;
                fb = fc;
                fc = fw_outer;
                fw = f(w);
                *evaluations += 1;
            } else {
                fw = fw_outer;
            }
        } else {
            w = xc + GOLDEN * (xc - xb);
            fw = f(w);
            *evaluations += 1;
        }

        xa = xb;
        xb = xc;
        xc = w;
        fa = fb;
        fb = fc;
        fc = fw;
    }

    Bracket { xa, xb, xc, fb }
}

impl Minimizer for Brent {
    fn minimize<F>(&self, mut f: F, x0: f64) -> Minimum
    where
        F: FnMut(f64) -> f64,
    {
        let mut evaluations = 0;
        let Bracket { xa, xb, xc, fb } = bracket(&mut f, x0, 1.05 * x0, &mut evaluations);

        let (mut a, mut b) = if xa < xc { (xa, xc) } else { (xc, xa) };
        let (mut x, mut w, mut v) = (xb, xb, xb);
        let (mut fx, mut fw, mut fv) = (fb, fb, fb);
        let mut deltax: f64 = 0.0;
        let mut rat: f64 = 0.0;
        let mut iterations = 0;

        while iterations < self.max_iterations && evaluations < self.max_evaluations {
            let tol1 = self.xtol * x.abs() + MINTOL;
            let tol2 = 2.0 * tol1;
            let xmid = 0.5 * (a + b);
            if (x - xmid).abs() < tol2 - 0.5 * (b - a) {
                break;
            }

            if deltax.abs() <= tol1 {
                // Golden-section step into the larger segment
                deltax = if x >= xmid { a - x } else { b - x };
                rat = CG * deltax;
            } else {
                // Parabolic step
                let tmp1 = (x - w) * (fx - fv);
                let mut tmp2 = (x - v) * (fx - fw);
                let mut p = (x - v) * tmp2 - (x - w) * tmp1;
                tmp2 = 2.0 * (tmp2 - tmp1);
                if tmp2 > 0.0 {
                    p = -p;
                }
                tmp2 = tmp2.abs();
                let dx_temp = deltax;
                deltax = rat;

                if p > tmp2 * (a - x) && p < tmp2 * (b - x) && p.abs() < (0.5 * tmp2 * dx_temp).abs()
                {
                    rat = p / tmp2;
                    let u = x + rat;
                    if (u - a) < tol2 || (b - u) < tol2 {
                        rat = if xmid - x >= 0.0 { tol1 } else { -tol1 };
                    }
                } else {
                    deltax = if x >= xmid { a - x } else { b - x };
                    rat = CG * deltax;
                }
            }

            let u = if rat.abs() < tol1 {
                if rat >= 0.0 { x + tol1 } else { x - tol1 }
            } else {
                x + rat
            };
            let fu = f(u);
            evaluations += 1;

            if fu > fx {
                if u < x {
                    a = u;
                } else {
                    b = u;
                }
                if fu <= fw || w == x {
                    v = w;
                    w = u;
                    fv = fw;
                    fw = fu;
                } else if fu <= fv || v == x || v == w {
                    v = u;
                    fv = fu;
                }
            } else {
                if u >= x {
                    a = x;
                } else {
                    b = x;
                }
                v = w;
                w = x;
                x = u;
                fv = fw;
                fw = fx;
                fx = fu;
            }

            iterations += 1;
        }

        Minimum {
            x,
            fun: fx,
            iterations,
            evaluations,
            converged: iterations < self.max_iterations
                && evaluations < self.max_evaluations
                && !x.is_nan()
                && !fx.is_nan(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_parabola() {
        let min = Brent::default().minimize(|x| (x - 3000.0).powi(2), 6500.0);
        assert!(min.converged);
        assert_relative_eq!(min.x, 3000.0, max_relative = 1e-8);
    }

    #[test]
    fn test_flat_quartic() {
        let min = Brent::default().minimize(|x| (x - 2.0).powi(4) + 1.0, 1.0);
        assert!(min.converged);
        assert_abs_diff_eq!(min.x, 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(min.fun, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bracket_encloses_minimum() {
        let mut evaluations = 0;
        let mut f = |x: f64| (x - 3000.0).powi(2);
        let br = bracket(&mut f, 6500.0, 6825.0, &mut evaluations);
        let (lo, hi) = if br.xa < br.xc { (br.xa, br.xc) } else { (br.xc, br.xa) };
        assert!(lo <= 3000.0 && 3000.0 <= hi);
        assert!(br.fb <= f(br.xa) && br.fb <= f(br.xc));
    }

    #[test]
    fn test_nan_objective() {
        let min = Brent::default().minimize(|_| f64::NAN, 6500.0);
        assert!(!min.converged);
        assert!(min.fun.is_nan());
        assert!(min.iterations <= DEFAULT_BRENT_MAX_ITERATIONS);
    }

    #[test]
    fn test_iteration_cap() {
        let brent = Brent {
            max_iterations: 2,
            ..Brent::default()
        };
        let min = brent.minimize(f64::cos, 3.0);
        assert!(!min.converged);
        assert_eq!(min.iterations, 2);
    }
}
