//! Brent's method root-finding solver.

use super::error::RootError;
use tracing::trace;

/// Relative tolerance added to the absolute one, a few ulps of the iterate.
const RELATIVE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Brent's method root finder.
///
/// Combines bisection, secant and inverse quadratic interpolation. Each step
/// keeps a bracket `[b, c]` around the root and falls back to bisection
/// whenever an interpolated step would not shrink it fast enough, so
/// convergence is guaranteed for any continuous function with a valid bracket.
///
/// Convergence is declared on the abscissa: once the bracket half-width is
/// below `(tolerance + 4ε·|x|) / 2`, or `f(x)` is exactly zero.
///
/// # Example
///
/// ```
/// use blackscholes_rs::pricing::BrentSolver;
///
/// let solver = BrentSolver::new(1e-12, 100);
/// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentSolver {
    /// Absolute tolerance on the root's abscissa.
    tolerance: f64,
    /// Maximum number of function evaluations after the two endpoints.
    max_iterations: u32,
}

impl Default for BrentSolver {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 100,
        }
    }
}

impl BrentSolver {
    /// Creates a solver with the given abscissa tolerance and iteration limit.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Returns the abscissa tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration limit.
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Finds a root of `f` in the bracket `[a, b]`.
    ///
    /// # Errors
    /// - `RootError::NoBracket` if `f(a)` and `f(b)` have the same sign or
    ///   either is NaN
    /// - `RootError::MaxIterationsExceeded` if the iteration limit is reached
    pub fn find_root<F>(&self, f: F, a: f64, b: f64) -> Result<f64, RootError>
    where
        F: Fn(f64) -> f64,
    {
        self.find_root_with_iterations(f, a, b).map(|(root, _)| root)
    }

    /// Like [`BrentSolver::find_root`], also returning the number of iterations used.
    ///
    /// # Errors
    /// Same as [`BrentSolver::find_root`].
    pub fn find_root_with_iterations<F>(&self, f: F, a: f64, b: f64) -> Result<(f64, u32), RootError>
    where
        F: Fn(f64) -> f64,
    {
        let mut x_pre = a;
        let mut x_cur = b;
        let mut f_pre = f(x_pre);
        let mut f_cur = f(x_cur);

        // Negated comparison so a NaN endpoint also counts as no bracket.
        if !(f_pre * f_cur <= 0.0) {
            return Err(RootError::NoBracket { a, b });
        }
        if f_pre == 0.0 {
            return Ok((x_pre, 0));
        }
        if f_cur == 0.0 {
            return Ok((x_cur, 0));
        }

        // Contrapoint: f(x_blk) has the opposite sign of f(x_cur).
        let mut x_blk = 0.0;
        let mut f_blk = 0.0;
        // Previous and current step sizes.
        let mut s_pre = 0.0;
        let mut s_cur = 0.0;

        for iteration in 1..=self.max_iterations {
            if f_pre != 0.0 && f_cur != 0.0 && (f_pre < 0.0) != (f_cur < 0.0) {
                x_blk = x_pre;
                f_blk = f_pre;
                s_cur = x_cur - x_pre;
                s_pre = s_cur;
            }
            if f_blk.abs() < f_cur.abs() {
                x_pre = x_cur;
                x_cur = x_blk;
                x_blk = x_pre;

                f_pre = f_cur;
                f_cur = f_blk;
                f_blk = f_pre;
            }

            let delta = (self.tolerance + RELATIVE_TOLERANCE * x_cur.abs()) / 2.0;
            let s_bis = (x_blk - x_cur) / 2.0;
            if f_cur == 0.0 || s_bis.abs() < delta {
                trace!("brent converged to {} after {} iterations", x_cur, iteration);
                return Ok((x_cur, iteration));
            }

            if s_pre.abs() > delta && f_cur.abs() < f_pre.abs() {
                let s_try = if x_pre == x_blk {
                    // secant
                    -f_cur * (x_cur - x_pre) / (f_cur - f_pre)
                } else {
                    // inverse quadratic interpolation
                    let d_pre = (f_pre - f_cur) / (x_pre - x_cur);
                    let d_blk = (f_blk - f_cur) / (x_blk - x_cur);
                    -f_cur * (f_blk * d_blk - f_pre * d_pre) / (d_blk * d_pre * (f_blk - f_pre))
                };

                if 2.0 * s_try.abs() < s_pre.abs().min(3.0 * s_bis.abs() - delta) {
                    s_pre = s_cur;
                    s_cur = s_try;
                } else {
                    s_pre = s_bis;
                    s_cur = s_bis;
                }
            } else {
                s_pre = s_bis;
                s_cur = s_bis;
            }

            x_pre = x_cur;
            f_pre = f_cur;
            if s_cur.abs() > delta {
                x_cur += s_cur;
            } else {
                x_cur += if s_bis > 0.0 { delta } else { -delta };
            }
            f_cur = f(x_cur);
        }

        Err(RootError::MaxIterationsExceeded {
            iterations: self.max_iterations,
        })
    }
}
