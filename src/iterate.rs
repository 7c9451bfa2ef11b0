//! Fixed-point iteration stopped by the closeness test.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{is_close::IsClose, tolerance::Tolerance};

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.806;

pub const DEFAULT_MAX_ITER: usize = 1000;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConvergenceError {
    #[error("no convergence after {iterations} iterations, last value {last}")]
    NotConverged { iterations: usize, last: f64 },
    #[error("iterate became NaN after {iterations} iterations")]
    NonFinite { iterations: usize },
}

/// Iterate `x <- f(x)` from `x0` until two successive values are close.
///
/// Returns the last computed value. Gives up after `max_iter` evaluations of
/// `f`, or as soon as an iterate is NaN since it can never be close again.
pub fn fixed_point<F>(
    mut f: F,
    x0: f64,
    tol: &Tolerance,
    max_iter: usize,
) -> Result<f64, ConvergenceError>
where
    F: FnMut(f64) -> f64,
{
    let mut current = x0;
    for iterations in 1..=max_iter {
        let next = f(current);
        trace!(iterations, current, next, "fixed point step");
        if next.is_nan() {
            warn!(iterations, current, "fixed point iterate is NaN");
            return Err(ConvergenceError::NonFinite { iterations });
        }
        if next.is_close_within(current, tol) {
            debug!(iterations, value = next, "fixed point converged");
            return Ok(next);
        }
        current = next;
    }
    warn!(max_iter, last = current, "fixed point did not converge");
    Err(ConvergenceError::NotConverged {
        iterations: max_iter,
        last: current,
    })
}

/// Wave number `k` of a linear gravity wave of angular frequency `omega` in
/// water of depth `depth`.
///
/// Solves `omega² = g k tanh(k depth)` by fixed-point iteration on
/// `k = omega² / (g tanh(k depth))`.
pub fn wave_number(omega: f64, depth: f64, tol: &Tolerance) -> Result<f64, ConvergenceError> {
    let omega2 = omega * omega;
    fixed_point(
        |k| omega2 / (STANDARD_GRAVITY * (k * depth).tanh()),
        10.0,
        tol,
        DEFAULT_MAX_ITER,
    )
}
