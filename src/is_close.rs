use crate::tolerance::{Tolerance, ToleranceError};

/// Determine whether `a` and `b` are close in value.
///
/// `rel_tol` is the allowed difference relative to the magnitude of either
/// value, `abs_tol` the minimum allowed difference, useful when comparing
/// against zero. Pass [`Tolerance::DEFAULT_REL_TOL`] and
/// [`Tolerance::DEFAULT_ABS_TOL`] for the usual defaults, or use
/// [`IsClose::is_close`].
///
/// Infinities are only close to themselves, and NaN is not close to anything.
///
/// ```
/// use isclose::isclose;
///
/// assert!(isclose(100.0, 100.00000009, 1e-9, 0.0).unwrap());
/// assert!(!isclose(0.0, 1e-10, 1e-9, 0.0).unwrap());
/// assert!(isclose(0.0, 1e-10, 1e-9, 1e-9).unwrap());
/// assert!(isclose(1.0, 1.0, -1e-9, 0.0).is_err());
/// ```
pub fn isclose(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> Result<bool, ToleranceError> {
    Ok(Tolerance::new(rel_tol, abs_tol)?.check(a, b))
}

pub trait IsClose {
    fn is_close(&self, other: Self) -> bool;

    fn is_close_within(&self, other: Self, tol: &Tolerance) -> bool;
}

impl IsClose for f64 {
    #[inline]
    fn is_close(&self, other: f64) -> bool {
        Tolerance::default().check(*self, other)
    }

    #[inline]
    fn is_close_within(&self, other: f64, tol: &Tolerance) -> bool {
        tol.check(*self, other)
    }
}
