use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("error tolerances must be non-negative (rel_tol = {rel_tol}, abs_tol = {abs_tol})")]
pub struct ToleranceError {
    rel_tol: f64,
    abs_tol: f64,
}

/// How the relative tolerance is scaled by the compared values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Close if the difference is within tolerance relative to either value.
    #[default]
    Weak,
    /// Close if the difference is within tolerance relative to both values.
    Strong,
    /// The second value is the reference the tolerance is scaled by.
    Asymmetric,
    /// The tolerance is scaled by the mean of the two values.
    Average,
}

impl Method {
    fn accepts(self, diff: f64, rel_tol: f64, a: f64, b: f64) -> bool {
        match self {
            Method::Weak => diff <= (rel_tol * b).abs() || diff <= (rel_tol * a).abs(),
            Method::Strong => diff <= (rel_tol * b).abs() && diff <= (rel_tol * a).abs(),
            Method::Asymmetric => diff <= (rel_tol * b).abs(),
            Method::Average => diff <= (rel_tol * (a + b) / 2.0).abs(),
        }
    }
}

/// Relative and absolute tolerances for comparing two floats.
///
/// Both tolerances are non-negative; every constructor checks it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTolerance")]
pub struct Tolerance {
    rel_tol: f64,
    abs_tol: f64,
    method: Method,
}

impl Tolerance {
    pub const DEFAULT_REL_TOL: f64 = 1e-9;
    pub const DEFAULT_ABS_TOL: f64 = 0.0;

    pub fn new(rel_tol: f64, abs_tol: f64) -> Result<Self, ToleranceError> {
        // NaN tolerances are let through, nothing distinct compares close with them.
        if rel_tol < 0.0 || abs_tol < 0.0 {
            return Err(ToleranceError { rel_tol, abs_tol });
        }
        Ok(Self {
            rel_tol,
            abs_tol,
            method: Method::default(),
        })
    }

    pub fn relative(rel_tol: f64) -> Result<Self, ToleranceError> {
        Self::new(rel_tol, Self::DEFAULT_ABS_TOL)
    }

    pub fn absolute(abs_tol: f64) -> Result<Self, ToleranceError> {
        Self::new(Self::DEFAULT_REL_TOL, abs_tol)
    }

    pub fn with_method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Whether `a` and `b` are close under these tolerances.
    ///
    /// Equal values are always close, which covers infinities of the same
    /// sign. Any other infinity is never close, and neither is NaN.
    pub fn check(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        let diff = (b - a).abs();
        self.method.accepts(diff, self.rel_tol, a, b) || diff <= self.abs_tol
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rel_tol: Self::DEFAULT_REL_TOL,
            abs_tol: Self::DEFAULT_ABS_TOL,
            method: Method::default(),
        }
    }
}

fn default_rel_tol() -> f64 {
    Tolerance::DEFAULT_REL_TOL
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTolerance {
    #[serde(default = "default_rel_tol")]
    rel_tol: f64,
    #[serde(default)]
    abs_tol: f64,
    #[serde(default)]
    method: Method,
}

impl TryFrom<RawTolerance> for Tolerance {
    type Error = ToleranceError;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Ok(Tolerance::new(raw.rel_tol, raw.abs_tol)?.with_method(raw.method))
    }
}
