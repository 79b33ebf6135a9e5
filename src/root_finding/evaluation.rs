//! Point evaluations that may have no real value.
//!
//! Every function handed to a refinement loop returns something convertible
//! into an [`Evaluation`]. Plain `f64` closures work directly: a NaN result
//! converts to [`Evaluation::Undefined`]. Infinite values stay real, since
//! limits at infinity are legitimately infinite; the loops themselves reject
//! non-finite values at the points they need.

use std::fmt;


/// Outcome of evaluating a function at one point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Evaluation {
    Real(f64),
    Undefined,
}

impl Evaluation {
    /// Real value, if any (possibly infinite).
    pub fn real(self) -> Option<f64> {
        match self {
            Evaluation::Real(v) => Some(v),
            Evaluation::Undefined => None,
        }
    }

    /// Real and finite value, if any.
    pub fn finite(self) -> Option<f64> {
        self.real().filter(|v| v.is_finite())
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Evaluation::Undefined)
    }
}

impl From<f64> for Evaluation {
    fn from(v: f64) -> Self {
        if v.is_nan() { Evaluation::Undefined } else { Evaluation::Real(v) }
    }
}

impl From<Option<f64>> for Evaluation {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Evaluation::Undefined, Evaluation::from)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Real(v)   => write!(f, "{v}"),
            Evaluation::Undefined => write!(f, "undefined"),
        }
    }
}
