//! Sign table of `f` over `-inf`, its stationary points, and `+inf`.
//!
//! The table samples f itself, not its derivative: values at
//! stationary points are generally nonzero. At the infinities the one-sided
//! limit is taken from the interior of the real line.

use std::fmt;
use crate::root_finding::{Evaluation, Sign};
use crate::symbolic::{Infinity, SymbolicEngine};
use super::errors::AnalysisError;


/// Where a sample was taken.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SamplePoint {
    NegInfinity,
    Finite(f64),
    PosInfinity,
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplePoint::NegInfinity => write!(f, "-inf"),
            SamplePoint::Finite(x)   => write!(f, "{x}"),
            SamplePoint::PosInfinity => write!(f, "+inf"),
        }
    }
}


/// One row of the sign table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub point: SamplePoint,
    pub sign:  Sign,
}


/// Point value of `expr`, with an engine failure read as "no real value".
pub(crate) fn point_value<E: SymbolicEngine>(
    engine: &E, expr: &E::Expr, variable: &str, x: f64
) -> Evaluation {
    engine.evaluate(expr, variable, x).unwrap_or(Evaluation::Undefined)
}


/// Builds the sign table `[-inf, p_1, ..., p_n, +inf]` for `expr`.
///
/// `stationary` is sorted ascending first; the input order does not matter.
///
/// # Errors
/// - [`AnalysisError::Symbolic`] if a limit at infinity cannot be taken.
///   Point evaluations never fail; they classify as [`Sign::Undefined`].
pub fn sign_table<E: SymbolicEngine>(
    engine: &E,
    expr: &E::Expr,
    variable: &str,
    stationary: &[f64],
) -> Result<Vec<Sample>, AnalysisError> {
    let mut points = stationary.to_vec();
    points.sort_by(f64::total_cmp);

    let limit = |at: Infinity| engine.limit(expr, variable, at, at.interior());

    let mut table = Vec::with_capacity(points.len() + 2);
    table.push(Sample {
        point: SamplePoint::NegInfinity,
        sign:  Sign::classify(limit(Infinity::Negative)?),
    });
    table.extend(points.into_iter().map(|x| Sample {
        point: SamplePoint::Finite(x),
        sign:  Sign::classify(point_value(engine, expr, variable, x)),
    }));
    table.push(Sample {
        point: SamplePoint::PosInfinity,
        sign:  Sign::classify(limit(Infinity::Positive)?),
    });

    Ok(table)
}
