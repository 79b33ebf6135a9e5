use thiserror::Error;
use super::engine::{Direction, Infinity};
use crate::root_finding::bisection::BisectionError;


/// Symbolic engine errors.
///
/// ┌ Expression queried with a variable it is not written in
/// ├ Limit direction pointing away from the real line
/// ├ Rational function built over the zero polynomial
/// └ Root isolation failure while solving for real zeros
#[derive(Debug, Error)]
pub enum SymbolicError {
    #[error("unknown variable `{got}`: expression is in `{expected}`")]
    UnknownVariable { expected: String, got: String },

    #[error("limit at {at} cannot be approached {direction}")]
    InvalidDirection { at: Infinity, direction: Direction },

    #[error("denominator is the zero polynomial")]
    ZeroDenominator,

    #[error("real root isolation failed: {0}")]
    RootIsolation(#[from] BisectionError),
}
