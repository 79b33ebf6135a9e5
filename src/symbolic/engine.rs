use std::fmt;
use crate::root_finding::Evaluation;
use super::errors::SymbolicError;


/// Which end of the real line a limit is taken at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Infinity {
    Negative,
    Positive,
}

impl Infinity {
    /// The only direction that approaches this infinity from inside the real line:
    /// from below at `+inf`, from above at `-inf`.
    pub const fn interior(self) -> Direction {
        match self {
            Infinity::Negative => Direction::FromAbove,
            Infinity::Positive => Direction::FromBelow,
        }
    }
}

impl fmt::Display for Infinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infinity::Negative => write!(f, "-inf"),
            Infinity::Positive => write!(f, "+inf"),
        }
    }
}


/// One-sided limit direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    FromBelow,
    FromAbove,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::FromBelow => write!(f, "from below"),
            Direction::FromAbove => write!(f, "from above"),
        }
    }
}


/// Capability interface over an opaque single-variable expression.
///
/// Implementations must be side-effect free: every method may be called
/// any number of times in any order.
pub trait SymbolicEngine {
    type Expr: Clone;

    /// `order`-th derivative of `expr` with respect to `variable`; order 0 is `expr` itself.
    fn differentiate(
        &self, expr: &Self::Expr, variable: &str, order: usize
    ) -> Result<Self::Expr, SymbolicError>;

    /// Point value of `expr` at `variable = x`, [`Evaluation::Undefined`] if it has none.
    fn evaluate(
        &self, expr: &Self::Expr, variable: &str, x: f64
    ) -> Result<Evaluation, SymbolicError>;

    /// One-sided limit of `expr` at `at`, approached `direction`.
    /// May be infinite.
    fn limit(
        &self, expr: &Self::Expr, variable: &str, at: Infinity, direction: Direction
    ) -> Result<Evaluation, SymbolicError>;

    /// Real zeros of `expr`, ascending and without duplicates. Complex zeros are dropped.
    fn solve_zero(
        &self, expr: &Self::Expr, variable: &str
    ) -> Result<Vec<f64>, SymbolicError>;
}
