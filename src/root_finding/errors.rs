//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ undefined function evaluation at a required point
//! │   └ invalid iteration budget (`max_iter`)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     └ tolerance not finite or not > 0
//!
//! Method-specific failures (invalid brackets, divergent newton steps) live
//! next to their algorithm in [`super::bisection`] and [`super::newton`].


use thiserror::Error;
use super::algorithms::Algorithm;


/// Root-finding runtime errors.
///
/// ┌ Function undefined (NaN, infinite or no real value) at `x`
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("{algorithm}: function undefined at x={x}")]
    UndefinedEvaluation { algorithm: Algorithm, x: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance configuration errors.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
