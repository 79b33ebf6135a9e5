//! Analysis error types.
//!
//! ┌ [`AnalysisError`] : failures that stop the pipeline before refinement
//! │   ├ symbolic engine failures
//! │   ├ fewer than two stationary points
//! │   └ invalid bounds, pivot or interval
//! │
//! └ Refinement failures never surface here; each root carries its own
//!   [`NewtonError`] or [`BisectionError`] so one failing loop leaves the
//!   other intact.
//!
//! [`NewtonError`]: crate::root_finding::newton::NewtonError
//! [`BisectionError`]: crate::root_finding::bisection::BisectionError


use thiserror::Error;
use crate::symbolic::SymbolicError;


#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Symbolic(#[from] SymbolicError),

    #[error("insufficient roots: two-root refinement needs at least 2 stationary points, got {got}")]
    InsufficientRoots { got: usize },

    #[error("invalid bounds: need finite neg_bound < 0 and pos_bound > pivot={pivot}. \
             got neg_bound={neg_bound}, pos_bound={pos_bound}")]
    InvalidBounds { neg_bound: f64, pos_bound: f64, pivot: f64 },

    #[error("invalid pivot: must be finite and > 0. got {got}")]
    InvalidPivot { got: f64 },

    #[error("invalid interval: low and high must be finite with low < high. got ({low}, {high})")]
    InvalidInterval { low: f64, high: f64 },

    #[error("invalid variable name: must be non-empty")]
    EmptyVariable,
}
