//! Candidate root intervals from stationary points.
//!
//! [`IntervalSelector`] applies a fixed heuristic, not a bracketing search:
//! ├ stationary point p <= 0 : `(neg_bound, 0)`
//! └ stationary point p >  0 : `(pivot, pos_bound)`, pivot defaults to 9
//!
//! Nothing here checks that 0 or the pivot actually lies on the far side of a
//! root from the chosen bound. The pipeline classifies endpoint signs afterwards
//! and bisection rejects same-sign brackets, so a bad guess is reported rather
//! than refined.

use crate::root_finding::Sign;
use crate::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use crate::root_finding::evaluation::Evaluation;
use crate::root_finding::report::RootFindingReport;
use super::errors::AnalysisError;


pub const DEFAULT_PIVOT: f64 = 9.0;


/// Finite interval `(low, high)` with `low < high`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootInterval {
    low:  f64,
    high: f64,
}

impl RootInterval {
    pub fn new(low: f64, high: f64) -> Result<Self, AnalysisError> {
        if !(low.is_finite() && high.is_finite()) || low >= high {
            return Err(AnalysisError::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    // getters
    pub fn low(&self)   -> f64 { self.low }
    pub fn high(&self)  -> f64 { self.high }
    pub fn width(&self) -> f64 { self.high - self.low }

    /// Signs of `f` at `low` and `high`.
    pub fn endpoint_signs<F, E>(&self, mut f: F) -> (Sign, Sign)
    where F: FnMut(f64) -> E, E: Into<Evaluation> {
        (Sign::classify(f(self.low)), Sign::classify(f(self.high)))
    }

    /// Runs [`bisection`] over this interval.
    pub fn bisect<F, E>(&self, f: F, cfg: BisectionCfg) -> Result<RootFindingReport, BisectionError>
    where F: FnMut(f64) -> E, E: Into<Evaluation> {
        bisection(f, self.low, self.high, cfg)
    }
}


/// Pivot-based interval heuristic. See the module docs for its limits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntervalSelector {
    pivot: f64,
}

impl IntervalSelector {
    pub fn new() -> Self {
        Self { pivot: DEFAULT_PIVOT }
    }

    pub fn set_pivot(mut self, v: f64) -> Result<Self, AnalysisError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(AnalysisError::InvalidPivot { got: v });
        }
        self.pivot = v;
        Ok(self)
    }

    pub fn pivot(&self) -> f64 { self.pivot }

    /// One interval per stationary point, in input order.
    ///
    /// # Errors
    /// - [`AnalysisError::InvalidBounds`] unless `neg_bound < 0 < pivot < pos_bound`,
    ///   both bounds finite. Checked even when `stationary` is empty.
    pub fn select(
        &self,
        stationary: &[f64],
        neg_bound: f64,
        pos_bound: f64,
    ) -> Result<Vec<RootInterval>, AnalysisError> {
        let valid = neg_bound.is_finite() && pos_bound.is_finite()
            && neg_bound < 0.0 && pos_bound > self.pivot;
        if !valid {
            return Err(AnalysisError::InvalidBounds { neg_bound, pos_bound, pivot: self.pivot });
        }

        stationary
            .iter()
            .map(|&p| if p <= 0.0 {
                RootInterval::new(neg_bound, 0.0)
            } else {
                RootInterval::new(self.pivot, pos_bound)
            })
            .collect()
    }
}

impl Default for IntervalSelector {
    fn default() -> Self { Self::new() }
}
