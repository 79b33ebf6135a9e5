//! Two-root refinement pipeline.
//!
//! [`Pipeline::run`] performs, in order:
//! ┌ differentiate f once
//! ├ solve f' = 0 for the stationary points (sorted, real only)
//! ├ build the sign table of f
//! ├ require at least two stationary points ([`AnalysisError::InsufficientRoots`])
//! ├ select one candidate interval per stationary point and classify its endpoints
//! ├ newton from the low end of the first interval
//! └ bisection over the second interval
//!
//! The two refinements are independent: each [`RefinedRoot`] carries its own
//! `Result`, so a failed bracket on one side never hides the other root.
//! Intervals with an undefined endpoint are not refined at all; they are
//! reported as [`Diagnostic::UndefinedEndpoint`] and their refinement result is
//! the corresponding [`RootFindingError::UndefinedEvaluation`].

use crate::root_finding::Sign;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::bisection::{BisectionCfg, BisectionError};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::newton::{newton, NewtonCfg, NewtonError};
use crate::root_finding::report::RootFindingReport;
use crate::symbolic::SymbolicEngine;
use super::errors::AnalysisError;
use super::intervals::{IntervalSelector, RootInterval};
use super::sign_table::{point_value, sign_table, Sample, SamplePoint};


/// Pipeline configuration.
///
/// # Fields
/// ┌ `variable`  : name of the independent variable
/// ├ `neg_bound` : finite stand-in for `-inf`, must be < 0
/// ├ `pos_bound` : finite stand-in for `+inf`, must exceed the selector pivot
/// ├ `newton`    : [`NewtonCfg`] for the first root
/// ├ `bisection` : [`BisectionCfg`] for the second root
/// └ `selector`  : [`IntervalSelector`] (pivot)
///
/// Bounds are checked against the pivot when the config is built and again
/// whenever the selector is replaced.
#[derive(Debug, Clone)]
pub struct PipelineCfg {
    variable:  String,
    neg_bound: f64,
    pos_bound: f64,
    newton:    NewtonCfg,
    bisection: BisectionCfg,
    selector:  IntervalSelector,
}

impl PipelineCfg {
    pub fn new(
        variable: impl Into<String>,
        neg_bound: f64,
        pos_bound: f64,
    ) -> Result<Self, AnalysisError> {
        let variable = variable.into();
        if variable.is_empty() {
            return Err(AnalysisError::EmptyVariable);
        }
        let cfg = Self {
            variable,
            neg_bound,
            pos_bound,
            newton:    NewtonCfg::new(),
            bisection: BisectionCfg::new(),
            selector:  IntervalSelector::new(),
        };
        cfg.check_bounds()?;
        Ok(cfg)
    }

    fn check_bounds(&self) -> Result<(), AnalysisError> {
        self.selector.select(&[], self.neg_bound, self.pos_bound).map(|_| ())
    }

    #[must_use]
    pub fn with_newton(mut self, v: NewtonCfg) -> Self { self.newton = v; self }

    #[must_use]
    pub fn with_bisection(mut self, v: BisectionCfg) -> Self { self.bisection = v; self }

    pub fn with_selector(mut self, v: IntervalSelector) -> Result<Self, AnalysisError> {
        self.selector = v;
        self.check_bounds()?;
        Ok(self)
    }

    // getters
    pub fn variable(&self)  -> &str { &self.variable }
    pub fn neg_bound(&self) -> f64 { self.neg_bound }
    pub fn pos_bound(&self) -> f64 { self.pos_bound }
    pub fn newton(&self)    -> NewtonCfg { self.newton }
    pub fn bisection(&self) -> BisectionCfg { self.bisection }
    pub fn selector(&self)  -> IntervalSelector { self.selector }
}


/// Non-fatal findings collected during a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Diagnostic {
    /// The sign table has an undefined entry.
    UndefinedSample { point: SamplePoint },
    /// An interval endpoint has no real value; the interval is not refined.
    UndefinedEndpoint { index: usize, x: f64 },
    /// Neither endpoint is a root and both share a sign; bisection will reject this interval.
    SameSignEndpoints { index: usize, low: Sign, high: Sign },
}


/// A selected interval with the signs of f at its endpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntervalCheck {
    pub interval:  RootInterval,
    pub low_sign:  Sign,
    pub high_sign: Sign,
}

impl IntervalCheck {
    /// Bisection accepts this interval: an endpoint is a root, or the signs are
    /// definite and opposite.
    pub fn is_bracketing(&self) -> bool {
        self.low_sign == Sign::Zero
            || self.high_sign == Sign::Zero
            || self.low_sign.opposes(self.high_sign)
    }

    /// Endpoint with an undefined value, low end first.
    fn undefined_endpoint(&self) -> Option<f64> {
        if self.low_sign == Sign::Undefined {
            Some(self.interval.low())
        } else if self.high_sign == Sign::Undefined {
            Some(self.interval.high())
        } else {
            None
        }
    }
}


/// Outcome of refining one root.
#[derive(Debug)]
pub struct RefinedRoot<E> {
    pub algorithm: Algorithm,
    pub interval:  RootInterval,
    pub outcome:   Result<RootFindingReport, E>,
}

impl<E> RefinedRoot<E> {
    /// The refined value, converged or exhausted; `None` if the refinement failed.
    pub fn root(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|r| r.root)
    }
}


/// Everything a run produces.
#[derive(Debug)]
pub struct PipelineReport<X> {
    pub derivative:        X,
    pub stationary_points: Vec<f64>,
    pub sign_table:        Vec<Sample>,
    pub intervals:         Vec<IntervalCheck>,
    pub first:             RefinedRoot<NewtonError>,
    pub second:            RefinedRoot<BisectionError>,
    pub diagnostics:       Vec<Diagnostic>,
}


/// Sign-table analysis plus two-root refinement over a borrowed engine.
#[derive(Debug)]
pub struct Pipeline<'e, E: SymbolicEngine> {
    engine: &'e E,
    cfg:    PipelineCfg,
}

impl<'e, E: SymbolicEngine> Pipeline<'e, E> {
    pub fn new(engine: &'e E, cfg: PipelineCfg) -> Self {
        Self { engine, cfg }
    }

    pub fn cfg(&self) -> &PipelineCfg { &self.cfg }

    /// Runs the full analysis on `expr`.
    ///
    /// # Errors
    /// - [`AnalysisError::Symbolic`]          : differentiation, zero solving or a limit failed
    /// - [`AnalysisError::InsufficientRoots`] : f' has fewer than two real zeros
    ///
    /// Refinement failures are not errors of the run; see [`RefinedRoot::outcome`].
    pub fn run(&self, expr: &E::Expr) -> Result<PipelineReport<E::Expr>, AnalysisError> {
        let engine   = self.engine;
        let variable = self.cfg.variable.as_str();

        let derivative = engine.differentiate(expr, variable, 1)?;

        let mut stationary_points = engine.solve_zero(&derivative, variable)?;
        stationary_points.sort_by(f64::total_cmp);
        stationary_points.dedup();

        let table = sign_table(engine, expr, variable, &stationary_points)?;
        let mut diagnostics: Vec<Diagnostic> = table
            .iter()
            .filter(|s| s.sign == Sign::Undefined)
            .map(|s| Diagnostic::UndefinedSample { point: s.point })
            .collect();

        if stationary_points.len() < 2 {
            return Err(AnalysisError::InsufficientRoots { got: stationary_points.len() });
        }

        let f  = |x: f64| point_value(engine, expr, variable, x);
        let df = |x: f64| point_value(engine, &derivative, variable, x);

        let intervals: Vec<IntervalCheck> = self.cfg.selector
            .select(&stationary_points, self.cfg.neg_bound, self.cfg.pos_bound)?
            .into_iter()
            .map(|interval| {
                let (low_sign, high_sign) = interval.endpoint_signs(f);
                IntervalCheck { interval, low_sign, high_sign }
            })
            .collect();

        for (index, check) in intervals.iter().enumerate() {
            if let Some(x) = check.undefined_endpoint() {
                diagnostics.push(Diagnostic::UndefinedEndpoint { index, x });
            } else if !check.is_bracketing() {
                diagnostics.push(Diagnostic::SameSignEndpoints {
                    index,
                    low:  check.low_sign,
                    high: check.high_sign,
                });
            }
        }

        // newton on the first root, started from the low end
        let first_check = intervals[0];
        let first: RefinedRoot<NewtonError> = RefinedRoot {
            algorithm: Algorithm::Newton,
            interval:  first_check.interval,
            outcome:   match first_check.undefined_endpoint() {
                Some(x) => Err(RootFindingError::UndefinedEvaluation {
                    algorithm: Algorithm::Newton, x
                }.into()),
                None => newton(f, df, first_check.interval.low(), self.cfg.newton),
            },
        };

        // bisection on the second root
        let second_check = intervals[1];
        let second: RefinedRoot<BisectionError> = RefinedRoot {
            algorithm: Algorithm::Bisection,
            interval:  second_check.interval,
            outcome:   match second_check.undefined_endpoint() {
                Some(x) => Err(RootFindingError::UndefinedEvaluation {
                    algorithm: Algorithm::Bisection, x
                }.into()),
                None => second_check.interval.bisect(f, self.cfg.bisection),
            },
        };

        Ok(PipelineReport {
            derivative,
            stationary_points,
            sign_table: table,
            intervals,
            first,
            second,
            diagnostics,
        })
    }
}
