use super::algorithms::Algorithm;
use super::report::{RootFindingReport, ConvergenceStatus, ToleranceSatisfied, Stencil};
use super::errors::{RootFindingError, ToleranceError};
use super::evaluation::Evaluation;
use super::signs::Sign;
use super::config::{CommonCfg, impl_common_cfg};
use std::fmt;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bisection;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bracket [{a}, {b}]: {defect}")]
    InvalidBracket { a: f64, b: f64, defect: BracketDefect },
}

/// Why a bracket was rejected before any bisection step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketDefect {
    /// `a` or `b` is NaN or infinite.
    NonFinite,
    /// `a >= b`.
    Degenerate,
    /// `f(a)` and `f(b)` share a sign.
    SameSign { fa: Sign, fb: Sign },
}
impl fmt::Display for BracketDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketDefect::NonFinite       => write!(f, "bounds must be finite"),
            BracketDefect::Degenerate      => write!(f, "a must be less than b"),
            BracketDefect::SameSign { fa, fb } =>
                write!(f, "no sign change, sign f(a)={fa}, sign f(b)={fb}"),
        }
    }
}

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ `tolerance` = 1e-6, used both as |f(c)| threshold and as bracket half-width
/// └ `max_iter`  = [`Algorithm::default_max_iter`] (100) when unset
///
/// # Validation:
/// └ Setters reject invalid values up front.
///    ├ `tolerance` >  0 and finite
///    └ `max_iter`  >= 1
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);

/// Calculates midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval. Both conditions on the endpoints are checked, never assumed.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found; returns `f64` or [`Evaluation`].
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`] with `tolerance` and optional `max_iter`.
///
/// # Returns
///
/// On success, a [`RootFindingReport`]:
/// ├ `root`       : midpoint of the last bracket, an exact endpoint root, or the
/// │                first midpoint with |f(c)| < tolerance
/// ├ `iterations` : number of halvings, 0 if an endpoint is already a root
/// ├ `status`     : [`ConvergenceStatus::Converged`] or [`ConvergenceStatus::Exhausted`]
/// ├ `last_step`  : width of the final bracket
/// └ `stencil`    : final bracket bounds
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBracket`] - bounds non-finite, `a >= b`, or `f(a)`, `f(b)`
/// │                                      not of opposite sign.
/// │
/// The following are propagated via [`BisectionError::Common`]
/// └ [`RootFindingError::UndefinedEvaluation`] - `func(x)` has no finite real value
///                                               at an endpoint or midpoint.
///
/// # Notes
/// ├ The loop halves while `b - a >= 2 * tolerance`; a midpoint whose |f| is below
/// │ `tolerance` (an exact zero included) ends the run immediately.
/// └ The final midpoint is evaluated for reporting, one extra evaluation.
pub fn bisection<F, E>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> E, E: Into<Evaluation> {

    if !(a.is_finite() && b.is_finite()) {
        return Err(BisectionError::InvalidBracket { a, b, defect: BracketDefect::NonFinite });
    }
    if a >= b {
        return Err(BisectionError::InvalidBracket { a, b, defect: BracketDefect::Degenerate });
    }

    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.common.tolerance();
    let num_iter  = cfg.common.resolved_max_iter(ALGORITHM);

    // number of function evaluations
    let mut evals = 0;

    // closure function, rejects undefined and non-finite values
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        evals += 1;
        func(x).into()
            .finite()
            .ok_or_else(|| RootFindingError::UndefinedEvaluation { algorithm: ALGORITHM, x }.into())
    };

    let fa = eval(a)?;
    let fb = eval(b)?;
    let sign_a = Sign::classify(fa);
    let sign_b = Sign::classify(fb);

    // immediate bounds are roots
    for (x, fx, sign) in [(a, fa, sign_a), (b, fb, sign_b)] {
        if sign == Sign::Zero {
            return Ok(RootFindingReport {
                root                : x,
                f_root              : fx,
                iterations          : 0,
                evaluations         : evals,
                status              : ConvergenceStatus::Converged,
                tolerance_satisfied : ToleranceSatisfied::ExactRoot,
                last_step           : b - a,
                stencil             : Stencil::Bracket { bounds: [a, b] },
                algorithm_name      : algo_name,
            });
        }
    }

    if !sign_a.opposes(sign_b) {
        return Err(BisectionError::InvalidBracket {
            a, b, defect: BracketDefect::SameSign { fa: sign_a, fb: sign_b }
        });
    }

    // algorithm
    let mut iterations = 0;
    while iterations < num_iter && b - a >= 2.0 * tol {
        let midpoint = calculate_bisection(a, b);
        let fm       = eval(midpoint)?;
        iterations  += 1;

        // early exact-enough hit
        if fm.abs() < tol {
            let tolerance_satisfied = if fm == 0.0 {
                ToleranceSatisfied::ExactRoot
            } else {
                ToleranceSatisfied::AbsFxReached
            };
            return Ok(RootFindingReport {
                root                : midpoint,
                f_root              : fm,
                iterations,
                evaluations         : evals,
                status              : ConvergenceStatus::Converged,
                tolerance_satisfied,
                last_step           : b - a,
                stencil             : Stencil::Bracket { bounds: [a, b] },
                algorithm_name      : algo_name,
            });
        }

        // shrink interval; sign(f(a)) is invariant since `a` only moves onto same-sign points
        if Sign::classify(fm) != sign_a {
            b = midpoint;
        } else {
            a = midpoint;
        }
    }

    let width    = b - a;
    let midpoint = calculate_bisection(a, b);
    let fm       = eval(midpoint)?;
    let (status, tolerance_satisfied) = if width < 2.0 * tol {
        (ConvergenceStatus::Converged, ToleranceSatisfied::WidthTolReached)
    } else {
        (ConvergenceStatus::Exhausted, ToleranceSatisfied::ToleranceNotReached)
    };

    Ok(RootFindingReport {
        root                : midpoint,
        f_root              : fm,
        iterations,
        evaluations         : evals,
        status,
        tolerance_satisfied,
        last_step           : width,
        stencil             : Stencil::Bracket { bounds: [a, b] },
        algorithm_name      : algo_name,
    })
}
