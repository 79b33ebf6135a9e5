//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::report::{RootFindingReport, ConvergenceStatus, ToleranceSatisfied, Stencil};
use super::errors::{RootFindingError, ToleranceError};
use super::evaluation::Evaluation;
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Newton;


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("divergent iteration at x={x}: f'(x)={dfx} admits no newton step")]
    DivergentIteration { x: f64, dfx: Evaluation },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tolerance` and optional `max_iter`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - `tolerance = 1e-6`
/// - If `max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] (100).
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// Helpers
/// - `eval_fx_checked`  : evaluates `f(x)`, undefined or non-finite is an error
/// - `eval_dfx_checked` : evaluates `df(x)`, anything that cannot divide is divergence
#[inline]
fn eval_fx_checked<F, E>(
    f: &mut F,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where F: FnMut(f64) -> E, E: Into<Evaluation> {
    *evals += 1;
    f(x).into()
        .finite()
        .ok_or(RootFindingError::UndefinedEvaluation { algorithm: ALGORITHM, x }.into())
}
#[inline]
fn eval_dfx_checked<G, D>(
    df: &mut G,
    x: f64,
    evals: &mut usize
) -> Result<f64, NewtonError> where G: FnMut(f64) -> D, D: Into<Evaluation> {
    *evals += 1;
    let dfx = df(x).into();
    match dfx.finite() {
        Some(v) if v != 0.0 => Ok(v),
        _ => Err(NewtonError::DivergentIteration { x, dfx }),
    }
}


fn newton_loop<F, G, E, D>(
    mut f: F,
    mut df: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> E,
    G: FnMut(f64) -> D,
    E: Into<Evaluation>,
    D: Into<Evaluation>,
{
    let algo_name = ALGORITHM.algorithm_name();
    let tol       = cfg.common.tolerance();
    let num_iter  = cfg.common.resolved_max_iter(ALGORITHM);

    let mut evals: usize = 0;

    // early exit: x0 is an exact root
    let mut x  = x0;
    let mut fx = eval_fx_checked(&mut f, x, &mut evals)?;
    if fx == 0.0 {
        return Ok(RootFindingReport {
            root                : x0,
            f_root              : fx,
            iterations          : 0,
            evaluations         : evals,
            status              : ConvergenceStatus::Converged,
            tolerance_satisfied : ToleranceSatisfied::ExactRoot,
            last_step           : 0.0,
            stencil             : Stencil::Open { previous: x0 },
            algorithm_name      : algo_name,
        });
    }

    // main loop
    let mut prev_x    = x;
    let mut last_step = f64::INFINITY;
    for iter in 1..=num_iter {
        let dfx = eval_dfx_checked(&mut df, x, &mut evals)?;

        let step = -fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::DivergentIteration { x, dfx: Evaluation::Real(dfx) });
        }

        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        let fx_next = eval_fx_checked(&mut f, x_next, &mut evals)?;
        last_step   = (x_next - x).abs();

        let satisfied = if fx_next == 0.0 {
            Some(ToleranceSatisfied::ExactRoot)
        } else if last_step < tol {
            Some(ToleranceSatisfied::StepSizeReached)
        } else {
            None
        };
        if let Some(tolerance_satisfied) = satisfied {
            return Ok(RootFindingReport {
                root                : x_next,
                f_root              : fx_next,
                iterations          : iter,
                evaluations         : evals,
                status              : ConvergenceStatus::Converged,
                tolerance_satisfied,
                last_step,
                stencil             : Stencil::Open { previous: x },
                algorithm_name      : algo_name,
            });
        }

        prev_x = x;
        x  = x_next;
        fx = fx_next;
    }

    Ok(RootFindingReport {
        root                : x,
        f_root              : fx,
        iterations          : num_iter,
        evaluations         : evals,
        status              : ConvergenceStatus::Exhausted,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        last_step,
        stencil             : Stencil::Open { previous: prev_x },
        algorithm_name      : algo_name,
    })
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// with an analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its first derivative
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (`tolerance`, optional `max_iter`)
///
/// Both functions may return `f64` or [`Evaluation`]; NaN and
/// [`Evaluation::Undefined`] are treated as "no real value".
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : approximate root
/// - `f_root`              : function value at `root`
/// - `iterations`          : number of newton steps taken
/// - `evaluations`         : total evaluations (f and f')
/// - `status`              : converged, or exhausted at `max_iter`
/// - `tolerance_satisfied` : exact root or step size
/// - `last_step`           : |x_n - x_{n-1}| of the final step
/// - `stencil`             : previous iterate used to form the last step
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]       : `x0` non-finite
/// - [`NewtonError::DivergentIteration`] : f'(x) is zero, undefined or non-finite,
///                                         or the step -f/f' overflows
/// - [`NewtonError::StepNotFinite`]      : `x + step` not representable
///
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::UndefinedEvaluation`] : `f(x)` undefined or non-finite at an iterate
///
/// # Behavior
/// - Convergence: stops once `|x_n - x_{n-1}| < tolerance`; the root is the newest
///   iterate `x_n`. An iterate with `f(x) == 0` is returned at once.
/// - Exhaustion: after `max_iter` steps the last iterate is returned with
///   [`ConvergenceStatus::Exhausted`] and [`ToleranceSatisfied::ToleranceNotReached`].
///
/// # Notes
/// - Convergence is *local only*. Poor guesses or ill-behaved functions can
///   diverge or cycle; those runs end exhausted rather than failing.
///   For guaranteed convergence, use [`super::bisection::bisection`].
pub fn newton<F, G, E, D>(
    func: F,
    dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> E,
    G: FnMut(f64) -> D,
    E: Into<Evaluation>,
    D: Into<Evaluation> {

    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    newton_loop(func, dfunc, x0, cfg)
}
