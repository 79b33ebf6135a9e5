//! Defines the [`RootFindingReport`] struct returned by both
//! root-finding algorithms.

/// Whether a run met its tolerance before the iteration cap.
///
/// [`ConvergenceStatus::Exhausted`] is not an error: the report still
/// carries the best estimate, and the caller decides whether to retry
/// with a larger `max_iter` or a looser tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceStatus {
    Converged,
    Exhausted,
}


/// Which stopping condition was satisfied (or not).
/// - [`ToleranceSatisfied::ExactRoot`]
///     - All methods
///     - f(x) == 0 exactly
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - Bisection
///     - |f(c)| < tol at a midpoint
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - Bisection
///     - (b - a) < 2 * tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - Newton
///     - |x_n - x_{n - 1}| < tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Tolerance not reached, always with [`ConvergenceStatus::Exhausted`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    ExactRoot,
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached
}


/// Method-specific data returned by a solver.
/// - [`Stencil::Bracket`] : bisection, `bounds` of the final interval
/// - [`Stencil::Open`]    : newton, `previous` iterate that produced the root
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { previous: f64 },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds }  => &bounds[..],
            Stencil::Open { previous }   => std::slice::from_ref(previous),
        }
    }
}


/// Final report returned by both root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root`
/// - `iterations`          : total iterations
/// - `evaluations`         : total function (and derivative) evaluations
/// - `status`              : converged or exhausted ([`ConvergenceStatus`])
/// - `tolerance_satisfied` : which condition was met ([`ToleranceSatisfied`])
/// - `last_step`           : |x_n - x_{n-1}| (newton) or final bracket width (bisection)
/// - `stencil`             : last set of points used in update formula
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub status              : ConvergenceStatus,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub last_step           : f64,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    #[inline]
    pub fn converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}
