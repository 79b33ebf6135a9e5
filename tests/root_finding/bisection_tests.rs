//! tests for the bisection root finding algorithm
use signroot::root_finding::Evaluation;
use signroot::root_finding::Sign;
use signroot::root_finding::errors::{RootFindingError, ToleranceError};
use signroot::root_finding::algorithms::Algorithm;
use signroot::root_finding::report::{ConvergenceStatus, ToleranceSatisfied, Stencil};
use signroot::root_finding::bisection::{bisection, BisectionCfg, BisectionError, BracketDefect};

type TestResult = Result<(), BisectionError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-6;

    let cfg = BisectionCfg::new().set_tolerance(tol)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_eq!(res.status, ConvergenceStatus::Converged);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 1e-5);
    assert!(res.f_root.abs() < tol || res.last_step < 2.0 * tol);
    assert!(res.iterations > 0);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn finds_3() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let tol = 1e-10;

    let cfg = BisectionCfg::new()
        .set_tolerance(tol)?
        .set_max_iter(100)?;

    let res = bisection(f, 0.0, 10.0, cfg)?;

    assert_eq!(res.status, ConvergenceStatus::Converged);
    assert!((res.root - 3.0_f64).abs() <= 1e-9);
    Ok(())
}

#[test]
fn finds_negative_5() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let cfg = BisectionCfg::new().set_tolerance(1e-8)?;

    // first midpoint is -5, an exact hit
    let res = bisection(f, -10.0, 0.0, cfg)?;

    assert_eq!(res.status, ConvergenceStatus::Converged);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactRoot);
    assert_eq!(res.root, -5.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::InvalidBracket {
            a, b, defect: BracketDefect::SameSign { fa: Sign::Positive, fb: Sign::Positive }
        } if a == -1.0 && b == 1.0
    ));
    Ok(())
}

#[test]
fn detects_invalid_bounds() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, 2.0, 0.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBracket { defect: BracketDefect::Degenerate, .. }));
    Ok(())
}

#[test]
fn identical_bounds_are_invalid() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, 1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::InvalidBracket { a, b, defect: BracketDefect::Degenerate } if a == 1.0 && b == 1.0
    ));
    Ok(())
}

#[test]
fn non_finite_bounds_are_invalid() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, f64::NEG_INFINITY, 1.0, BisectionCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBracket { defect: BracketDefect::NonFinite, .. }));
    Ok(())
}

#[test]
fn undefined_endpoint() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, -1.0, 5.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::UndefinedEvaluation { algorithm: Algorithm::Bisection, x })
        if x == -1.0
    ));
    Ok(())
}

#[test]
fn infinite_midpoint_value() -> TestResult {
    let f   = |x: f64| 1.0 / x;
    let err = bisection(f, -1.0, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::UndefinedEvaluation { x, .. }) if x == 0.0
    ));
    Ok(())
}

#[test]
fn explicit_undefined_evaluation() -> TestResult {
    let f   = |x: f64| if x > 1.0 { Evaluation::Undefined } else { Evaluation::Real(x - 0.5) };
    let err = bisection(f, 0.0, 4.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BisectionError::Common(RootFindingError::UndefinedEvaluation { x, .. }) if x == 4.0
    ));
    Ok(())
}

#[test]
fn endpoint_a_is_root_iterations_0() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, 0.0, 5.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.status, ConvergenceStatus::Converged);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactRoot);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn endpoint_b_is_root_iterations_0() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, -5.0, 0.0, BisectionCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ExactRoot);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn both_endpoints_are_roots_picks_first() -> TestResult {
    let f   = |_x: f64| 0.0;
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let f     = |x: f64| x - 0.3;
    let niter = 10;

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-12)?
        .set_max_iter(niter)?;

    let res = bisection(f, -3.0, 2.0, cfg)?;

    assert_eq!(res.status, ConvergenceStatus::Exhausted);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, niter);
    assert!((res.last_step - 5.0 / 1024.0).abs() < 1e-15);
    Ok(())
}

#[test]
fn narrow_interval_stops_on_width() -> TestResult {
    let f   = |x: f64| x - 1e-7;
    let cfg = BisectionCfg::new().set_tolerance(2e-6)?;
    let res = bisection(f, -1e-6, 1e-6, cfg)?;

    assert_eq!(res.status, ConvergenceStatus::Converged);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, 0.0);
    Ok(())
}

#[test]
fn width_or_residual_bound_holds() -> TestResult {
    let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

    for tol in [1e-2, 1e-4, 1e-6, 1e-9] {
        let cfg = BisectionCfg::new().set_tolerance(tol)?;
        let res = bisection(f, 2.0, 3.0, cfg)?;

        assert_eq!(res.status, ConvergenceStatus::Converged);
        assert!(
            f(res.root).abs() < tol || res.last_step < 2.0 * tol,
            "tol={tol}: root={}, f={}, width={}", res.root, f(res.root), res.last_step
        );
    }
    Ok(())
}

#[test]
fn final_bracket_keeps_sign_change() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let cfg = BisectionCfg::new().set_tolerance(1e-9)?;
    let res = bisection(f, 0.0, 1.0, cfg)?;

    if let Stencil::Bracket { bounds: [a, b] } = res.stencil {
        assert!(a < b);
        assert!(a <= res.root && res.root <= b);
    } else {
        panic!("bisection must report a bracket stencil");
    }
    assert!((res.root - 0.739_085_133_215_160_7).abs() < 1e-8);
    Ok(())
}

#[test]
fn counts_evaluations() -> TestResult {
    let mut calls = 0usize;
    let f = |x: f64| { calls += 1; x - 0.3 };

    let cfg = BisectionCfg::new()
        .set_tolerance(1e-12)?
        .set_max_iter(4)?;
    let res = bisection(f, 0.0, 1.0, cfg)?;

    // two endpoints, four midpoints, one final midpoint
    assert_eq!(res.evaluations, 7);
    assert_eq!(calls, 7);
    Ok(())
}

#[test]
fn invalid_tolerance_rejected_by_setter() {
    for bad in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        let err = BisectionCfg::new().set_tolerance(bad).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidTolerance { .. }));
    }
}

#[test]
fn zero_max_iter_rejected_by_setter() {
    let err = BisectionCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn defaults_match_documented_values() {
    let cfg = BisectionCfg::default();
    assert_eq!(cfg.tolerance(), 1e-6);
    assert_eq!(cfg.max_iter(), None);
    assert_eq!(Algorithm::Bisection.default_max_iter(), 100);
}
