use signroot::analysis::{sign_table, AnalysisError, Sample, SamplePoint};
use signroot::root_finding::Sign;
use signroot::symbolic::{Polynomial, Rational, RationalEngine, SymbolicError};

type TestResult = Result<(), AnalysisError>;

fn signs(table: &[Sample]) -> Vec<Sign> {
    table.iter().map(|s| s.sign).collect()
}

#[test]
fn cubic_alternates() -> TestResult {
    // x^3 - 10x^2 - 24x, stationary points near -1.04 and 7.71
    let f     = Rational::polynomial("x", vec![0.0, -24.0, -10.0, 1.0]);
    let table = sign_table(&RationalEngine, &f, "x", &[7.705, -1.038])?;

    assert_eq!(
        signs(&table),
        vec![Sign::Negative, Sign::Positive, Sign::Negative, Sign::Positive]
    );
    assert_eq!(table[0].point, SamplePoint::NegInfinity);
    assert_eq!(table[1].point, SamplePoint::Finite(-1.038));
    assert_eq!(table[2].point, SamplePoint::Finite(7.705));
    assert_eq!(table[3].point, SamplePoint::PosInfinity);
    Ok(())
}

#[test]
fn samples_the_function_not_its_derivative() -> TestResult {
    // x^3 - 3x is +2 and -2 at its stationary points
    let f     = Rational::polynomial("x", vec![0.0, -3.0, 0.0, 1.0]);
    let table = sign_table(&RationalEngine, &f, "x", &[-1.0, 1.0])?;

    assert_eq!(table[1].sign, Sign::Positive);
    assert_eq!(table[2].sign, Sign::Negative);
    Ok(())
}

#[test]
fn stationary_zero_classifies_as_zero() -> TestResult {
    // x^2 touches zero at its only stationary point
    let f     = Rational::polynomial("x", vec![0.0, 0.0, 1.0]);
    let table = sign_table(&RationalEngine, &f, "x", &[0.0])?;

    assert_eq!(signs(&table), vec![Sign::Positive, Sign::Zero, Sign::Positive]);
    Ok(())
}

#[test]
fn pole_classifies_as_undefined() -> TestResult {
    // 1 / x, sampled at its pole
    let f = Rational::new("x", Polynomial::constant(1.0), Polynomial::new(vec![0.0, 1.0]))?;
    let table = sign_table(&RationalEngine, &f, "x", &[0.0])?;

    // both limits are 0
    assert_eq!(signs(&table), vec![Sign::Zero, Sign::Undefined, Sign::Zero]);
    Ok(())
}

#[test]
fn no_stationary_points() -> TestResult {
    let f     = Rational::polynomial("x", vec![1.0, -1.0]);
    let table = sign_table(&RationalEngine, &f, "x", &[])?;

    assert_eq!(signs(&table), vec![Sign::Positive, Sign::Negative]);
    Ok(())
}

#[test]
fn wrong_variable_is_an_engine_error() {
    let f   = Rational::polynomial("x", vec![1.0, 1.0]);
    let err = sign_table(&RationalEngine, &f, "t", &[0.0]).unwrap_err();

    assert!(matches!(err, AnalysisError::Symbolic(SymbolicError::UnknownVariable { .. })));
}

#[test]
fn sample_point_display() {
    assert_eq!(SamplePoint::NegInfinity.to_string(), "-inf");
    assert_eq!(SamplePoint::Finite(2.5).to_string(), "2.5");
    assert_eq!(SamplePoint::PosInfinity.to_string(), "+inf");
}
