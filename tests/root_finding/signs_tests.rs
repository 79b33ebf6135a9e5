use signroot::root_finding::{Evaluation, Sign};

#[test]
fn classifies_by_comparison_with_zero() {
    for x in [1e-300, 0.5, 7.0, f64::MAX, f64::INFINITY] {
        assert_eq!(Sign::classify(x), Sign::Positive, "x={x}");
    }
    for x in [-1e-300, -0.5, -7.0, f64::MIN, f64::NEG_INFINITY] {
        assert_eq!(Sign::classify(x), Sign::Negative, "x={x}");
    }
    assert_eq!(Sign::classify(0.0), Sign::Zero);
    assert_eq!(Sign::classify(-0.0), Sign::Zero);
}

#[test]
fn undefined_only_for_undefined_values() {
    assert_eq!(Sign::classify(f64::NAN), Sign::Undefined);
    assert_eq!(Sign::classify(Evaluation::Undefined), Sign::Undefined);
    assert_eq!(Sign::classify(None::<f64>), Sign::Undefined);
    assert_eq!(Sign::classify(Some(-2.0)), Sign::Negative);
}

#[test]
fn opposition_needs_two_definite_signs() {
    assert!(Sign::Positive.opposes(Sign::Negative));
    assert!(Sign::Negative.opposes(Sign::Positive));
    assert!(!Sign::Positive.opposes(Sign::Positive));
    assert!(!Sign::Zero.opposes(Sign::Positive));
    assert!(!Sign::Undefined.opposes(Sign::Negative));
    assert!(!Sign::Zero.opposes(Sign::Zero));
}

#[test]
fn evaluation_accessors() {
    assert_eq!(Evaluation::from(2.0).finite(), Some(2.0));
    assert_eq!(Evaluation::from(f64::INFINITY).real(), Some(f64::INFINITY));
    assert_eq!(Evaluation::from(f64::INFINITY).finite(), None);
    assert!(Evaluation::from(f64::NAN).is_undefined());
    assert_eq!(Evaluation::Undefined.to_string(), "undefined");
}
