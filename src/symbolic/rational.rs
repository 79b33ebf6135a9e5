//! Exact rational functions `p(x) / q(x)` and the engine that serves them.

use crate::root_finding::Evaluation;
use super::engine::{Direction, Infinity, SymbolicEngine};
use super::errors::SymbolicError;
use super::polynomial::Polynomial;


/// Numerator below this fraction of its own magnitude counts as vanishing
/// when deciding whether a zero of `p` is cancelled by a zero of `q`.
const CANCEL_TOL: f64 = 1e-10;


/// `num / den` in a named variable. The denominator is never the zero polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct Rational {
    variable: String,
    num: Polynomial,
    den: Polynomial,
}

impl Rational {
    pub fn new(
        variable: impl Into<String>,
        num: Polynomial,
        den: Polynomial
    ) -> Result<Self, SymbolicError> {
        if den.is_zero() {
            return Err(SymbolicError::ZeroDenominator);
        }
        Ok(Self { variable: variable.into(), num, den })
    }

    /// Polynomial `c[0] + c[1] x + ...` in `variable`.
    pub fn polynomial(variable: impl Into<String>, coeffs: impl Into<Vec<f64>>) -> Self {
        Self {
            variable: variable.into(),
            num: Polynomial::new(coeffs),
            den: Polynomial::constant(1.0),
        }
    }

    // getters
    pub fn variable(&self)    -> &str { &self.variable }
    pub fn numerator(&self)   -> &Polynomial { &self.num }
    pub fn denominator(&self) -> &Polynomial { &self.den }

    fn check_variable(&self, variable: &str) -> Result<(), SymbolicError> {
        if self.variable != variable {
            return Err(SymbolicError::UnknownVariable {
                expected: self.variable.clone(),
                got: variable.to_owned(),
            });
        }
        Ok(())
    }

    /// Quotient rule: `(p' q - p q') / q^2`; a constant denominator is kept as is.
    pub fn derivative(&self) -> Self {
        let (num, den) = match self.den.degree() {
            Some(0) => (self.num.derivative(), self.den.clone()),
            _ => (
                &(&self.num.derivative() * &self.den) - &(&self.num * &self.den.derivative()),
                &self.den * &self.den,
            ),
        };
        Self { variable: self.variable.clone(), num, den }
    }

    /// Point value; [`Evaluation::Undefined`] on a pole or a non-numeric result.
    pub fn eval(&self, x: f64) -> Evaluation {
        let q = self.den.eval(x);
        if q == 0.0 {
            return Evaluation::Undefined;
        }
        Evaluation::from(self.num.eval(x) / q)
    }

    /// Limit at `+/-inf`, decided by degree comparison of numerator and denominator.
    pub fn limit_at(&self, at: Infinity) -> Evaluation {
        let (Some(n), Some(d), Some(lead_n), Some(lead_d)) = (
            self.num.degree(), self.den.degree(), self.num.leading(), self.den.leading()
        ) else {
            return Evaluation::Real(0.0);
        };

        let ratio = lead_n / lead_d;
        if n < d {
            Evaluation::Real(0.0)
        } else if n == d {
            Evaluation::from(ratio)
        } else {
            let flip = at == Infinity::Negative && (n - d) % 2 == 1;
            let sign = if flip { -ratio.signum() } else { ratio.signum() };
            Evaluation::Real(sign * f64::INFINITY)
        }
    }

    /// Real zeros of the numerator that are not also zeros of the denominator.
    pub fn real_zeros(&self) -> Result<Vec<f64>, SymbolicError> {
        let roots = self.num.real_roots()?;
        Ok(roots
            .into_iter()
            .filter(|&r| self.den.eval(r).abs() > CANCEL_TOL * self.den.magnitude(r))
            .collect())
    }
}


/// Exact engine over [`Rational`] expressions.
#[derive(Debug, Copy, Clone, Default)]
pub struct RationalEngine;

impl SymbolicEngine for RationalEngine {
    type Expr = Rational;

    fn differentiate(
        &self, expr: &Rational, variable: &str, order: usize
    ) -> Result<Rational, SymbolicError> {
        expr.check_variable(variable)?;
        Ok((0..order).fold(expr.clone(), |acc, _| acc.derivative()))
    }

    fn evaluate(
        &self, expr: &Rational, variable: &str, x: f64
    ) -> Result<Evaluation, SymbolicError> {
        expr.check_variable(variable)?;
        Ok(expr.eval(x))
    }

    fn limit(
        &self, expr: &Rational, variable: &str, at: Infinity, direction: Direction
    ) -> Result<Evaluation, SymbolicError> {
        expr.check_variable(variable)?;
        if direction != at.interior() {
            return Err(SymbolicError::InvalidDirection { at, direction });
        }
        Ok(expr.limit_at(at))
    }

    fn solve_zero(
        &self, expr: &Rational, variable: &str
    ) -> Result<Vec<f64>, SymbolicError> {
        expr.check_variable(variable)?;
        expr.real_zeros()
    }
}
