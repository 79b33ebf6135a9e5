//! Dense real polynomials in one variable.
//!
//! Coefficients are stored lowest order first with trailing zeros trimmed,
//! so the zero polynomial has no coefficients and no degree.
//!
//! Real roots are isolated between consecutive critical points (the roots of
//! the derivative, found recursively) and the Cauchy bound, then refined with
//! [`bisection`]. Roots of even multiplicity never change sign; they are picked
//! up at the critical points where the polynomial nearly vanishes.

use std::ops::{Mul, Sub};
use crate::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use crate::root_finding::signs::opposite_sign;


const ROOT_TOL:   f64   = 1e-13;
const ROOT_ITER:  usize = 200;
const TOUCH_TOL:  f64   = 1e-10;
const DEDUP_TOL:  f64   = 1e-9;


#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Builds `c[0] + c[1] x + c[2] x^2 + ...`.
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Self {
        let mut coeffs = coeffs.into();
        while coeffs.last() == Some(&0.0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn zero() -> Self { Self::default() }

    pub fn constant(c: f64) -> Self { Self::new(vec![c]) }

    /// Monic polynomial with the given roots.
    pub fn from_roots(roots: &[f64]) -> Self {
        roots.iter().fold(Self::constant(1.0), |acc, &r| &acc * &Self::new(vec![-r, 1.0]))
    }

    // getters
    pub fn coeffs(&self) -> &[f64] { &self.coeffs }
    pub fn is_zero(&self) -> bool { self.coeffs.is_empty() }
    pub fn degree(&self)  -> Option<usize> { self.coeffs.len().checked_sub(1) }
    pub fn leading(&self) -> Option<f64> { self.coeffs.last().copied() }

    /// Horner evaluation.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// `sum |c_i| |x|^i`, the scale against which a value at `x` is judged to vanish.
    pub fn magnitude(&self, x: f64) -> f64 {
        let ax = x.abs();
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * ax + c.abs())
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * k).collect::<Vec<_>>())
    }

    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * i as f64)
                .collect::<Vec<_>>()
        )
    }

    fn monic(&self) -> Self {
        match self.leading() {
            Some(lead) => self.scale(1.0 / lead),
            None       => Self::zero(),
        }
    }

    /// `1 + max |c_i / c_n|`; every root lies strictly inside `(-bound, bound)`.
    fn cauchy_bound(&self) -> f64 {
        let monic = self.monic();
        let n = monic.coeffs.len().saturating_sub(1);
        1.0 + monic.coeffs[..n].iter().fold(0.0_f64, |m, c| m.max(c.abs()))
    }

    /// Real roots in ascending order, duplicates merged.
    ///
    /// The zero polynomial and nonzero constants have no isolated roots and
    /// return an empty set.
    pub fn real_roots(&self) -> Result<Vec<f64>, BisectionError> {
        let degree = match self.degree() {
            None | Some(0) => return Ok(Vec::new()),
            Some(d) => d,
        };
        let monic = self.monic();
        if degree == 1 {
            return Ok(vec![-monic.coeffs[0]]);
        }

        let critical = monic.derivative().real_roots()?;
        let bound    = monic.cauchy_bound();

        let mut knots = Vec::with_capacity(critical.len() + 2);
        knots.push(-bound);
        knots.extend(critical.iter().copied().filter(|c| c.abs() < bound));
        knots.push(bound);

        let cfg = BisectionCfg::new()
            .set_tolerance(ROOT_TOL)?
            .set_max_iter(ROOT_ITER)?;

        // touching (even multiplicity) roots sit on critical points
        let mut roots: Vec<f64> = critical
            .iter()
            .copied()
            .filter(|&c| monic.eval(c).abs() <= TOUCH_TOL * monic.magnitude(c))
            .collect();

        for w in knots.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            if lo < hi && opposite_sign(monic.eval(lo), monic.eval(hi)) {
                roots.push(bisection(|x| monic.eval(x), lo, hi, cfg)?.root);
            }
        }

        roots.sort_by(f64::total_cmp);
        roots.dedup_by(|a, b| (*a - *b).abs() <= DEDUP_TOL * (1.0 + b.abs()));
        Ok(roots)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::new(out)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let out: Vec<f64> = (0..n)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or(0.0);
                let b = rhs.coeffs.get(i).copied().unwrap_or(0.0);
                a - b
            })
            .collect();
        Polynomial::new(out)
    }
}
