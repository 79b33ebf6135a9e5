//! Sign classification for sampled function values.
//! - [`Sign::classify`] : value -> Positive / Negative / Zero / Undefined
//! - [`Sign::opposes`]  : `true` if both signs are definite and differ

use std::fmt;
use super::evaluation::Evaluation;


/// Sign of a sampled function value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
    Undefined,
}

impl Sign {
    /// Classifies a sample. `-0.0` is [`Sign::Zero`]; an infinite limit
    /// value classifies by its sign.
    pub fn classify(value: impl Into<Evaluation>) -> Self {
        match value.into() {
            Evaluation::Undefined => Sign::Undefined,
            Evaluation::Real(v) if v > 0.0 => Sign::Positive,
            Evaluation::Real(v) if v < 0.0 => Sign::Negative,
            Evaluation::Real(_) => Sign::Zero,
        }
    }

    /// Positive or negative.
    #[inline]
    pub fn is_definite(self) -> bool {
        matches!(self, Sign::Positive | Sign::Negative)
    }

    /// Returns `true` if `self` and `other` are definite and opposite.
    #[inline]
    pub fn opposes(self, other: Sign) -> bool {
        self.is_definite() && other.is_definite() && self != other
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sign::Positive  => "+",
            Sign::Negative  => "-",
            Sign::Zero      => "0",
            Sign::Undefined => "undefined",
        };
        write!(f, "{s}")
    }
}


/// Returns `true` if `x` and `y` have strictly opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    Sign::classify(x).opposes(Sign::classify(y))
}
