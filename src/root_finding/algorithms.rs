//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum naming the two refinement methods,
//! along with their default iteration caps.


/// Root-finding algorithm variants.
/// ├ [`Algorithm::Bisection`] : bracketing method, halves a sign-changing interval
/// └ [`Algorithm::Newton`]    : open method, follows the tangent from one iterate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bisection,
    Newton,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bisection => 100,
            Algorithm::Newton    => 100,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Newton    => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
