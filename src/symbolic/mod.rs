//! Symbolic math engine interface.
//!
//! The refinement core never inspects an expression; it only asks an engine
//! for derivatives, point values, limits at infinity, and real zero sets.
//!
//! ┌ [`SymbolicEngine`] : the capability trait
//! ├ [`RationalEngine`] : exact engine over [`Rational`] functions of one variable
//! └ [`Polynomial`]     : dense real polynomial used by the rational engine

pub mod engine;
pub mod errors;
pub mod polynomial;
pub mod rational;

pub use engine::{Direction, Infinity, SymbolicEngine};
pub use errors::SymbolicError;
pub use polynomial::Polynomial;
pub use rational::{Rational, RationalEngine};
