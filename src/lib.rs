//! Stationary-point sign analysis and real root refinement.
//!
//! ┌ [`root_finding`] : bisection and newton loops, sign classification
//! ├ [`symbolic`]     : symbolic engine interface and an exact rational engine
//! └ [`analysis`]     : sign table, interval selection, two-root pipeline

pub mod root_finding;
pub mod symbolic;
pub mod analysis;
