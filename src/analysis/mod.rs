//! Sign-table analysis and two-root refinement.
//!
//! ┌ [`sign_table`] : sign of f at -inf, at each stationary point, at +inf
//! ├ [`intervals`]  : [`RootInterval`] and the pivot-based [`IntervalSelector`]
//! └ [`pipeline`]   : derivative -> stationary points -> sign table -> intervals
//!                    -> newton on the first root, bisection on the second

pub mod errors;
pub mod intervals;
pub mod pipeline;
pub mod sign_table;

pub use errors::AnalysisError;
pub use intervals::{IntervalSelector, RootInterval, DEFAULT_PIVOT};
pub use pipeline::{Diagnostic, IntervalCheck, Pipeline, PipelineCfg, PipelineReport, RefinedRoot};
pub use sign_table::{sign_table, Sample, SamplePoint};
