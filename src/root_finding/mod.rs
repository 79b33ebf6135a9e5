// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod evaluation;
pub mod signs;
pub(crate) mod config;

// algorithms
pub mod bisection;
pub mod newton;

pub use config::DEFAULT_TOLERANCE;
pub use evaluation::Evaluation;
pub use signs::Sign;
