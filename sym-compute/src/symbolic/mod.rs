//! Symbolic manipulation of expressions.

pub mod derivative;
pub mod error;
pub mod integrate;
pub mod simplify;
pub mod step_collector;

pub use step_collector::StepCollector;
