//! Ports to host capabilities
//!
//! Defines the interfaces the engine needs from the outside world.

mod evaluator;

pub use evaluator::DefaultEvaluator;
