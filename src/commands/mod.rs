//! Command implementations

pub mod evaluate;
pub mod replay;
pub mod simple;
pub mod stats;

pub use evaluate::{EvaluationResult, evaluate_guess};
pub use replay::{ReplayResult, replay_game};
pub use simple::run_simple;
pub use stats::Statistics;
