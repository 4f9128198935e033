//! Adversarial search: fixed-depth alpha-beta and a time-boxed iterative deepening
//! driver on top of it.

mod iterative_deepening;
mod search;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::evaluate::EvaluationFunction;

pub use iterative_deepening::IterativeDeepeningSearcher;
pub use search::{AlphaBetaSearcher, SearchError, SearchResult};

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Depth of a fixed-depth search, or the ceiling for iterative deepening.
    pub max_depth: u8,
    /// Wall-clock budget for iterative deepening. Ignored by fixed-depth search.
    pub time_limit: Duration,
    pub evaluation: EvaluationFunction,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            time_limit: Duration::from_secs(5),
            evaluation: EvaluationFunction::default(),
        }
    }
}

impl SearchConfig {
    pub fn new(max_depth: u8, time_limit: Duration, evaluation: EvaluationFunction) -> Self {
        Self {
            max_depth,
            time_limit,
            evaluation,
        }
    }
}
