use std::time::{Duration, Instant};

use log::{debug, info};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::Board;
use crate::evaluate::{EvaluationFunction, Evaluator};

use super::search::{AlphaBetaSearcher, SearchError, SearchResult};
use super::SearchConfig;

/// Runs `AlphaBetaSearcher` at depth 1, 2, 3, ... until either `max_depth` is reached
/// or the time budget is spent, and answers with the deepest search that finished.
///
/// The clock is only checked between depths, so a depth that has started always runs
/// to completion. Depth 1 always runs.
pub struct IterativeDeepeningSearcher<E = EvaluationFunction> {
    max_depth: u8,
    time_limit: Duration,
    searcher: AlphaBetaSearcher<E>,
    last_depth: u8,
    last_nodes: usize,
}

impl IterativeDeepeningSearcher<EvaluationFunction> {
    pub fn with_config(config: &SearchConfig) -> Self {
        Self::new(config.max_depth, config.time_limit, config.evaluation)
    }
}

impl<E: Evaluator> IterativeDeepeningSearcher<E> {
    pub fn new(max_depth: u8, time_limit: Duration, evaluator: E) -> Self {
        Self {
            max_depth,
            time_limit,
            searcher: AlphaBetaSearcher::new(1, evaluator),
            last_depth: 0,
            last_nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Depth reached and nodes evaluated by the last completed depth of the last search.
    pub fn last_search_stats(&self) -> (u8, usize) {
        (self.last_depth, self.last_nodes)
    }

    pub fn last_score(&self) -> Option<f64> {
        self.searcher.last_score()
    }

    /// Returns the chosen pit and the depth it was found at.
    pub fn get_best_move(&mut self, board: &Board) -> Result<(usize, u8), SearchError> {
        self.search(board)
            .map(|result| (result.best_move, result.depth))
    }

    #[must_use = "search returns the best move found"]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn search(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        if self.max_depth < 1 {
            return Err(SearchError::DepthTooLow);
        }

        let start = Instant::now();
        let mut best = None;

        for depth in 1..=self.max_depth {
            if depth > 1 && start.elapsed() >= self.time_limit {
                debug!(
                    "time budget of {:?} spent before depth {}",
                    self.time_limit, depth
                );
                break;
            }

            self.searcher.set_max_depth(depth);
            let result = self.searcher.search(board)?;
            debug!(
                "depth {} complete: pit {} (score {}, {} nodes)",
                depth, result.best_move, result.score, result.nodes_evaluated
            );

            self.last_depth = depth;
            self.last_nodes = result.nodes_evaluated;
            best = Some(result);
        }

        let best = best.ok_or(SearchError::NoAvailableMoves)?;
        info!(
            "chose pit {} at depth {} ({} nodes) in {:?}",
            best.best_move,
            best.depth,
            best.nodes_evaluated,
            start.elapsed()
        );

        Ok(best)
    }
}
