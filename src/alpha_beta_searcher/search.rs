//! Minimax search with alpha-beta pruning over mancala positions.
//!
//! # Turn semantics
//!
//! A node is maximizing while the side being optimized is the one acting. A move that
//! earns an extra turn keeps the same side acting, so the child keeps the parent's role;
//! any other move passes the turn and flips the role.
//!
//! # Leaf scores
//!
//! Finished games score `+inf`/`-inf`/`0` from the point of view of the player who was
//! to move at the root, never from the side acting deep in the tree. Positions where the
//! depth budget runs out are scored by the evaluator for whichever side is to move in
//! that position.
//!
//! # Pruning
//!
//! Alpha (what the maximizer is already guaranteed) and beta (what the minimizer is
//! already guaranteed) are threaded through the recursion; the remaining siblings of a
//! node are skipped as soon as `beta <= alpha`. Pruning never changes the chosen move
//! or its score relative to a full minimax search.

use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Player};
use crate::evaluate::{EvaluationFunction, Evaluator};
use crate::rules::{self, GameResult};

use super::SearchConfig;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

/// The outcome of one "pick a move" call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub best_move: usize,
    pub score: f64,
    pub nodes_evaluated: usize,
    pub depth: u8,
}

/// Statistics collected during search.
#[derive(Default)]
struct SearchStats {
    nodes_evaluated: usize,
    last_score: Option<f64>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        self.nodes_evaluated = 0;
        self.last_score = None;
        self.last_duration = None;
    }

    fn record_result(&mut self, score: f64, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

pub struct AlphaBetaSearcher<E = EvaluationFunction> {
    max_depth: u8,
    evaluator: E,
    stats: SearchStats,
}

impl AlphaBetaSearcher<EvaluationFunction> {
    pub fn with_config(config: &SearchConfig) -> Self {
        Self::new(config.max_depth, config.evaluation)
    }
}

impl<E: Evaluator> AlphaBetaSearcher<E> {
    pub fn new(max_depth: u8, evaluator: E) -> Self {
        Self {
            max_depth,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: u8) {
        self.max_depth = max_depth;
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nodes visited by the last search, leaves included.
    pub fn nodes_evaluated(&self) -> usize {
        self.stats.nodes_evaluated
    }

    pub fn last_score(&self) -> Option<f64> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn get_best_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        self.search(board).map(|result| result.best_move)
    }

    /// Searches every legal move of the side to move and returns the best one.
    ///
    /// Ties go to the lowest pit. If no move scores above `-inf` the first legal move
    /// is returned.
    ///
    /// # Returns
    ///
    /// - `Err(SearchError::DepthTooLow)` - If the configured depth is 0
    /// - `Err(SearchError::NoAvailableMoves)` - If the side to move cannot move
    #[must_use = "search returns the best move found"]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    pub fn search(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        if self.max_depth < 1 {
            return Err(SearchError::DepthTooLow);
        }

        self.stats.reset();
        let start = Instant::now();
        let root_player = board.turn();
        let candidates = rules::legal_moves(board);
        let first_move = *candidates.first().ok_or(SearchError::NoAvailableMoves)?;

        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for &pit in candidates.iter() {
            let (mut child, extra_turn) = match play_on_copy(board, pit) {
                Some(child) => child,
                None => continue,
            };

            let score = self.minimax(
                &mut child,
                self.max_depth - 1,
                alpha,
                beta,
                extra_turn,
                root_player,
            );
            debug!("depth {} pit {} scored {}", self.max_depth, pit, score);

            if score > best_score {
                best_score = score;
                best_move = Some(pit);
            }
            alpha = alpha.max(best_score);
        }

        let best_move = best_move.unwrap_or(first_move);
        self.stats.record_result(best_score, start.elapsed());

        Ok(SearchResult {
            best_move,
            score: best_score,
            nodes_evaluated: self.stats.nodes_evaluated,
            depth: self.max_depth,
        })
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        root_player: Player,
    ) -> f64 {
        self.stats.nodes_evaluated += 1;

        match rules::get_game_result(board) {
            GameResult::Winner(winner) if winner == root_player => return f64::INFINITY,
            GameResult::Winner(_) => return f64::NEG_INFINITY,
            GameResult::Draw => return 0.0,
            GameResult::InProgress => {}
        }

        if depth == 0 {
            return self.evaluator.evaluate(board, board.turn());
        }

        let candidates = rules::legal_moves(board);
        if candidates.is_empty() {
            return self.evaluator.evaluate(board, board.turn());
        }

        if maximizing {
            let mut max_eval = f64::NEG_INFINITY;
            for &pit in candidates.iter() {
                let (mut child, extra_turn) = match play_on_copy(board, pit) {
                    Some(child) => child,
                    None => continue,
                };

                let score =
                    self.minimax(&mut child, depth - 1, alpha, beta, extra_turn, root_player);
                max_eval = max_eval.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = f64::INFINITY;
            for &pit in candidates.iter() {
                let (mut child, extra_turn) = match play_on_copy(board, pit) {
                    Some(child) => child,
                    None => continue,
                };

                let score =
                    self.minimax(&mut child, depth - 1, alpha, beta, !extra_turn, root_player);
                min_eval = min_eval.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

/// Plays `pit` on a copy of `board`, passing the turn unless the move earned another.
/// Returns the new position and whether the mover keeps the turn.
fn play_on_copy(board: &Board, pit: usize) -> Option<(Board, bool)> {
    let mut child = board.clone();
    let outcome = rules::make_move(&mut child, pit);
    if !outcome.applied {
        return None;
    }
    if !outcome.extra_turn {
        child.switch_player();
    }
    Some((child, outcome.extra_turn))
}
