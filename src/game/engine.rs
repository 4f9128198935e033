use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::alpha_beta_searcher::{
    AlphaBetaSearcher, IterativeDeepeningSearcher, SearchConfig, SearchError,
};
use crate::board::{Board, MoveList, Player};
use crate::input_handler::MoveInput;
use crate::rules::{self, GameResult};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub starting_position: Board,
    /// Apply the store/closest-pit penalty after every move.
    pub penalty_rule: bool,
    /// Search with iterative deepening under `search.time_limit` instead of a
    /// fixed-depth search to `search.max_depth`.
    pub iterative: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                max_depth: 3,
                ..SearchConfig::default()
            },
            starting_position: Board::default(),
            penalty_rule: true,
            iterative: false,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("invalid move: pit {pit}")]
    InvalidMove { pit: usize },
    #[error("the game is over")]
    GameOver,
    #[error("search error: {error}")]
    Search { error: SearchError },
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::NoAvailableMoves => EngineError::GameOver,
            error => EngineError::Search { error },
        }
    }
}

/// Everything that happened during one ply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnOutcome {
    pub player: Player,
    pub pit: usize,
    pub extra_turn: bool,
    pub captured: u8,
    pub penalty_applied: bool,
    pub result: GameResult,
}

/// Plays one ply on `board`: sow (and capture), apply the penalty rule for the mover
/// when enabled, settle the game if it has ended, and pass the turn unless the mover
/// earned another. The turn is left with the mover once the game is over.
pub fn play_ply(
    board: &mut Board,
    pit: usize,
    penalty_rule: bool,
) -> Result<TurnOutcome, EngineError> {
    let player = board.turn();
    let outcome = rules::make_move(board, pit);
    if !outcome.applied {
        return Err(EngineError::InvalidMove { pit });
    }

    let penalty_applied = penalty_rule && rules::apply_penalty_rule(board);
    let result = rules::get_game_result(board);

    if !result.is_over() && !outcome.extra_turn {
        board.switch_player();
    }

    Ok(TurnOutcome {
        player,
        pit,
        extra_turn: outcome.extra_turn,
        captured: outcome.captured,
        penalty_applied,
        result,
    })
}

/// Game state and runtime info
#[derive(Clone, Debug)]
struct GameState {
    board: Board,
    move_history: Vec<TurnOutcome>,
    result: GameResult,
    last_score: Option<f64>,
}

impl GameState {
    fn new(starting_position: Board) -> Self {
        let mut board = starting_position;
        let result = rules::get_game_result(&mut board);
        Self {
            board,
            move_history: Vec::new(),
            result,
            last_score: None,
        }
    }
}

enum Searcher {
    FixedDepth(AlphaBetaSearcher),
    Iterative(IterativeDeepeningSearcher),
}

/// Drives a single game: validates and plays moves, tracks history, and asks the
/// configured searcher for the computer's moves.
pub struct Engine {
    state: GameState,
    searcher: Searcher,
    penalty_rule: bool,
    last_depth: u8,
    last_nodes: usize,
    last_search_duration: Option<Duration>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let searcher = if config.iterative {
            Searcher::Iterative(IterativeDeepeningSearcher::with_config(&config.search))
        } else {
            Searcher::FixedDepth(AlphaBetaSearcher::with_config(&config.search))
        };

        Self {
            state: GameState::new(config.starting_position),
            searcher,
            penalty_rule: config.penalty_rule,
            last_depth: 0,
            last_nodes: 0,
            last_search_duration: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn result(&self) -> GameResult {
        self.state.result
    }

    pub fn check_game_over(&self) -> Option<GameResult> {
        Some(self.state.result).filter(GameResult::is_over)
    }

    pub fn get_valid_moves(&self) -> MoveList {
        if self.state.result.is_over() {
            return MoveList::new();
        }
        rules::legal_moves(&self.state.board)
    }

    pub fn last_move(&self) -> Option<&TurnOutcome> {
        self.state.move_history.last()
    }

    pub fn move_history(&self) -> &[TurnOutcome] {
        &self.state.move_history
    }

    pub fn play_move(&mut self, pit: usize) -> Result<TurnOutcome, EngineError> {
        if self.state.result.is_over() {
            return Err(EngineError::GameOver);
        }

        let outcome = play_ply(&mut self.state.board, pit, self.penalty_rule)?;
        debug!(
            "{} played pit {} (extra turn: {}, captured: {})",
            outcome.player, pit, outcome.extra_turn, outcome.captured
        );

        self.state.result = outcome.result;
        self.state.move_history.push(outcome);
        Ok(outcome)
    }

    pub fn get_best_move(&mut self) -> Result<usize, EngineError> {
        if self.state.result.is_over() {
            return Err(EngineError::GameOver);
        }

        let board = &self.state.board;
        let (result, duration) = match &mut self.searcher {
            Searcher::FixedDepth(searcher) => {
                let result = searcher.search(board)?;
                (result, searcher.last_search_duration())
            }
            Searcher::Iterative(searcher) => {
                let start = std::time::Instant::now();
                let result = searcher.search(board)?;
                (result, Some(start.elapsed()))
            }
        };

        self.state.last_score = Some(result.score);
        self.last_depth = result.depth;
        self.last_nodes = result.nodes_evaluated;
        self.last_search_duration = duration;

        Ok(result.best_move)
    }

    pub fn make_best_move(&mut self) -> Result<TurnOutcome, EngineError> {
        let pit = self.get_best_move()?;
        self.play_move(pit)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<TurnOutcome, EngineError> {
        match input {
            MoveInput::Pit(pit) => self.play_move(pit),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.last_nodes,
            depth: self.last_depth,
            last_score: self.state.last_score,
            last_search_duration: self.last_search_duration,
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<f64>,
    pub last_search_duration: Option<Duration>,
}
