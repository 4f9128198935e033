//! The rules of Kalah as played here, including the two house rules: capturing by
//! landing in an empty pit, and the store/closest-pit penalty.
//!
//! Every function operates directly on a `Board`. `make_move` never passes the turn;
//! the caller switches sides when no extra turn was earned, and applies the penalty
//! rule explicitly when it is in play.


use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, MoveList, Player, CLOSEST_PIT, PITS_PER_PLAYER};

/// What happened when a move was submitted to `make_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// False when the move was illegal; the board is then untouched.
    pub applied: bool,
    /// The last stone landed in the mover's own store.
    pub extra_turn: bool,
    /// Stones moved into the mover's store by a capture, including the capturing stone.
    pub captured: u8,
}

impl MoveOutcome {
    pub const REJECTED: MoveOutcome = MoveOutcome {
        applied: false,
        extra_turn: false,
        captured: 0,
    };

    fn sown(extra_turn: bool, captured: u8) -> Self {
        Self {
            applied: true,
            extra_turn,
            captured,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(*player),
            _ => None,
        }
    }

    /// The winner as a plain player number, `-1` for a draw or an unfinished game.
    pub fn winner_code(&self) -> i8 {
        self.winner().map_or(-1, |player| u8::from(player) as i8)
    }
}

/// A move is valid when it names one of the side to move's pits and that pit holds stones.
pub fn is_valid_move(board: &Board, pit: usize) -> bool {
    pit < PITS_PER_PLAYER && board.pit(board.turn(), pit) > 0
}

/// All valid moves for the side to move, in ascending pit order.
pub fn legal_moves(board: &Board) -> MoveList {
    (0..PITS_PER_PLAYER)
        .filter(|&pit| is_valid_move(board, pit))
        .collect()
}

/// Lifts every stone from `pit` and sows them one at a time: the mover's later pits,
/// the mover's store, then the opponent's pits. The opponent's store is skipped.
///
/// Ending in the mover's store earns an extra turn. Ending in a previously empty pit
/// on the mover's side captures the opposite pit, if it holds anything, together with
/// the landing stone.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn make_move(board: &mut Board, pit: usize) -> MoveOutcome {
    if !is_valid_move(board, pit) {
        return MoveOutcome::REJECTED;
    }

    let stones_before = board.total_stones();

    let mover = board.turn();
    let mut stones = board.pit(mover, pit);
    board.pits_mut(mover)[pit] = 0;

    let mut side = mover;
    let mut index = pit + 1;
    let mut last_pit = None;

    while stones > 0 {
        if index >= PITS_PER_PLAYER {
            if side == mover {
                board.add_to_store(mover, 1);
                stones -= 1;
                if stones == 0 {
                    debug_assert_eq!(board.total_stones(), stones_before);
                    return MoveOutcome::sown(true, 0);
                }
            }
            side = side.opposite();
            index = 0;
            continue;
        }

        board.pits_mut(side)[index] += 1;
        stones -= 1;
        last_pit = Some((side, index));
        index += 1;
    }

    let mut captured = 0;
    if let Some((side, landed)) = last_pit {
        if side == mover && board.pit(mover, landed) == 1 {
            let opponent = mover.opposite();
            let opposite = PITS_PER_PLAYER - 1 - landed;
            let opposite_stones = board.pit(opponent, opposite);

            if opposite_stones > 0 {
                board.pits_mut(opponent)[opposite] = 0;
                board.pits_mut(mover)[landed] = 0;
                captured = opposite_stones + 1;
                board.add_to_store(mover, captured);
                debug!(
                    "{} captured {} stones landing in pit {}",
                    mover, captured, landed
                );
            }
        }
    }

    debug_assert_eq!(board.total_stones(), stones_before);
    MoveOutcome::sown(false, captured)
}

/// Checks whether the game has ended. It ends once either side's pits are all empty,
/// or when neither side would have a legal move.
///
/// A finished game is settled on the board itself: each side's remaining stones are
/// swept into its own store before the stores are compared. An unfinished game is
/// left untouched.
pub fn get_game_result(board: &mut Board) -> GameResult {
    let side_is_empty = Player::ALL
        .iter()
        .any(|&player| board.stones_in_play(player) == 0);
    let no_legal_moves = legal_moves(board).is_empty()
        && legal_moves(&board.clone_with_switched_player()).is_empty();

    if !(side_is_empty || no_legal_moves) {
        return GameResult::InProgress;
    }

    for &player in Player::ALL.iter() {
        let remaining = board.stones_in_play(player);
        if remaining > 0 {
            board.add_to_store(player, remaining as u8);
            *board.pits_mut(player) = [0; PITS_PER_PLAYER];
        }
    }

    let (store_one, store_two) = get_score(board);
    if store_one > store_two {
        GameResult::Winner(Player::One)
    } else if store_two > store_one {
        GameResult::Winner(Player::Two)
    } else {
        GameResult::Draw
    }
}

/// The penalty house rule: when the side to move's store holds exactly as many stones
/// as its closest pit, and that count is non-zero, one stone goes back from the store
/// to the closest pit. Returns whether the rule fired.
pub fn apply_penalty_rule(board: &mut Board) -> bool {
    let player = board.turn();
    let store = board.store(player);
    let closest = board.pit(player, CLOSEST_PIT);

    if store != closest || store == 0 {
        return false;
    }

    board.remove_from_store(player, 1);
    board.pits_mut(player)[CLOSEST_PIT] += 1;
    debug!(
        "penalty rule moved a stone from {}'s store back to pit {}",
        player, CLOSEST_PIT
    );
    true
}

/// Store counts as `(player one, player two)`.
pub fn get_score(board: &Board) -> (u8, u8) {
    (board.store(Player::One), board.store(Player::Two))
}

/// Stones still in play on each side as `(player one, player two)`.
pub fn get_available_stones(board: &Board) -> (u32, u32) {
    (
        board.stones_in_play(Player::One),
        board.stones_in_play(Player::Two),
    )
}
