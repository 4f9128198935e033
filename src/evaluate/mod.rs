use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player, CLOSEST_PIT, PITS_PER_PLAYER};

pub use self::weights::AdvancedWeights;
use self::weights::{STONES_IN_PLAY_WEIGHT, STORE_WEIGHT};

mod weights;

/// Scores a position for one player. Higher is better for `player`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Any `Fn(&Board, Player) -> f64` can be handed to the searchers directly.
impl<F> Evaluator for F
where
    F: Fn(&Board, Player) -> f64,
{
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        self(board, player)
    }
}

/// The built-in evaluation functions, selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvaluationFunction {
    Basic,
    Advanced(AdvancedWeights),
}

impl Default for EvaluationFunction {
    fn default() -> Self {
        EvaluationFunction::Advanced(AdvancedWeights::default())
    }
}

impl Evaluator for EvaluationFunction {
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        match self {
            EvaluationFunction::Basic => basic_evaluation(board, player),
            EvaluationFunction::Advanced(weights) => {
                advanced_evaluation_with_weights(board, player, weights)
            }
        }
    }
}

impl fmt::Display for EvaluationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationFunction::Basic => write!(f, "basic"),
            EvaluationFunction::Advanced(_) => write!(f, "advanced"),
        }
    }
}

// used for parsing cli args
impl FromStr for EvaluationFunction {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(EvaluationFunction::Basic),
            "advanced" => Ok(EvaluationFunction::default()),
            _ => Err("invalid evaluation function; options are: basic, advanced"),
        }
    }
}

/// Store difference plus a smaller credit for stones still on one's own side.
pub fn basic_evaluation(board: &Board, player: Player) -> f64 {
    let opponent = player.opposite();
    let store_diff = board.store(player) as f64 - board.store(opponent) as f64;
    let stones_diff =
        board.stones_in_play(player) as f64 - board.stones_in_play(opponent) as f64;

    store_diff * STORE_WEIGHT + stones_diff * STONES_IN_PLAY_WEIGHT
}

pub fn advanced_evaluation(board: &Board, player: Player) -> f64 {
    advanced_evaluation_with_weights(board, player, &AdvancedWeights::default())
}

/// The basic score refined with positional signals: stones near the store, capture
/// chances on both sides, pits that sow straight into the store, empty pits, and
/// exposure to the penalty rule.
pub fn advanced_evaluation_with_weights(
    board: &Board,
    player: Player,
    weights: &AdvancedWeights,
) -> f64 {
    let opponent = player.opposite();
    let own = board.pits(player);
    let theirs = board.pits(opponent);

    let mut position = 0.0;
    let mut steal = 0.0;
    let mut vulnerability = 0.0;
    let mut extra_turns = 0.0;
    let mut empty_pits = 0.0;

    for pit in 0..PITS_PER_PLAYER {
        let position_weight = (pit + 1) as f64 / PITS_PER_PLAYER as f64;
        position += (own[pit] as f64 - theirs[pit] as f64) * position_weight;

        let opposite = theirs[PITS_PER_PLAYER - 1 - pit];
        if own[pit] == 0 {
            empty_pits += 1.0;
            steal += opposite as f64;
        } else {
            if opposite == 0 {
                vulnerability += own[pit] as f64;
            }
            if (pit + own[pit] as usize) % (PITS_PER_PLAYER + 1) == PITS_PER_PLAYER {
                extra_turns += 1.0;
            }
        }
    }

    let mut penalty_exposure = 0.0;
    if penalty_rule_pending(board, player) {
        penalty_exposure -= 1.0;
    }
    if penalty_rule_pending(board, opponent) {
        penalty_exposure += 1.0;
    }

    basic_evaluation(board, player) * weights.basic
        + position * weights.position
        + steal * weights.steal
        - vulnerability * weights.vulnerability
        + extra_turns * weights.extra_turn
        + empty_pits * weights.empty_pit
        + penalty_exposure * weights.penalty_exposure
}

#[inline(always)]
fn penalty_rule_pending(board: &Board, player: Player) -> bool {
    let store = board.store(player);
    store > 0 && store == board.pit(player, CLOSEST_PIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mancala_position;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_basic_evaluation_of_starting_position() {
        let board = Board::starting_position();
        assert_eq!(basic_evaluation(&board, Player::One), 0.0);
        assert_eq!(basic_evaluation(&board, Player::Two), 0.0);
    }

    #[test]
    fn test_basic_evaluation_weights_stores_and_stones() {
        let board = mancala_position! {
            one: [1, 2, 3, 0, 0, 0],
            two: [0, 0, 0, 0, 0, 2],
            stores: [25, 15],
        };
        // 2.0 * (25 - 15) + 0.5 * (6 - 2)
        assert!((basic_evaluation(&board, Player::One) - 22.0).abs() < EPSILON);
        assert!((basic_evaluation(&board, Player::Two) + 22.0).abs() < EPSILON);
    }

    #[test]
    fn test_advanced_evaluation_of_starting_position() {
        let board = Board::starting_position();
        // only pit 2 (4 stones) sows straight into the store
        let score = advanced_evaluation(&board, Player::One);
        assert!((score - 0.4).abs() < EPSILON, "score was {}", score);
    }

    #[test]
    fn test_advanced_evaluation_follows_store_difference() {
        let mut board = Board::starting_position();
        board.set_store(Player::One, 10);
        board.set_store(Player::Two, 5);
        assert!(advanced_evaluation(&board, Player::One) > 0.0);
        assert!(advanced_evaluation(&board, Player::Two) < 0.0);

        board.set_store(Player::One, 5);
        board.set_store(Player::Two, 10);
        assert!(advanced_evaluation(&board, Player::One) < 0.0);
    }

    #[test]
    fn test_steal_opportunity_is_rewarded() {
        let weights = AdvancedWeights {
            basic: 0.0,
            position: 0.0,
            steal: 1.0,
            vulnerability: 0.0,
            extra_turn: 0.0,
            empty_pit: 0.0,
            penalty_exposure: 0.0,
        };
        let board = mancala_position! {
            one: [0, 4, 4, 4, 4, 4],
            two: [4, 4, 4, 4, 4, 7],
            stores: [4, 1],
        };
        // own pit 0 is empty and faces opponent pit 5
        let score = advanced_evaluation_with_weights(&board, Player::One, &weights);
        assert!((score - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_vulnerable_pits_are_penalised() {
        let weights = AdvancedWeights {
            basic: 0.0,
            position: 0.0,
            steal: 0.0,
            vulnerability: 1.0,
            extra_turn: 0.0,
            empty_pit: 0.0,
            penalty_exposure: 0.0,
        };
        let board = mancala_position! {
            one: [4, 4, 4, 4, 4, 9],
            two: [0, 4, 4, 4, 4, 4],
            stores: [0, 3],
        };
        // own pit 5 holds 9 stones opposite the empty opponent pit 0
        let score = advanced_evaluation_with_weights(&board, Player::One, &weights);
        assert!((score + 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_penalty_exposure_cuts_both_ways() {
        let weights = AdvancedWeights {
            basic: 0.0,
            position: 0.0,
            steal: 0.0,
            vulnerability: 0.0,
            extra_turn: 0.0,
            empty_pit: 0.0,
            penalty_exposure: 1.0,
        };
        let board = mancala_position! {
            one: [2, 2, 2, 2, 2, 5],
            two: [4, 4, 4, 4, 4, 4],
            stores: [5, 4],
        };
        // player one's store matches its closest pit, and so does player two's
        assert_eq!(
            advanced_evaluation_with_weights(&board, Player::One, &weights),
            0.0
        );

        let board = mancala_position! {
            one: [2, 2, 2, 2, 2, 5],
            two: [4, 4, 4, 4, 4, 3],
            stores: [5, 5],
        };
        assert_eq!(
            advanced_evaluation_with_weights(&board, Player::One, &weights),
            -1.0
        );
        assert_eq!(
            advanced_evaluation_with_weights(&board, Player::Two, &weights),
            1.0
        );
    }

    #[test]
    fn test_evaluation_function_dispatch() {
        let board = Board::starting_position();
        assert_eq!(
            EvaluationFunction::Basic.evaluate(&board, Player::One),
            basic_evaluation(&board, Player::One)
        );
        assert_eq!(
            EvaluationFunction::default().evaluate(&board, Player::One),
            advanced_evaluation(&board, Player::One)
        );

        let custom = |board: &Board, player: Player| board.store(player) as f64;
        assert_eq!(custom.evaluate(&board, Player::Two), 0.0);
    }

    #[test]
    fn test_parse_evaluation_function() {
        assert_eq!(
            "basic".parse::<EvaluationFunction>(),
            Ok(EvaluationFunction::Basic)
        );
        assert_eq!(
            "advanced".parse::<EvaluationFunction>(),
            Ok(EvaluationFunction::Advanced(AdvancedWeights::default()))
        );
        assert!("greedy".parse::<EvaluationFunction>().is_err());
    }
}
