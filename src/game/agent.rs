use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, IterativeDeepeningSearcher, SearchError};
use crate::board::Board;
use crate::evaluate::EvaluationFunction;
use crate::rules;

pub const DEFAULT_MINIMAX_DEPTH: u8 = 3;
pub const DEFAULT_ITERATIVE_MAX_DEPTH: u8 = 10;
pub const DEFAULT_ITERATIVE_TIME_LIMIT: Duration = Duration::from_secs(5);

/// A move-choosing strategy. Every agent answers with a legal pit for the side to
/// move, or `NoAvailableMoves` when there is none.
pub enum Agent {
    /// Uniform choice among the legal moves.
    Random(StdRng),
    /// The move with the largest immediate gain in the mover's own store.
    Greedy,
    Minimax(AlphaBetaSearcher),
    IterativeDeepening(IterativeDeepeningSearcher),
}

impl Agent {
    pub fn random() -> Self {
        Agent::Random(StdRng::from_entropy())
    }

    pub fn random_seeded(seed: u64) -> Self {
        Agent::Random(StdRng::seed_from_u64(seed))
    }

    pub fn greedy() -> Self {
        Agent::Greedy
    }

    pub fn minimax(depth: u8) -> Self {
        Agent::Minimax(AlphaBetaSearcher::new(depth, EvaluationFunction::default()))
    }

    pub fn iterative_deepening(time_limit: Duration) -> Self {
        Agent::IterativeDeepening(IterativeDeepeningSearcher::new(
            DEFAULT_ITERATIVE_MAX_DEPTH,
            time_limit,
            EvaluationFunction::default(),
        ))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Agent::Random(_) => "Random",
            Agent::Greedy => "Greedy",
            Agent::Minimax(_) => "Minimax",
            Agent::IterativeDeepening(_) => "IterativeDeepening",
        }
    }

    pub fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        match self {
            Agent::Random(rng) => rules::legal_moves(board)
                .choose(rng)
                .copied()
                .ok_or(SearchError::NoAvailableMoves),
            Agent::Greedy => greedy_move(board),
            Agent::Minimax(searcher) => searcher.get_best_move(board),
            Agent::IterativeDeepening(searcher) => {
                searcher.get_best_move(board).map(|(pit, _depth)| pit)
            }
        }
    }
}

fn greedy_move(board: &Board) -> Result<usize, SearchError> {
    let mover = board.turn();
    let before = board.store(mover);
    let candidates = rules::legal_moves(board);

    let mut best: Option<(usize, u8)> = None;
    for &pit in candidates.iter() {
        let mut child = board.clone();
        if !rules::make_move(&mut child, pit).applied {
            continue;
        }
        let gain = child.store(mover) - before;
        if best.map_or(true, |(_, best_gain)| gain > best_gain) {
            best = Some((pit, gain));
        }
    }

    best.map(|(pit, _)| pit)
        .or_else(|| candidates.first().copied())
        .ok_or(SearchError::NoAvailableMoves)
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent({})", self.name())
    }
}

// used for parsing cli args
impl FromStr for Agent {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Agent::random()),
            "greedy" => Ok(Agent::greedy()),
            "minimax" => Ok(Agent::minimax(DEFAULT_MINIMAX_DEPTH)),
            "iterative" | "iterativedeepening" | "iterative-deepening" => {
                Ok(Agent::iterative_deepening(DEFAULT_ITERATIVE_TIME_LIMIT))
            }
            _ => Err("invalid agent; options are: random, greedy, minimax, iterative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::mancala_position;

    fn all_agents() -> Vec<Agent> {
        vec![
            Agent::random_seeded(3),
            Agent::greedy(),
            Agent::minimax(2),
            Agent::iterative_deepening(Duration::from_millis(50)),
        ]
    }

    #[test]
    fn test_agents_choose_legal_moves() {
        let board = mancala_position! {
            one: [0, 3, 0, 5, 0, 1],
            two: [4, 4, 4, 4, 4, 4],
            stores: [6, 9],
        };
        let legal = rules::legal_moves(&board);

        for mut agent in all_agents() {
            let pit = agent.choose_move(&board).unwrap();
            assert!(legal.contains(&pit), "{} chose pit {}", agent, pit);
        }
    }

    #[test]
    fn test_agents_report_no_moves() {
        let board = mancala_position! {
            one: [4, 4, 4, 4, 4, 4],
            two: [0, 0, 0, 0, 0, 0],
            stores: [10, 14],
            turn: Player::Two,
        };

        for mut agent in all_agents() {
            assert_eq!(
                agent.choose_move(&board),
                Err(SearchError::NoAvailableMoves),
                "{}",
                agent
            );
        }
    }

    #[test]
    fn test_greedy_prefers_biggest_store_gain() {
        // pits 1 and 2 both end in the empty pit 4 and capture the 6 stones opposite
        let board = mancala_position! {
            one: [1, 3, 2, 0, 0, 1],
            two: [4, 6, 4, 4, 4, 4],
            stores: [5, 10],
        };
        assert_eq!(Agent::greedy().choose_move(&board), Ok(1));
    }

    #[test]
    fn test_greedy_breaks_ties_by_lowest_pit() {
        // pits 0 and 1 fall short of the store, pits 2 to 5 each gain one stone
        let board = Board::starting_position();
        assert_eq!(Agent::greedy().choose_move(&board), Ok(2));
    }

    #[test]
    fn test_seeded_random_agents_repeat() {
        let board = Board::starting_position();
        let mut first = Agent::random_seeded(99);
        let mut second = Agent::random_seeded(99);
        for _ in 0..10 {
            assert_eq!(first.choose_move(&board), second.choose_move(&board));
        }
    }

    #[test]
    fn test_parse_agent() {
        assert_eq!("greedy".parse::<Agent>().unwrap().name(), "Greedy");
        assert_eq!("Minimax".parse::<Agent>().unwrap().name(), "Minimax");
        assert_eq!(
            "iterative".parse::<Agent>().unwrap().name(),
            "IterativeDeepening"
        );
        assert!("alphazero".parse::<Agent>().is_err());
    }
}
