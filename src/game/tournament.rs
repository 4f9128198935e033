//! Agent-vs-agent matches and round-robin tournaments.

use std::fmt;

use log::{info, warn};

use crate::board::{Board, Player};
use crate::rules::GameResult;

use super::agent::Agent;
use super::engine::{play_ply, EngineError};

pub const DEFAULT_NUM_GAMES: usize = 100;
pub const DEFAULT_MAX_MOVES_PER_GAME: usize = 200;

/// Tallies from `agent1`'s point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl MatchResult {
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(Player::One) => self.wins += 1,
            GameResult::Winner(Player::Two) => self.losses += 1,
            GameResult::Draw | GameResult::InProgress => self.draws += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentRecord {
    pub name: String,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl AgentRecord {
    pub fn win_rate(&self) -> f64 {
        let total = self.wins + self.losses + self.draws;
        if total == 0 {
            0.0
        } else {
            self.wins as f64 / total as f64
        }
    }
}

/// Accumulated per-agent results, in the order the agents entered the tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TournamentResults {
    records: Vec<AgentRecord>,
}

impl TournamentResults {
    pub fn records(&self) -> &[AgentRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&AgentRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    fn entry(&mut self, name: &str) -> &mut AgentRecord {
        match self.records.iter().position(|record| record.name == name) {
            Some(index) => &mut self.records[index],
            None => {
                self.records.push(AgentRecord {
                    name: name.to_string(),
                    ..AgentRecord::default()
                });
                let last = self.records.len() - 1;
                &mut self.records[last]
            }
        }
    }
}

impl fmt::Display for TournamentResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(60);
        writeln!(f, "Tournament Results:")?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "{:<20} {:<10} {:<10} {:<10} {:<10}",
            "Agent", "Wins", "Losses", "Draws", "Win Rate"
        )?;
        writeln!(f, "{}", rule)?;
        for record in &self.records {
            writeln!(
                f,
                "{:<20} {:<10} {:<10} {:<10} {:.2}%",
                record.name,
                record.wins,
                record.losses,
                record.draws,
                record.win_rate() * 100.0
            )?;
        }
        Ok(())
    }
}

/// Plays agents against each other from a fixed starting position.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub num_games: usize,
    pub max_moves_per_game: usize,
    pub penalty_rule: bool,
    pub starting_position: Board,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            num_games: DEFAULT_NUM_GAMES,
            max_moves_per_game: DEFAULT_MAX_MOVES_PER_GAME,
            penalty_rule: false,
            starting_position: Board::starting_position(),
        }
    }
}

impl Simulation {
    pub fn new(num_games: usize, max_moves_per_game: usize) -> Self {
        Self {
            num_games,
            max_moves_per_game,
            ..Self::default()
        }
    }

    /// Plays `num_games` games with `agent1` as player one and `agent2` as player two.
    pub fn run_match(&self, agent1: &mut Agent, agent2: &mut Agent) -> MatchResult {
        let mut result = MatchResult::default();

        for game in 0..self.num_games {
            let outcome = self.play_game(game, agent1, agent2);
            result.record(outcome);
        }

        info!(
            "{} vs {}: {} wins, {} losses, {} draws",
            agent1, agent2, result.wins, result.losses, result.draws
        );
        result
    }

    /// Plays every pair of agents once, in entry order.
    pub fn run_tournament(&self, agents: &mut [Agent]) -> TournamentResults {
        let mut results = TournamentResults::default();
        for agent in agents.iter() {
            results.entry(agent.name());
        }

        for i in 0..agents.len() {
            for j in (i + 1)..agents.len() {
                let (head, tail) = agents.split_at_mut(j);
                let (agent1, agent2) = (&mut head[i], &mut tail[0]);

                info!("running match: {} vs {}", agent1, agent2);
                let outcome = self.run_match(agent1, agent2);

                let first = results.entry(agent1.name());
                first.wins += outcome.wins;
                first.losses += outcome.losses;
                first.draws += outcome.draws;

                let second = results.entry(agent2.name());
                second.wins += outcome.losses;
                second.losses += outcome.wins;
                second.draws += outcome.draws;
            }
        }

        results
    }

    /// Plays out one game. A game cut short by the move limit, an agent failure, or a
    /// broken stone count comes back as `InProgress` and is tallied as a draw.
    fn play_game(&self, game: usize, agent1: &mut Agent, agent2: &mut Agent) -> GameResult {
        let mut board = self.starting_position.clone();
        let mut moves = 0;

        while moves < self.max_moves_per_game {
            if !board.validate_stone_count() {
                warn!("game {}: stone count is off, abandoning", game);
                return GameResult::InProgress;
            }

            let agent = match board.turn() {
                Player::One => &mut *agent1,
                Player::Two => &mut *agent2,
            };

            let pit = match agent.choose_move(&board) {
                Ok(pit) => pit,
                Err(error) => {
                    warn!("game {}: {} could not move: {}", game, agent, error);
                    return GameResult::InProgress;
                }
            };

            match play_ply(&mut board, pit, self.penalty_rule) {
                Ok(outcome) if outcome.result.is_over() => return outcome.result,
                Ok(_) => moves += 1,
                Err(EngineError::InvalidMove { pit }) => {
                    warn!("game {}: {} chose invalid pit {}", game, agent, pit);
                    return GameResult::InProgress;
                }
                Err(error) => {
                    warn!("game {}: {}", game, error);
                    return GameResult::InProgress;
                }
            }
        }

        warn!(
            "game {} exceeded the limit of {} moves",
            game, self.max_moves_per_game
        );
        GameResult::InProgress
    }
}
