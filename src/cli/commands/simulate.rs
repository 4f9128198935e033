//! Simulate command - round-robin tournament between the built-in agents.

use std::time::Duration;

use mancala::game::agent::Agent;
use mancala::game::tournament::Simulation;
use structopt::StructOpt;

use super::util::parse_seconds;
use super::Command;

#[derive(StructOpt)]
pub struct SimulateArgs {
    #[structopt(long = "games", default_value = "100")]
    pub num_games: usize,
    #[structopt(long = "max-moves", default_value = "200")]
    pub max_moves_per_game: usize,
    #[structopt(
        long = "agents",
        use_delimiter = true,
        default_value = "random,greedy,minimax,iterative"
    )]
    pub agents: Vec<String>,
    #[structopt(short, long, default_value = "3", help = "Depth of the minimax agent")]
    pub depth: u8,
    #[structopt(
        long = "time-limit",
        default_value = "2",
        parse(try_from_str = parse_seconds),
        help = "Seconds per move for the iterative deepening agent"
    )]
    pub time_limit: Duration,
    #[structopt(long = "penalty", help = "Play with the store/closest-pit penalty rule")]
    pub penalty: bool,
}

fn build_agent(name: &str, depth: u8, time_limit: Duration) -> Result<Agent, &'static str> {
    let agent: Agent = name.parse()?;
    Ok(match agent {
        Agent::Minimax(_) => Agent::minimax(depth),
        Agent::IterativeDeepening(_) => Agent::iterative_deepening(time_limit),
        other => other,
    })
}

impl Command for SimulateArgs {
    fn execute(self) {
        let mut agents = Vec::with_capacity(self.agents.len());
        for name in &self.agents {
            match build_agent(name, self.depth, self.time_limit) {
                Ok(agent) => agents.push(agent),
                Err(err) => {
                    eprintln!("{}: {}", name, err);
                    std::process::exit(1);
                }
            }
        }

        let simulation = Simulation {
            penalty_rule: self.penalty,
            ..Simulation::new(self.num_games, self.max_moves_per_game)
        };
        let results = simulation.run_tournament(&mut agents);
        println!("{}", results);
    }
}
