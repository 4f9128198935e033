//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, simulate::SimulateArgs,
    watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "mancala",
    about = "A Kalah mancala engine with alpha-beta search, implemented in Rust"
)]
pub enum Mancala {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches with alpha-beta pruning at the given `--depth` (default: 3), or with `--iterative` deepening bounded by `--time-limit` seconds. Your side is chosen at random unless you specify `--human one|two`. The initial position can be given with `--position` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 3), pausing `--delay` milliseconds between moves."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Print the best pit for the side to move in the position given by `--position`, searched at `--depth` (default: 3)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "simulate",
        about = "Run a round-robin tournament between the built-in agents (random, greedy, minimax, iterative) over `--games` games per pairing (default: 100) and print a results table."
    )]
    Simulate(SimulateArgs),
}

impl crate::cli::commands::Command for Mancala {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            Simulate(cmd),
        }
    }
}
