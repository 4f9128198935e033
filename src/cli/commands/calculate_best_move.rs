//! Calculate best move command - determine the best move from a position.

use mancala::game::engine::{Engine, EngineError};
use structopt::StructOpt;

use super::util::{create_config, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.engine));

        match engine.get_best_move() {
            Ok(best_move) => {
                let stats = engine.get_search_stats();
                println!("{}", best_move);
                eprintln!(
                    "depth {}, {} positions searched, score {}",
                    stats.depth,
                    stats.positions_searched,
                    stats.last_score.map_or("-".to_string(), |s| format!("{:.2}", s))
                );
            }
            Err(EngineError::GameOver) => {
                eprintln!("There are no valid moves in the given position.")
            }
            Err(err) => {
                eprintln!("Failed to calculate best move: {}", err);
                std::process::exit(1);
            }
        }
    }
}
