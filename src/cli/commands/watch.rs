//! Watch command - watch the computer play against itself.

use std::time::Duration;

use mancala::game::input_source::EngineInput;
use mancala::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let delay = Duration::from_millis(self.delay_ms);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(delay).filter(|d| !d.is_zero()),
            },
            create_config(self.engine),
        );
    }
}
