//! Play command - play a game against the computer.

use mancala::board::Player;
use mancala::game::input_source::ConditionalInput;
use mancala::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(long = "human", default_value = "random")]
    pub human: Player,
}

impl Command for PlayArgs {
    fn execute(self) {
        let human_player = self.human;
        let config = create_config(self.engine);
        run_game_loop(
            ConditionalInput { human_player },
            ConditionalStatsRenderer { human_player },
            config,
        );
    }
}
