//! Shared utilities for CLI commands.

use std::time::Duration;

use mancala::alpha_beta_searcher::SearchConfig;
use mancala::board::{Board, STARTING_POSITION_NOTATION};
use mancala::evaluate::EvaluationFunction;
use mancala::game::engine::EngineConfig;
use mancala::game::input_source::InputSource;
use mancala::game::r#loop::GameLoop;
use mancala::game::renderer::GameRenderer;
use structopt::StructOpt;

/// Search and rule options shared by every command that drives an engine.
#[derive(StructOpt)]
pub struct EngineArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(
        long = "time-limit",
        default_value = "5",
        parse(try_from_str = parse_seconds),
        help = "Seconds per move when searching with --iterative"
    )]
    pub time_limit: Duration,
    #[structopt(short, long, default_value = "advanced")]
    pub evaluation: EvaluationFunction,
    #[structopt(
        long = "position",
        default_value = STARTING_POSITION_NOTATION,
        help = "Starting position as `p0,..,p5/q0,..,q5 s0,s1 turn`"
    )]
    pub starting_position: Board,
    #[structopt(long = "no-penalty", help = "Disable the store/closest-pit penalty rule")]
    pub no_penalty: bool,
    #[structopt(long, help = "Use iterative deepening bounded by --time-limit")]
    pub iterative: bool,
}

pub(crate) fn parse_seconds(input: &str) -> Result<Duration, String> {
    let seconds: f64 = input
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", input))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("invalid number of seconds: {}", input));
    }
    Ok(Duration::from_secs_f64(seconds))
}

pub(crate) fn create_config(args: EngineArgs) -> EngineConfig {
    EngineConfig {
        search: SearchConfig::new(args.depth, args.time_limit, args.evaluation),
        starting_position: args.starting_position,
        penalty_rule: !args.no_penalty,
        iterative: args.iterative,
    }
}

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}
