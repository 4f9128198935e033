use std::time::Duration;

use crate::board::Player;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, TurnOutcome};

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Player,
        last_move: Option<&TurnOutcome>,
    );
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {})\n* Move took: {}",
        stats
            .last_score
            .map_or("-".to_string(), |s| format!("{:.2}", s)),
        stats.positions_searched,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Player,
        last_move: Option<&TurnOutcome>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_turn, last_move, Some(&stats_display));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_player: Player,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Player,
        last_move: Option<&TurnOutcome>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_turn, last_move, Some(&stats_display));
        if current_turn == self.human_player {
            println!("Enter a pit (0-5), or q to quit:");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
