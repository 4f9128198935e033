use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::input_handler::InputError;
use crate::rules::GameResult;

use super::input_source::InputSource;
use super::renderer::GameRenderer;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input,
            renderer,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs until the game ends or the human quits. Returns the final result.
    pub fn run(&mut self) -> GameResult {
        loop {
            let current_turn = self.engine.board().turn();
            let last_move = self.engine.last_move().copied();
            self.renderer
                .render(&mut self.ui, &self.engine, current_turn, last_move.as_ref());

            if let Some(result) = self.engine.check_game_over() {
                match result {
                    GameResult::Winner(player) => println!("Game over: {} wins!", player),
                    _ => println!("Game over: draw!"),
                }
                let (one, two) = crate::rules::get_score(self.engine.board());
                println!("Final score: {} - {}", one, two);
                return result;
            }

            match self.input.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(_) => {
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(EngineError::InvalidMove { pit }) => {
                        println!("Pit {} is not a legal move", pit)
                    }
                    Err(error) => {
                        println!("error: {}", error);
                        return self.engine.result();
                    }
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => return self.engine.result(),
                Err(error) => println!("error: {}", error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::input_source::EngineInput;
    use crate::game::renderer::StatsRenderer;

    #[test]
    fn test_computer_plays_itself_to_the_end() {
        let mut game = GameLoop::new(
            EngineInput,
            StatsRenderer {
                delay_between_moves: None,
            },
            EngineConfig {
                penalty_rule: false,
                ..EngineConfig::default()
            },
        );

        let result = game.run();
        assert!(result.is_over());
        assert!(game.engine().board().validate_stone_count());
        assert!(!game.engine().move_history().is_empty());
    }
}
