use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::{Board, Player};

use super::engine::TurnOutcome;

pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
            clear_screen: true,
        }
    }

    /// A display that appends frames instead of redrawing the terminal.
    pub fn scrolling() -> Self {
        Self {
            clear_screen: false,
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
        }
    }

    /// Builds one frame: the board, whose turn it is, the last ply, and optional stats.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Player,
        last_move: Option<&TurnOutcome>,
        stats: Option<&str>,
    ) {
        self.clear();

        let _ = writeln!(self.buffer, "{}\n", board);
        let _ = writeln!(self.buffer, "Turn: {}", current_turn);

        if let Some(last) = last_move {
            let _ = write!(self.buffer, "Last move: {} played pit {}", last.player, last.pit);
            if last.captured > 0 {
                let _ = write!(self.buffer, ", captured {}", last.captured);
            }
            if last.extra_turn {
                let _ = write!(self.buffer, ", extra turn");
            }
            if last.penalty_applied {
                let _ = write!(self.buffer, ", penalty");
            }
            self.buffer.push('\n');
        }

        if let Some(stats) = stats {
            let _ = writeln!(self.buffer, "\n{}", stats);
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
