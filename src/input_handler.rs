//! Pit input parsing for human players.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)$").expect("PIT_RE regex should be valid"));
static EXIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(q|quit|exit)$").expect("EXIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("user exit")]
    UserExit,
    #[error("io error: {error:?}")]
    Io { error: String },
    #[error("not a pit number: {input:?}")]
    NotANumber { input: String },
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    /// A pit on the mover's side, numbered as shown on the board.
    Pit(usize),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if EXIT_RE.is_match(trimmed) {
            return Err(InputError::UserExit);
        }

        PIT_RE
            .captures(trimmed)
            .and_then(|caps| caps[1].parse().ok())
            .map(MoveInput::Pit)
            .ok_or_else(|| InputError::NotANumber {
                input: trimmed.to_string(),
            })
    }
}

/// Reads one line from stdin and parses it as a pit. End of input counts as exit.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::Io {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}
