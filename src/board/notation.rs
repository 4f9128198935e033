//! Compact textual notation for mancala positions, used on the command line.
//!
//! `p0,p1,p2,p3,p4,p5/q0,q1,q2,q3,q4,q5 s0,s1 t` lists player one's pits, player
//! two's pits, both stores, and the side to move (`0` or `1`).

use std::convert::TryFrom;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::PositionParseError;
use super::{Board, Player, PITS_PER_PLAYER, TOTAL_STONES};

pub const STARTING_POSITION_NOTATION: &str = "4,4,4,4,4,4/4,4,4,4,4,4 0,0 0";

static NOTATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        ((?:\d{1,2},){5}\d{1,2})   # player one's pits
        /
        ((?:\d{1,2},){5}\d{1,2})   # player two's pits
        \x20
        (\d{1,2}),(\d{1,2})        # stores
        \x20
        ([01])                     # side to move
        $
        ",
    )
    .expect("position notation regex is valid")
});

fn parse_count(value: &str) -> Result<u8, PositionParseError> {
    value
        .parse::<u8>()
        .map_err(|_| PositionParseError::CountOutOfRange {
            value: value.to_string(),
        })
}

fn parse_row(row: &str) -> Result<[u8; PITS_PER_PLAYER], PositionParseError> {
    let mut pits = [0; PITS_PER_PLAYER];
    for (pit, value) in pits.iter_mut().zip(row.split(',')) {
        *pit = parse_count(value)?;
    }
    Ok(pits)
}

impl Board {
    pub fn from_notation(notation: &str) -> Result<Self, PositionParseError> {
        let caps = NOTATION_RE
            .captures(notation.trim())
            .ok_or_else(|| PositionParseError::MalformedNotation {
                notation: notation.to_string(),
            })?;

        let pits = [parse_row(&caps[1])?, parse_row(&caps[2])?];
        let stores = [parse_count(&caps[3])?, parse_count(&caps[4])?];
        let turn = Player::try_from(parse_count(&caps[5])?).map_err(|_| {
            PositionParseError::MalformedNotation {
                notation: notation.to_string(),
            }
        })?;

        let board = Board::from_parts(pits, stores, turn);
        if !board.validate_stone_count() {
            return Err(PositionParseError::WrongStoneTotal {
                found: board.total_stones(),
                expected: TOTAL_STONES,
            });
        }

        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        let row = |player: Player| {
            self.pits(player)
                .iter()
                .map(|stones| stones.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };

        format!(
            "{}/{} {},{} {}",
            row(Player::One),
            row(Player::Two),
            self.store(Player::One),
            self.store(Player::Two),
            u8::from(self.turn())
        )
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = PositionParseError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Self::from_notation(notation)
    }
}
