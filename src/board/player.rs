use rand::seq::SliceRandom;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// One of the two sides of the board. `One` always moves first from the
/// starting position.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row of the board owned by this player.
    #[inline(always)]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn random() -> Self {
        Self::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Player::One)
    }
}

impl TryFrom<u8> for Player {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::One),
            1 => Ok(Player::Two),
            _ => Err("invalid player value (must be 0 or 1)"),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player as u8
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player one",
            Player::Two => "player two",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "one" | "1" => Ok(Player::One),
            "two" | "2" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: one, two, random"),
        }
    }
}
