pub mod error;
pub mod player;

mod display;
mod notation;


pub use error::PositionParseError;
pub use notation::STARTING_POSITION_NOTATION;
pub use player::Player;

use smallvec::SmallVec;

/// Number of pits on each side of the board.
pub const PITS_PER_PLAYER: usize = 6;
/// Stones placed in every pit at the start of a game.
pub const INITIAL_STONES: u8 = 4;
/// Stones in play for the whole game. Every reachable position holds exactly this many.
pub const TOTAL_STONES: u32 = (2 * PITS_PER_PLAYER as u32) * INITIAL_STONES as u32;
/// Index of the pit adjacent to a player's own store.
pub const CLOSEST_PIT: usize = PITS_PER_PLAYER - 1;

/// Legal moves never exceed the number of pits on one side, so they fit inline.
pub type MoveList = SmallVec<[usize; PITS_PER_PLAYER]>;

/// Represents the state of a mancala board: the stone count of every pit, the two
/// stores, and the side to move. Pit 0 is where a player's sowing starts, pit
/// `PITS_PER_PLAYER - 1` sits next to that player's store.
///
/// Cloning produces a fully independent copy; the search explores hypothetical
/// moves on clones and never touches the caller's board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pits: [[u8; PITS_PER_PLAYER]; 2],
    stores: [u8; 2],
    turn: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pits: [[INITIAL_STONES; PITS_PER_PLAYER]; 2],
            stores: [0; 2],
            turn: Player::One,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        Self::default()
    }

    /// Builds a board from raw counts. The caller is responsible for the stone total;
    /// use `validate_stone_count` to check it.
    pub fn from_parts(pits: [[u8; PITS_PER_PLAYER]; 2], stores: [u8; 2], turn: Player) -> Self {
        Self {
            pits,
            stores,
            turn,
        }
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    pub fn switch_player(&mut self) -> Player {
        self.turn = self.turn.opposite();
        self.turn
    }

    /// Returns a copy of this board with the other side to move.
    pub fn clone_with_switched_player(&self) -> Self {
        let mut board = self.clone();
        board.switch_player();
        board
    }

    pub fn pits(&self, player: Player) -> &[u8; PITS_PER_PLAYER] {
        &self.pits[player.index()]
    }

    pub fn pit(&self, player: Player, index: usize) -> u8 {
        self.pits[player.index()][index]
    }

    pub fn store(&self, player: Player) -> u8 {
        self.stores[player.index()]
    }

    pub fn set_pit(&mut self, player: Player, index: usize, stones: u8) {
        self.pits[player.index()][index] = stones;
    }

    pub fn set_store(&mut self, player: Player, stones: u8) {
        self.stores[player.index()] = stones;
    }

    /// Stones still sitting in the given player's pits.
    pub fn stones_in_play(&self, player: Player) -> u32 {
        self.pits[player.index()].iter().map(|&s| s as u32).sum()
    }

    pub fn total_stones(&self) -> u32 {
        let in_play: u32 = Player::ALL.iter().map(|&p| self.stones_in_play(p)).sum();
        let stored: u32 = self.stores.iter().map(|&s| s as u32).sum();
        in_play + stored
    }

    /// True when the board still holds exactly `TOTAL_STONES`.
    pub fn validate_stone_count(&self) -> bool {
        self.total_stones() == TOTAL_STONES
    }

    /// Pits the side to move can sow from, in ascending order.
    pub fn legal_moves(&self) -> MoveList {
        self.pits[self.turn.index()]
            .iter()
            .enumerate()
            .filter(|(_, stones)| **stones > 0)
            .map(|(pit, _)| pit)
            .collect()
    }

    pub(crate) fn pits_mut(&mut self, player: Player) -> &mut [u8; PITS_PER_PLAYER] {
        &mut self.pits[player.index()]
    }

    pub(crate) fn add_to_store(&mut self, player: Player, stones: u8) {
        self.stores[player.index()] += stones;
    }

    pub(crate) fn remove_from_store(&mut self, player: Player, stones: u8) {
        self.stores[player.index()] -= stones;
    }
}
