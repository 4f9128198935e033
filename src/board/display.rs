use super::{Board, Player, PITS_PER_PLAYER};
use std::fmt;

/// Renders the board from player one's seat: player two's pits run right to left
/// across the top, player one's left to right along the bottom, with each store at
/// the end its owner sows towards.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let border = format!("     +{}+", "----+".repeat(PITS_PER_PLAYER));

        write!(f, "       ")?;
        for pit in (0..PITS_PER_PLAYER).rev() {
            write!(f, "{:<5}", pit)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", border)?;

        write!(f, "     |")?;
        for &stones in self.pits(Player::Two).iter().rev() {
            write!(f, " {:>2} |", stones)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            " {:>2}  {}  {:<2}",
            self.store(Player::Two),
            " ".repeat(PITS_PER_PLAYER * 5 - 1),
            self.store(Player::One)
        )?;

        write!(f, "     |")?;
        for &stones in self.pits(Player::One).iter() {
            write!(f, " {:>2} |", stones)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", border)?;

        write!(f, "       ")?;
        for pit in 0..PITS_PER_PLAYER {
            write!(f, "{:<5}", pit)?;
        }
        writeln!(f)?;

        write!(f, "To move: {}", self.turn())
    }
}

/// Builds a `Board` from explicit pit rows and stores. Player one moves unless a
/// `turn` is given.
///
/// ```
/// use mancala::mancala_position;
/// use mancala::board::Player;
///
/// let board = mancala_position! {
///     one: [0, 0, 0, 0, 0, 0],
///     two: [1, 0, 0, 0, 0, 0],
///     stores: [23, 24],
///     turn: Player::Two,
/// };
/// assert!(board.validate_stone_count());
/// ```
#[macro_export]
macro_rules! mancala_position {
    (
        one: [$($one:expr),* $(,)?],
        two: [$($two:expr),* $(,)?],
        stores: [$store_one:expr, $store_two:expr]
        $(, turn: $turn:expr)?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut board = $crate::board::Board::from_parts(
            [[$($one),*], [$($two),*]],
            [$store_one, $store_two],
            $crate::board::Player::One,
        );
        $(board.set_turn($turn);)?
        board
    }};
}
