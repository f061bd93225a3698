//! Board representation for Isolation
//!
//! The search and heuristic core only talk to a board through the
//! [`GameBoard`] trait. [`Board`] is the concrete knight's-move Isolation
//! board used by the engine, the match runner and the tests.

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Default board size (7x7)
pub const DEFAULT_SIZE: usize = 7;
/// Largest number of cells a [`Bitboard`] can hold (16x16)
pub const MAX_CELLS: usize = 256;

/// The two competitors. Only used for identity and turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("player 1"),
            Player::Two => f.write_str("player 2"),
        }
    }
}

/// A cell coordinate, also used as a move (the destination cell).
///
/// Coordinates are signed so that knight offsets can step off the board
/// without wrapping; [`Pos::NONE`] is the "no legal move" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Sentinel for "no legal move available"
    pub const NONE: Pos = Pos { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Pos::NONE
    }

    /// Offset this position by `(dr, dc)`. The result may be off the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Pos {
        Pos::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Pos::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Read-only view of a game state required by the search engine and the
/// heuristics.
///
/// Implementations must be side-effect free: [`GameBoard::apply_move`]
/// returns a new state and leaves the receiver untouched, and
/// [`GameBoard::legal_moves_for`] must produce moves in a stable order
/// (search tie-breaking depends on it).
pub trait GameBoard: Clone + 'static {
    /// Player whose turn it is
    fn active_player(&self) -> Player;

    /// The other player
    fn opponent_of(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Legal destinations for `player`, in a reproducible order
    fn legal_moves_for(&self, player: Player) -> Vec<Pos>;

    /// Legal destinations for the active player
    fn legal_moves(&self) -> Vec<Pos> {
        self.legal_moves_for(self.active_player())
    }

    /// State after the active player moves to `mv`
    fn apply_move(&self, mv: Pos) -> Self;

    /// Terminal payoff for `player`: `0.0` while the game is running,
    /// `+inf` for a win and `-inf` for a loss.
    fn utility(&self, player: Player) -> f64;

    /// All cells that are neither occupied nor blocked
    fn blank_cells(&self) -> Bitboard;

    /// Current location of `player`, `None` before its first move
    fn player_location(&self, player: Player) -> Option<Pos>;

    fn width(&self) -> usize;

    fn height(&self) -> usize;
}
