//! Isolation board with per-player locations

use std::fmt;

use super::bitboard::Bitboard;
use super::{GameBoard, Player, Pos, DEFAULT_SIZE, MAX_CELLS};
use crate::error::BoardError;
use crate::rules::moves_from;

/// Isolation game board.
///
/// Every cell a player has stood on becomes permanently unavailable. The
/// board is a small `Copy`-friendly value; moves produce new boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells that are neither occupied nor blocked
    blanks: Bitboard,
    /// Current location of each player, `None` until the first move
    locations: [Option<Pos>; 2],
    /// Player to move
    active: Player,
    /// Number of plies played
    move_count: u32,
}

impl Board {
    /// Create an empty `width` x `height` board with player one to move.
    ///
    /// # Panics
    ///
    /// Panics on a zero dimension or more than 256 cells; use
    /// [`Board::try_new`] for sizes that come from user input.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            blanks: Bitboard::full(width, height),
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    /// Create an empty board, rejecting unsupported sizes.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width * height > MAX_CELLS {
            return Err(BoardError::UnsupportedSize { width, height });
        }
        Ok(Self::new(width, height))
    }

    /// Create a board with some cells blocked before play starts
    pub fn with_blocked(
        width: usize,
        height: usize,
        blocked: &[Pos],
    ) -> Result<Self, BoardError> {
        let mut board = Self::try_new(width, height)?;
        for &pos in blocked {
            if !board.blanks.in_bounds(pos) {
                return Err(BoardError::OutOfBounds(pos));
            }
            board.blanks.remove(pos);
        }
        Ok(board)
    }

    /// Number of plies played so far
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Check if `pos` is a blank cell
    #[inline]
    pub fn is_blank(&self, pos: Pos) -> bool {
        self.blanks.contains(pos)
    }

    /// Game over when the active player cannot move
    pub fn is_over(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Winner of a finished game
    pub fn winner(&self) -> Option<Player> {
        self.is_over().then(|| self.active.opponent())
    }

    /// Check whether the active player may move to `mv`
    pub fn is_legal(&self, mv: Pos) -> bool {
        match self.locations[self.active.index()] {
            None => self.blanks.contains(mv),
            Some(from) => self.blanks.contains(mv) && crate::rules::is_knight_move(from, mv),
        }
    }

    /// Apply a move after validating it.
    pub fn try_apply_move(&self, mv: Pos) -> Result<Self, BoardError> {
        if !self.blanks.in_bounds(mv) {
            return Err(BoardError::OutOfBounds(mv));
        }
        if !self.blanks.contains(mv) {
            return Err(BoardError::Occupied(mv));
        }
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove {
                player: self.active,
                mv,
            });
        }
        Ok(self.forecast(mv))
    }

    fn forecast(&self, mv: Pos) -> Self {
        let mut next = self.clone();
        next.blanks.remove(mv);
        next.locations[self.active.index()] = Some(mv);
        next.active = self.active.opponent();
        next.move_count += 1;
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl GameBoard for Board {
    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, player: Player) -> Vec<Pos> {
        moves_from(self.locations[player.index()], &self.blanks)
    }

    fn apply_move(&self, mv: Pos) -> Self {
        debug_assert!(self.is_legal(mv), "illegal move {mv} for {}", self.active);
        self.forecast(mv)
    }

    fn utility(&self, player: Player) -> f64 {
        if !self.legal_moves().is_empty() {
            return 0.0;
        }
        if player == self.active {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    #[inline]
    fn blank_cells(&self) -> Bitboard {
        self.blanks
    }

    #[inline]
    fn player_location(&self, player: Player) -> Option<Pos> {
        self.locations[player.index()]
    }

    #[inline]
    fn width(&self) -> usize {
        self.blanks.width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.blanks.height()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() as i32 {
            for col in 0..self.width() as i32 {
                let pos = Pos::new(row, col);
                let cell = if self.locations[0] == Some(pos) {
                    '1'
                } else if self.locations[1] == Some(pos) {
                    '2'
                } else if self.blanks.contains(pos) {
                    '.'
                } else {
                    '-'
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
