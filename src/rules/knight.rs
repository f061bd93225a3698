//! Knight movement for Isolation
//!
//! A placed piece moves like a chess knight onto a blank cell. Before its
//! first move a piece may be placed on any blank cell.

use crate::board::{Bitboard, Pos};

/// Knight offsets `(dr, dc)`. Move generation follows this order, so it
/// fixes the order in which the search tries moves.
pub const KNIGHT_DIRECTIONS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Blank cells one knight move away from `from`, in [`KNIGHT_DIRECTIONS`] order.
pub fn knight_targets(from: Pos, blanks: &Bitboard) -> impl Iterator<Item = Pos> + '_ {
    KNIGHT_DIRECTIONS
        .iter()
        .map(move |&(dr, dc)| from.offset(dr, dc))
        .filter(move |&to| blanks.contains(to))
}

/// Check whether `a` and `b` are a knight move apart
#[inline]
pub fn is_knight_move(a: Pos, b: Pos) -> bool {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

/// Legal destinations for a piece at `location`.
///
/// An unplaced piece (`None`) may go to any blank cell, in row-major order.
pub fn moves_from(location: Option<Pos>, blanks: &Bitboard) -> Vec<Pos> {
    match location {
        Some(from) => knight_targets(from, blanks).collect(),
        None => blanks.iter().collect(),
    }
}
