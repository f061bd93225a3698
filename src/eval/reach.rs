//! Reachability analysis over knight moves
//!
//! Both functions explore the tree of knight paths through blank cells.
//! Each recursive branch gets its own copy of the blank set (a `Copy`
//! [`Bitboard`]) with the visited cell removed, so sibling paths never
//! interfere and a path never revisits a cell.
//!
//! Cost grows like `8^max_depth`, so depths must stay small.

use crate::board::{Bitboard, Pos};
use crate::rules::knight_targets;

/// Default recursion depth for [`drill_value`]
pub const DRILL_DEPTH: u32 = 5;

/// Default recursion depth for [`longest_path`]
pub const LONGEST_PATH_DEPTH: u32 = 6;

/// Depth-weighted reachability ("drill value") of `loc`.
///
/// Sums `depth` over every knight path of length up to `max_depth` through
/// `blanks`, where `depth` is the 1-based step at which a path reaches a
/// cell. When the evaluated side is not to move, the first step is
/// discounted by `(k - 1) / k` if `k` of its destinations are also in
/// `opp_moves` (the opponent may take one of them first). Deeper steps
/// are never contested.
///
/// Returns 0 when `blanks` is empty or `max_depth` is 0.
pub fn drill_value(
    loc: Pos,
    blanks: Bitboard,
    is_active: bool,
    opp_moves: &[Pos],
    max_depth: u32,
) -> f64 {
    drill(loc, blanks, is_active, opp_moves, max_depth, 1)
}

fn drill(
    loc: Pos,
    blanks: Bitboard,
    is_active: bool,
    opp_moves: &[Pos],
    max_depth: u32,
    depth: u32,
) -> f64 {
    if blanks.is_empty() || max_depth == 0 {
        return 0.0;
    }

    let contested = if !is_active && !opp_moves.is_empty() {
        knight_targets(loc, &blanks)
            .filter(|mv| opp_moves.contains(mv))
            .count()
    } else {
        0
    };
    let reduction = if contested == 0 {
        1.0
    } else {
        (contested - 1) as f64 / contested as f64
    };

    knight_targets(loc, &blanks)
        .map(|mv| {
            let deeper = drill(mv, blanks.without(mv), false, &[], max_depth - 1, depth + 1);
            reduction * (f64::from(depth) + deeper)
        })
        .sum()
}

/// Length of the longest knight path from `loc` through `blanks`, capped
/// at `max_depth` steps. A piece with no move has path length 0.
pub fn longest_path(loc: Pos, blanks: Bitboard, max_depth: u32) -> u32 {
    if max_depth == 0 {
        return 0;
    }
    knight_targets(loc, &blanks)
        .map(|mv| 1 + longest_path(mv, blanks.without(mv), max_depth - 1))
        .max()
        .unwrap_or(0)
}
