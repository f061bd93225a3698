//! Heuristic evaluation strategies for Isolation positions
//!
//! Every strategy maps `(board, player)` to a desirability score for
//! `player`. A finished game always scores as its utility (`+inf` / `-inf`),
//! whatever the strategy would otherwise compute.

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{GameBoard, Player};
use crate::rules::is_knight_move;

use super::reach::{drill_value, longest_path, DRILL_DEPTH, LONGEST_PATH_DEPTH};
use super::Evaluator;

/// Blank fraction at or above which [`PhaseAdaptive`] uses its open-board strategy
pub const OPEN_BOARD_THRESHOLD: f64 = 0.6;

/// Threshold of the longest-path phase preset
pub const LONGEST_PATH_THRESHOLD: f64 = 0.5;

/// Utility of a finished game, `None` while it is still running
#[inline]
fn terminal<B: GameBoard>(game: &B, player: Player) -> Option<f64> {
    let utility = game.utility(player);
    (utility != 0.0).then_some(utility)
}

/// Uniform random score in `[0, 1)`. Baseline for comparisons.
pub struct RandomScore {
    rng: RefCell<Xoshiro256PlusPlus>,
}

impl RandomScore {
    /// Seeded from the thread RNG
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomScore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GameBoard> Evaluator<B> for RandomScore {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        self.rng.borrow_mut().random::<f64>()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Raw terminal utility: 0 for every running game.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityScore;

impl<B: GameBoard> Evaluator<B> for UtilityScore {
    fn score(&self, game: &B, player: Player) -> f64 {
        game.utility(player)
    }

    fn name(&self) -> &'static str {
        "utility"
    }
}

/// Ratio of the player's legal move count to the opponent's.
///
/// `+inf` when the opponent has no move. When the opponent is to move and
/// can reach one of the player's destinations first, the ratio is reduced
/// by `1 / opponent_moves`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveRatio;

impl<B: GameBoard> Evaluator<B> for OpenMoveRatio {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        let my_moves = game.legal_moves_for(player);
        let opp_moves = game.legal_moves_for(game.opponent_of(player));
        if opp_moves.is_empty() {
            return f64::INFINITY;
        }

        let opp_count = opp_moves.len() as f64;
        let mut result = my_moves.len() as f64 / opp_count;
        if player != game.active_player() && my_moves.iter().any(|m| opp_moves.contains(m)) {
            result -= 1.0 / opp_count;
        }
        result
    }

    fn name(&self) -> &'static str {
        "open_move_ratio"
    }
}

/// Ratio of the player's drill value to the opponent's.
///
/// Each side's reachability is discounted by the other side's current
/// legal moves when that side is not to move. `+inf` when the opponent's
/// drill value is zero.
#[derive(Debug, Clone, Copy)]
pub struct Drilldown {
    pub depth: u32,
}

impl Default for Drilldown {
    fn default() -> Self {
        Self { depth: DRILL_DEPTH }
    }
}

impl Drilldown {
    fn side_value<B: GameBoard>(&self, game: &B, side: Player) -> f64 {
        let blanks = game.blank_cells();
        match game.player_location(side) {
            Some(loc) => {
                let other_moves = game.legal_moves_for(game.opponent_of(side));
                let is_active = side == game.active_player();
                drill_value(loc, blanks, is_active, &other_moves, self.depth)
            }
            // An unplaced piece reaches every blank cell in one step
            None => blanks.len() as f64,
        }
    }
}

impl<B: GameBoard> Evaluator<B> for Drilldown {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        let mine = self.side_value(game, player);
        let theirs = self.side_value(game, game.opponent_of(player));
        if theirs == 0.0 {
            return f64::INFINITY;
        }
        mine / theirs
    }

    fn name(&self) -> &'static str {
        "drilldown"
    }
}

/// Switches strategy by game phase.
///
/// While the fraction of blank cells is at least `threshold` the board is
/// open and the cheap `open` strategy is used; below it the `closed`
/// strategy takes over.
pub struct PhaseAdaptive<B: GameBoard> {
    threshold: f64,
    open: Box<dyn Evaluator<B>>,
    closed: Box<dyn Evaluator<B>>,
}

impl<B: GameBoard> PhaseAdaptive<B> {
    pub fn new(threshold: f64, open: Box<dyn Evaluator<B>>, closed: Box<dyn Evaluator<B>>) -> Self {
        Self {
            threshold,
            open,
            closed,
        }
    }

    /// Open-move ratio on an open board, longest path once half the board is gone
    pub fn longest_path() -> Self {
        Self::new(
            LONGEST_PATH_THRESHOLD,
            Box::new(OpenMoveRatio),
            Box::new(LongestPath::default()),
        )
    }

    /// Fraction of the board that is still blank
    pub fn blank_fraction(game: &B) -> f64 {
        game.blank_cells().len() as f64 / (game.width() * game.height()) as f64
    }

    /// Strategy used for `game`
    pub fn select(&self, game: &B) -> &dyn Evaluator<B> {
        if Self::blank_fraction(game) >= self.threshold {
            self.open.as_ref()
        } else {
            self.closed.as_ref()
        }
    }
}

impl<B: GameBoard> Default for PhaseAdaptive<B> {
    fn default() -> Self {
        Self::new(
            OPEN_BOARD_THRESHOLD,
            Box::new(OpenMoveRatio),
            Box::new(Drilldown::default()),
        )
    }
}

impl<B: GameBoard> Evaluator<B> for PhaseAdaptive<B> {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        self.select(game).score(game, player)
    }

    fn name(&self) -> &'static str {
        "phase_adaptive"
    }
}

/// Manhattan distance of the player from the board centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentroidScore;

impl<B: GameBoard> Evaluator<B> for CentroidScore {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        let Some(loc) = game.player_location(player) else {
            return 0.0;
        };
        let center_row = game.height() as f64 / 2.0;
        let center_col = game.width() as f64 / 2.0;
        (f64::from(loc.row) - center_row).abs() + (f64::from(loc.col) - center_col).abs()
    }

    fn name(&self) -> &'static str {
        "centroid"
    }
}

/// Difference between the longest knight paths of the two players.
#[derive(Debug, Clone, Copy)]
pub struct LongestPath {
    pub depth: u32,
}

impl Default for LongestPath {
    fn default() -> Self {
        Self {
            depth: LONGEST_PATH_DEPTH,
        }
    }
}

impl LongestPath {
    fn side_value<B: GameBoard>(&self, game: &B, side: Player) -> f64 {
        let blanks = game.blank_cells();
        let len = match game.player_location(side) {
            Some(loc) => longest_path(loc, blanks, self.depth),
            None => (blanks.len() as u32).min(self.depth),
        };
        f64::from(len)
    }
}

impl<B: GameBoard> Evaluator<B> for LongestPath {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        self.side_value(game, player) - self.side_value(game, game.opponent_of(player))
    }

    fn name(&self) -> &'static str {
        "longest_path"
    }
}

/// Mobility of the side to move, nudged by how close the two pieces are.
///
/// The active side's move count is moved by -0.5 when the players are a
/// knight move apart and +0.5 otherwise, then signed positive if `player`
/// is to move and negative if not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

impl<B: GameBoard> Evaluator<B> for Aggressive {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        let side = if player == game.active_player() { 1.0 } else { -1.0 };
        let mut result = game.legal_moves().len() as f64;

        let mine = game.player_location(player);
        let theirs = game.player_location(game.opponent_of(player));
        if let (Some(mine), Some(theirs)) = (mine, theirs) {
            if is_knight_move(mine, theirs) {
                result -= 0.5;
            } else {
                result += 0.5;
            }
        }
        result * side
    }

    fn name(&self) -> &'static str {
        "aggressive"
    }
}

/// Move count of the side to move, signed by whose turn it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenPositions;

impl<B: GameBoard> Evaluator<B> for OpenPositions {
    fn score(&self, game: &B, player: Player) -> f64 {
        if let Some(utility) = terminal(game, player) {
            return utility;
        }
        let side = if player == game.active_player() { 1.0 } else { -1.0 };
        game.legal_moves().len() as f64 * side
    }

    fn name(&self) -> &'static str {
        "open_positions"
    }
}
