//! Minimax and alpha-beta search with iterative deepening
//!
//! This module implements the core search algorithm for the Isolation agent.
//! Scores are always taken from the point of view of the player to move at
//! the root (the maximizer), whatever the ply.
//!
//! # Features
//!
//! - Plain depth-limited minimax
//! - Alpha-beta pruning over the same tree
//! - Iterative deepening that keeps the last fully completed depth
//! - Cooperative time checks before every node expansion
//!
//! # Example
//!
//! ```
//! use isolation::board::{Board, GameBoard, Pos};
//! use isolation::eval::OpenMoveRatio;
//! use isolation::search::{SearchMethod, Searcher};
//!
//! let searcher: Searcher<Board> =
//!     Searcher::new(Box::new(OpenMoveRatio), SearchMethod::AlphaBeta, 10.0);
//! let board = Board::new(5, 5).apply_move(Pos::new(2, 2)).apply_move(Pos::new(0, 0));
//!
//! let result = searcher.search(&board, 3, &|| 1000.0).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, Player, Pos};
use crate::error::{ConfigError, Timeout};
use crate::eval::Evaluator;

use super::timer::TimeGovernor;

/// Tree search algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchMethod {
    #[default]
    #[serde(rename = "minimax")]
    Minimax,
    #[serde(rename = "alphabeta", alias = "alpha_beta")]
    AlphaBeta,
}

impl SearchMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha_beta" => Ok(SearchMethod::AlphaBeta),
            other => Err(ConfigError::UnknownMethod(other.to_string())),
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded (each one passed a time check)
    pub nodes: u64,
    /// Heuristic evaluations
    pub leaves: u64,
    /// Sibling lists cut short by alpha-beta
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move of the last completed depth, if any
    pub best_move: Option<Pos>,
    /// Score of that move for the root player
    pub score: f64,
    /// Last depth that completed (0 if none did)
    pub depth: u32,
    /// Work done, including any aborted depth
    pub stats: SearchStats,
    /// Whether the time budget ran out
    pub aborted: bool,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            depth: 0,
            stats: SearchStats::default(),
            aborted: false,
        }
    }
}

// =============================================================================
// Worker: per-turn search state
// =============================================================================

/// Per-turn search state: the root player, the time guard and counters.
struct Worker<'a, B: GameBoard> {
    evaluator: &'a dyn Evaluator<B>,
    governor: TimeGovernor<'a>,
    player: Player,
    method: SearchMethod,
    stats: SearchStats,
}

impl<'a, B: GameBoard> Worker<'a, B> {
    /// Search the root to `depth` with the configured algorithm.
    fn run(&mut self, game: &B, depth: u32) -> Result<(f64, Option<Pos>), Timeout> {
        match self.method {
            SearchMethod::Minimax => self.minimax(game, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(game, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Heuristic value of a leaf for the root player.
    fn evaluate(&mut self, game: &B) -> f64 {
        self.stats.leaves += 1;
        let score = self.evaluator.score(game, self.player);
        assert!(
            !score.is_nan(),
            "evaluator `{}` returned NaN",
            self.evaluator.name()
        );
        score
    }

    /// Plain minimax. Ties keep the first move in legal-move order.
    fn minimax(
        &mut self,
        game: &B,
        depth: u32,
        maximizing: bool,
    ) -> Result<(f64, Option<Pos>), Timeout> {
        self.governor.check()?;
        self.stats.nodes += 1;

        let moves = game.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok((self.evaluate(game), None));
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for mv in moves {
            let (score, _) = self.minimax(&game.apply_move(mv), depth - 1, !maximizing)?;
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            // The first move stands in until something strictly better turns up
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(mv);
            }
        }

        Ok((best_score, best_move))
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// The local bound is raised (maximizer) or lowered (minimizer) to the
    /// best score whenever it improves; the cutoff compares the child's own
    /// score against the bound received from the parent.
    fn alphabeta(
        &mut self,
        game: &B,
        depth: u32,
        alpha: f64,
        beta: f64,
        maximizing: bool,
    ) -> Result<(f64, Option<Pos>), Timeout> {
        self.governor.check()?;
        self.stats.nodes += 1;

        let moves = game.legal_moves();
        if depth == 0 || moves.is_empty() {
            return Ok((self.evaluate(game), None));
        }

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;
        let (mut new_alpha, mut new_beta) = (alpha, beta);

        for mv in moves {
            let (score, _) =
                self.alphabeta(&game.apply_move(mv), depth - 1, new_alpha, new_beta, !maximizing)?;
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
                if maximizing {
                    new_alpha = best_score;
                } else {
                    new_beta = best_score;
                }
            } else if best_move.is_none() {
                best_move = Some(mv);
            }

            if (maximizing && score >= beta) || (!maximizing && score <= alpha) {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((best_score, best_move))
    }
}

// =============================================================================
// Searcher: public API
// =============================================================================

/// Game-tree searcher with a pluggable evaluation strategy.
///
/// # Example
///
/// ```
/// use isolation::board::Board;
/// use isolation::eval::PhaseAdaptive;
/// use isolation::search::{SearchMethod, Searcher};
///
/// let searcher: Searcher<Board> =
///     Searcher::new(Box::new(PhaseAdaptive::default()), SearchMethod::Minimax, 10.0);
/// let result = searcher.search_iterative(&Board::new(3, 3), &|| 1000.0);
/// assert_eq!(result.depth, 9);
/// ```
pub struct Searcher<B: GameBoard> {
    evaluator: Box<dyn Evaluator<B>>,
    method: SearchMethod,
    threshold_ms: f64,
}

impl<B: GameBoard> Searcher<B> {
    pub fn new(evaluator: Box<dyn Evaluator<B>>, method: SearchMethod, threshold_ms: f64) -> Self {
        Self {
            evaluator,
            method,
            threshold_ms,
        }
    }

    #[inline]
    pub fn method(&self) -> SearchMethod {
        self.method
    }

    #[inline]
    pub fn evaluator(&self) -> &dyn Evaluator<B> {
        self.evaluator.as_ref()
    }

    fn worker<'a>(&'a self, game: &B, time_left: &'a dyn Fn() -> f64) -> Worker<'a, B> {
        Worker {
            evaluator: self.evaluator.as_ref(),
            governor: TimeGovernor::new(time_left, self.threshold_ms),
            player: game.active_player(),
            method: self.method,
            stats: SearchStats::default(),
        }
    }

    /// Fixed-depth search from the player to move.
    ///
    /// Returns `Err(Timeout)` if the budget runs out before the tree is done;
    /// no partial move is ever reported.
    pub fn search(
        &self,
        game: &B,
        depth: u32,
        time_left: &dyn Fn() -> f64,
    ) -> Result<SearchResult, Timeout> {
        let mut worker = self.worker(game, time_left);
        let (score, best_move) = worker.run(game, depth)?;
        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: worker.stats,
            aborted: false,
        })
    }

    /// Iterative deepening search.
    ///
    /// Searches depth 1, 2, ... until the depth exceeds the number of blank
    /// cells or the time budget runs out. The result always belongs to the
    /// deepest search that finished; an aborted depth is discarded.
    pub fn search_iterative(&self, game: &B, time_left: &dyn Fn() -> f64) -> SearchResult {
        let mut worker = self.worker(game, time_left);
        let mut best = SearchResult::default();
        let max_depth = game.blank_cells().len() as u32;

        for depth in 1..=max_depth {
            match worker.run(game, depth) {
                Ok((score, best_move)) => {
                    trace!("depth {depth}: score {score:.3}, move {best_move:?}");
                    best.best_move = best_move;
                    best.score = score;
                    best.depth = depth;
                }
                Err(Timeout) => {
                    debug!(
                        "time budget exhausted at depth {depth}, keeping depth {} result",
                        best.depth
                    );
                    best.aborted = true;
                    break;
                }
            }
        }

        best.stats = worker.stats;
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::{EvaluatorKind, OpenMoveRatio, UtilityScore};
    use std::cell::Cell;

    const UNLIMITED: fn() -> f64 = || f64::INFINITY;

    fn searcher(eval: Box<dyn Evaluator<Board>>, method: SearchMethod) -> Searcher<Board> {
        Searcher::new(eval, method, 10.0)
    }

    fn small_boards() -> Vec<Board> {
        vec![
            Board::new(3, 3),
            Board::new(3, 3).apply_move(Pos::new(0, 0)),
            Board::new(3, 3)
                .apply_move(Pos::new(0, 0))
                .apply_move(Pos::new(2, 2)),
            Board::new(4, 4),
            Board::new(4, 4)
                .apply_move(Pos::new(0, 0))
                .apply_move(Pos::new(3, 3)),
            Board::new(4, 4)
                .apply_move(Pos::new(1, 1))
                .apply_move(Pos::new(2, 2)),
            Board::new(4, 4)
                .apply_move(Pos::new(1, 1))
                .apply_move(Pos::new(0, 3))
                .apply_move(Pos::new(3, 2)),
        ]
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("minimax".parse::<SearchMethod>().unwrap(), SearchMethod::Minimax);
        assert_eq!("alphabeta".parse::<SearchMethod>().unwrap(), SearchMethod::AlphaBeta);
        assert!(matches!(
            "mcts".parse::<SearchMethod>(),
            Err(ConfigError::UnknownMethod(name)) if name == "mcts"
        ));
    }

    #[test]
    fn test_alphabeta_matches_minimax_scores() {
        let kinds = [
            EvaluatorKind::OpenMoveRatio,
            EvaluatorKind::Drilldown,
            EvaluatorKind::PhaseAdaptive,
            EvaluatorKind::Centroid,
            EvaluatorKind::LongestPath,
            EvaluatorKind::OpenPositions,
            EvaluatorKind::Aggressive,
        ];

        for kind in kinds {
            let minimax = searcher(kind.build(), SearchMethod::Minimax);
            let alphabeta = searcher(kind.build(), SearchMethod::AlphaBeta);
            for board in small_boards() {
                for depth in 1..=4 {
                    let a = minimax.search(&board, depth, &UNLIMITED).unwrap();
                    let b = alphabeta.search(&board, depth, &UNLIMITED).unwrap();
                    assert_eq!(
                        a.score,
                        b.score,
                        "{kind} at depth {depth} on\n{board}"
                    );
                    assert!(b.stats.nodes <= a.stats.nodes);
                }
            }
        }
    }

    #[test]
    fn test_alphabeta_prunes() {
        let board = Board::new(5, 5)
            .apply_move(Pos::new(2, 2))
            .apply_move(Pos::new(0, 0));
        let minimax = searcher(Box::new(OpenMoveRatio), SearchMethod::Minimax);
        let alphabeta = searcher(Box::new(OpenMoveRatio), SearchMethod::AlphaBeta);

        let a = minimax.search(&board, 4, &UNLIMITED).unwrap();
        let b = alphabeta.search(&board, 4, &UNLIMITED).unwrap();
        assert_eq!(a.stats.cutoffs, 0);
        assert!(b.stats.cutoffs > 0);
        assert!(b.stats.nodes < a.stats.nodes);
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Every child of the opening position scores 0 under raw utility
        let board = Board::new(5, 5);
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let result = searcher(Box::new(UtilityScore), method)
                .search(&board, 1, &UNLIMITED)
                .unwrap();
            assert_eq!(result.best_move, Some(Pos::new(0, 0)));
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn test_finds_winning_move() {
        // Player two at (3,3) on 4x4 with (2,1) blocked can only escape to
        // (1,2). Player one at (2,0) can take it and win.
        let board = Board::with_blocked(4, 4, &[Pos::new(2, 1)])
            .unwrap()
            .apply_move(Pos::new(2, 0))
            .apply_move(Pos::new(3, 3));
        assert_eq!(
            board.legal_moves(),
            vec![Pos::new(0, 1), Pos::new(1, 2), Pos::new(3, 2)]
        );
        assert_eq!(board.legal_moves_for(Player::Two), vec![Pos::new(1, 2)]);

        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let result = searcher(Box::new(OpenMoveRatio), method)
                .search(&board, 2, &UNLIMITED)
                .unwrap();
            assert_eq!(result.best_move, Some(Pos::new(1, 2)));
            assert_eq!(result.score, f64::INFINITY);
        }
    }

    #[test]
    fn test_all_moves_losing_still_returns_move() {
        // Player one at (0,0) on 3x3 must go to (1,2); player two then
        // takes (2,0) and player one is stuck.
        let board = Board::with_blocked(3, 3, &[Pos::new(2, 1)])
            .unwrap()
            .apply_move(Pos::new(0, 0))
            .apply_move(Pos::new(0, 1));
        assert_eq!(board.legal_moves(), vec![Pos::new(1, 2)]);

        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let result = searcher(Box::new(UtilityScore), method)
                .search(&board, 3, &UNLIMITED)
                .unwrap();
            assert_eq!(result.best_move, Some(Pos::new(1, 2)));
            assert_eq!(result.score, f64::NEG_INFINITY);
        }
    }

    #[test]
    fn test_timeout_propagates() {
        let board = Board::new(4, 4);
        let expired = || 0.0;
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let result = searcher(Box::new(OpenMoveRatio), method).search(&board, 2, &expired);
            assert_eq!(result.unwrap_err(), Timeout);
        }
    }

    #[test]
    fn test_iterative_keeps_last_completed_depth() {
        let board = Board::new(7, 7)
            .apply_move(Pos::new(3, 3))
            .apply_move(Pos::new(0, 0));

        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let searcher = searcher(Box::new(OpenMoveRatio), method);
            let d1 = searcher.search(&board, 1, &UNLIMITED).unwrap();
            let d2 = searcher.search(&board, 2, &UNLIMITED).unwrap();
            let d3 = searcher.search(&board, 3, &UNLIMITED).unwrap();
            assert!(d3.stats.nodes > 1);

            // Budget runs out halfway through depth 3
            let budget = d1.stats.nodes + d2.stats.nodes + d3.stats.nodes / 2;
            let calls = Cell::new(0u64);
            let time_left = || {
                calls.set(calls.get() + 1);
                if calls.get() > budget {
                    0.0
                } else {
                    1000.0
                }
            };

            let result = searcher.search_iterative(&board, &time_left);
            assert!(result.aborted);
            assert_eq!(result.depth, 2);
            assert_eq!(result.best_move, d2.best_move);
            assert_eq!(result.score, d2.score);
            assert_eq!(calls.get(), budget + 1);
        }
    }

    #[test]
    fn test_iterative_stops_at_blank_count() {
        // Five blank cells left: depth never exceeds 5
        let board = Board::with_blocked(3, 3, &[Pos::new(0, 1), Pos::new(1, 0)])
            .unwrap()
            .apply_move(Pos::new(0, 0))
            .apply_move(Pos::new(2, 2));
        assert_eq!(board.blank_cells().len(), 5);

        let result = searcher(Box::new(OpenMoveRatio), SearchMethod::AlphaBeta)
            .search_iterative(&board, &UNLIMITED);
        assert!(!result.aborted);
        assert_eq!(result.depth, 5);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_iterative_abort_before_first_depth() {
        let board = Board::new(4, 4);
        let result = searcher(Box::new(OpenMoveRatio), SearchMethod::Minimax)
            .search_iterative(&board, &|| 0.0);
        assert!(result.aborted);
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    #[should_panic(expected = "returned NaN")]
    fn test_nan_evaluator_fails_loudly() {
        let nan = |_: &Board, _: Player| f64::NAN;
        let searcher: Searcher<Board> = Searcher::new(Box::new(nan), SearchMethod::Minimax, 10.0);
        let _ = searcher.search(&Board::new(3, 3), 1, &UNLIMITED);
    }
}
