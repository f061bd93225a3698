//! Game-playing agent
//!
//! [`AIEngine`] is the single entry point a game driver talks to. Each turn
//! the driver hands it the board, the legal moves and a query for the
//! milliseconds left; the engine searches with its configured algorithm and
//! evaluator and answers with a move before the budget runs out.
//!
//! # Example
//!
//! ```
//! use isolation::{AIEngine, Board, GameBoard};
//!
//! let engine: AIEngine = AIEngine::new();
//! let board = Board::new(3, 3);
//! let mv = engine.choose_move(&board, &board.legal_moves(), &|| 1000.0);
//! assert!(board.legal_moves().contains(&mv));
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, GameBoard, Pos};
use crate::config::{validate_threshold, AgentConfig, DEFAULT_SEARCH_DEPTH};
use crate::error::{ConfigError, Timeout};
use crate::eval::{Evaluator, EvaluatorKind};
use crate::search::{SearchMethod, SearchResult, Searcher, DEFAULT_THRESHOLD_MS};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move to play; [`Pos::NONE`] when there was none
    pub best_move: Pos,
    /// Score of the move for the player to move; NaN for a fallback move
    /// (`depth == 0`), which was never scored
    pub score: f64,
    /// Deepest completed search depth (0 if the move is a fallback)
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Whether the search ran out of time
    pub aborted: bool,
}

impl MoveResult {
    #[inline]
    fn no_move() -> Self {
        Self {
            best_move: Pos::NONE,
            score: f64::NEG_INFINITY,
            depth: 0,
            nodes: 0,
            time_ms: 0,
            aborted: false,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, fallback: Pos, time_ms: u64) -> Self {
        let (best_move, score) = match result.best_move {
            Some(mv) => (mv, result.score),
            None => (fallback, f64::NAN),
        };
        Self {
            best_move,
            score,
            depth: result.depth,
            nodes: result.stats.nodes,
            time_ms,
            aborted: result.aborted,
        }
    }
}

/// Isolation agent.
///
/// # Configuration
///
/// - Evaluation strategy (any [`Evaluator`])
/// - Minimax or alpha-beta
/// - Fixed depth or iterative deepening
/// - Time threshold below which the search aborts
pub struct AIEngine<B: GameBoard = Board> {
    searcher: Searcher<B>,
    /// Depth of the fixed-depth search
    search_depth: u32,
    iterative: bool,
}

impl<B: GameBoard> AIEngine<B> {
    /// Create an engine with default settings.
    ///
    /// Defaults: depth 3, phase-adaptive evaluator, iterative deepening,
    /// minimax, 10 ms threshold.
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(
                EvaluatorKind::default().build(),
                SearchMethod::default(),
                DEFAULT_THRESHOLD_MS,
            ),
            search_depth: DEFAULT_SEARCH_DEPTH,
            iterative: true,
        }
    }

    /// Create an engine with explicit settings.
    ///
    /// `method` is `"minimax"` or `"alphabeta"`; anything else is rejected
    /// here rather than at the first move.
    pub fn configure(
        search_depth: u32,
        evaluator: Box<dyn Evaluator<B>>,
        iterative: bool,
        method: &str,
        timer_threshold_ms: f64,
    ) -> Result<Self, ConfigError> {
        if search_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        validate_threshold(timer_threshold_ms)?;
        let method: SearchMethod = method.parse()?;

        Ok(Self {
            searcher: Searcher::new(evaluator, method, timer_threshold_ms),
            search_depth,
            iterative,
        })
    }

    /// Create an engine from a configuration file section.
    pub fn from_config(config: &AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(
                config.evaluator.build(),
                config.method,
                config.timer_threshold_ms,
            ),
            search_depth: config.search_depth,
            iterative: config.iterative,
        })
    }

    #[inline]
    pub fn search_depth(&self) -> u32 {
        self.search_depth
    }

    #[inline]
    pub fn iterative(&self) -> bool {
        self.iterative
    }

    #[inline]
    pub fn method(&self) -> SearchMethod {
        self.searcher.method()
    }

    /// Name of the configured evaluator
    #[inline]
    pub fn evaluator_name(&self) -> &'static str {
        self.searcher.evaluator().name()
    }

    /// Pick a move for the player to move.
    ///
    /// Returns [`Pos::NONE`] when `legal_moves` is empty.
    pub fn choose_move(&self, board: &B, legal_moves: &[Pos], time_left: &dyn Fn() -> f64) -> Pos {
        self.choose_move_with_stats(board, legal_moves, time_left)
            .best_move
    }

    /// Pick a move and report how the search went.
    pub fn choose_move_with_stats(
        &self,
        board: &B,
        legal_moves: &[Pos],
        time_left: &dyn Fn() -> f64,
    ) -> MoveResult {
        let Some(&fallback) = legal_moves.first() else {
            return MoveResult::no_move();
        };

        let start = Instant::now();
        let result = if self.iterative {
            self.searcher.search_iterative(board, time_left)
        } else {
            match self.searcher.search(board, self.search_depth, time_left) {
                Ok(result) => result,
                Err(Timeout) => {
                    debug!("depth {} search ran out of time", self.search_depth);
                    SearchResult {
                        aborted: true,
                        ..SearchResult::default()
                    }
                }
            }
        };
        let time_ms = start.elapsed().as_millis() as u64;

        if result.best_move.is_none() {
            debug!("no depth completed, falling back to {fallback}");
        }
        let result = MoveResult::from_search(result, fallback, time_ms);
        debug!(
            "{} ({}) chose {} at depth {}: score {:.3}, {} nodes in {}ms",
            self.evaluator_name(),
            self.method(),
            result.best_move,
            result.depth,
            result.score,
            result.nodes,
            result.time_ms
        );
        result
    }
}

impl<B: GameBoard> Default for AIEngine<B> {
    fn default() -> Self {
        Self::new()
    }
}
