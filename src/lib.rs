//! Isolation game-playing agent
//!
//! A time-bounded adversarial search engine for knight's-move Isolation:
//! - Rectangular board of up to 256 cells, blocked cells allowed
//! - Each player places its piece anywhere on its first move
//! - Afterwards pieces move like chess knights onto blank cells
//! - Visited cells are closed for good; a player with no move loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and the [`GameBoard`] trait
//! - [`rules`]: Knight-move generation
//! - [`eval`]: Heuristic evaluators and reachability analysis
//! - [`search`]: Minimax, alpha-beta, iterative deepening and time control
//! - [`engine`]: Agent that picks a move under a time budget
//! - [`game`]: Match runner alternating two agents
//! - [`config`]: Agent and match configuration
//!
//! # Quick Start
//!
//! ```
//! use isolation::{AIEngine, Board, GameBoard, Pos};
//!
//! let engine: AIEngine = AIEngine::configure(
//!     3,
//!     isolation::EvaluatorKind::Drilldown.build(),
//!     false,
//!     "alphabeta",
//!     10.0,
//! )
//! .unwrap();
//!
//! let board = Board::new(5, 5).apply_move(Pos::new(2, 2));
//! let mv = engine.choose_move(&board, &board.legal_moves(), &|| 100.0);
//! assert!(board.is_legal(mv));
//! ```
//!
//! # Time Control
//!
//! The caller passes a "milliseconds left" query with every move request.
//! The search checks it before expanding each node and unwinds as soon as
//! the remaining time drops below the configured threshold; iterative
//! deepening then answers with the deepest search that finished.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameBoard, Player, Pos};
pub use config::{AgentConfig, MatchConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, Timeout};
pub use eval::{Evaluator, EvaluatorKind};
pub use game::{play_match, MatchOutcome, WinReason};
pub use search::{SearchMethod, Searcher};
