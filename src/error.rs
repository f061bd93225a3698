//! Error types

use thiserror::Error;

use crate::board::{Player, Pos};

/// Abort signal raised when the turn's time budget drops below the
/// configured threshold. It unwinds the whole in-progress search and is
/// only handled by the iterative deepening driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search aborted: time budget exhausted")]
pub struct Timeout;

/// Invalid board construction or move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unsupported board size {width}x{height} (1..=256 cells)")]
    UnsupportedSize { width: usize, height: usize },
    #[error("{0} is off the board")]
    OutOfBounds(Pos),
    #[error("{0} is already occupied")]
    Occupied(Pos),
    #[error("{player} cannot move to {mv}")]
    IllegalMove { player: Player, mv: Pos },
}

/// Rejected agent or match configuration. Raised at construction time,
/// never from inside a search.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid search method `{0}` (expected `minimax` or `alphabeta`)")]
    UnknownMethod(String),
    #[error("unknown evaluator `{0}`")]
    UnknownEvaluator(String),
    #[error("search depth must be strictly positive")]
    InvalidDepth,
    #[error("timer threshold must be a non-negative number of milliseconds, got {0}")]
    InvalidThreshold(f64),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
