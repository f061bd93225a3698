//! Game rules for Isolation
//!
//! This module implements the movement rules shared by the board and the
//! reachability heuristics:
//! - Knight offsets and target generation
//! - Free placement before a piece's first move

pub mod knight;

// Re-exports for convenient access
pub use knight::{is_knight_move, knight_targets, moves_from, KNIGHT_DIRECTIONS};
