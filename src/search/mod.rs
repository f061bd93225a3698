//! Search module for the Isolation agent
//!
//! Contains:
//! - Time budget enforcement (abort threshold, wall-clock deadline)
//! - Minimax and alpha-beta search with iterative deepening

pub mod alphabeta;
pub mod timer;

pub use alphabeta::{SearchMethod, SearchResult, SearchStats, Searcher};
pub use timer::{Deadline, TimeGovernor, DEFAULT_THRESHOLD_MS};
