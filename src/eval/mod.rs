//! Evaluation module for Isolation positions
//!
//! This module provides the heuristic strategies the search calls at its
//! leaves. All strategies implement [`Evaluator`], so the engine never
//! depends on a particular one:
//! - Mobility ratios (open-move ratio, open positions, aggressive)
//! - Knight-path reachability (drilldown, longest path)
//! - Positional and baseline scores (centroid, utility, random)
//! - A phase-adaptive composite that switches on the blank-cell fraction

pub mod heuristic;
pub mod reach;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{GameBoard, Player};
use crate::error::ConfigError;

pub use heuristic::{
    Aggressive, CentroidScore, Drilldown, LongestPath, OpenMoveRatio, OpenPositions,
    PhaseAdaptive, RandomScore, UtilityScore, OPEN_BOARD_THRESHOLD,
};
pub use reach::{drill_value, longest_path, DRILL_DEPTH};

/// Scores a board from one player's point of view. Higher is better for
/// `player`; finished games score as their utility.
pub trait Evaluator<B: GameBoard> {
    fn score(&self, game: &B, player: Player) -> f64;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Plain functions and closures can be used as evaluators.
impl<B, F> Evaluator<B> for F
where
    B: GameBoard,
    F: Fn(&B, Player) -> f64,
{
    fn score(&self, game: &B, player: Player) -> f64 {
        self(game, player)
    }
}

/// Named evaluation strategies, for configuration files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    Random,
    Utility,
    OpenMoveRatio,
    Drilldown,
    #[default]
    #[serde(alias = "custom")]
    PhaseAdaptive,
    PhaseLongestPath,
    Centroid,
    LongestPath,
    Aggressive,
    OpenPositions,
}

impl EvaluatorKind {
    pub const ALL: [EvaluatorKind; 10] = [
        EvaluatorKind::Random,
        EvaluatorKind::Utility,
        EvaluatorKind::OpenMoveRatio,
        EvaluatorKind::Drilldown,
        EvaluatorKind::PhaseAdaptive,
        EvaluatorKind::PhaseLongestPath,
        EvaluatorKind::Centroid,
        EvaluatorKind::LongestPath,
        EvaluatorKind::Aggressive,
        EvaluatorKind::OpenPositions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EvaluatorKind::Random => "random",
            EvaluatorKind::Utility => "utility",
            EvaluatorKind::OpenMoveRatio => "open_move_ratio",
            EvaluatorKind::Drilldown => "drilldown",
            EvaluatorKind::PhaseAdaptive => "phase_adaptive",
            EvaluatorKind::PhaseLongestPath => "phase_longest_path",
            EvaluatorKind::Centroid => "centroid",
            EvaluatorKind::LongestPath => "longest_path",
            EvaluatorKind::Aggressive => "aggressive",
            EvaluatorKind::OpenPositions => "open_positions",
        }
    }

    /// Instantiate the strategy
    pub fn build<B: GameBoard>(self) -> Box<dyn Evaluator<B>> {
        match self {
            EvaluatorKind::Random => Box::new(RandomScore::new()),
            EvaluatorKind::Utility => Box::new(UtilityScore),
            EvaluatorKind::OpenMoveRatio => Box::new(OpenMoveRatio),
            EvaluatorKind::Drilldown => Box::new(Drilldown::default()),
            EvaluatorKind::PhaseAdaptive => Box::new(PhaseAdaptive::default()),
            EvaluatorKind::PhaseLongestPath => Box::new(PhaseAdaptive::longest_path()),
            EvaluatorKind::Centroid => Box::new(CentroidScore),
            EvaluatorKind::LongestPath => Box::new(LongestPath::default()),
            EvaluatorKind::Aggressive => Box::new(Aggressive),
            EvaluatorKind::OpenPositions => Box::new(OpenPositions),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "custom" {
            return Ok(EvaluatorKind::PhaseAdaptive);
        }
        EvaluatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownEvaluator(s.to_string()))
    }
}
