//! Agent and match configuration
//!
//! Configurations deserialize from TOML; missing keys take the defaults
//! below. Validation happens once, when an engine or match is built.
//!
//! ```toml
//! width = 7
//! height = 7
//! time_limit_ms = 150
//!
//! [player_one]
//! method = "alphabeta"
//! evaluator = "phase_adaptive"
//!
//! [player_two]
//! method = "minimax"
//! evaluator = "open_move_ratio"
//! iterative = false
//! search_depth = 3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_SIZE;
use crate::error::ConfigError;
use crate::eval::EvaluatorKind;
use crate::search::{SearchMethod, DEFAULT_THRESHOLD_MS};

/// Default fixed search depth
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;
/// Default per-move time limit in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: u64 = 150;

/// Settings of one game-playing agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Depth of the fixed-depth search (ignored with iterative deepening)
    pub search_depth: u32,
    pub evaluator: EvaluatorKind,
    /// Iterative deepening instead of a single fixed-depth search
    pub iterative: bool,
    pub method: SearchMethod,
    /// Remaining time (ms) below which the search aborts
    pub timer_threshold_ms: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            evaluator: EvaluatorKind::default(),
            iterative: true,
            method: SearchMethod::default(),
            timer_threshold_ms: DEFAULT_THRESHOLD_MS,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        validate_threshold(self.timer_threshold_ms)
    }
}

pub(crate) fn validate_threshold(threshold_ms: f64) -> Result<(), ConfigError> {
    if threshold_ms.is_nan() || threshold_ms < 0.0 {
        return Err(ConfigError::InvalidThreshold(threshold_ms));
    }
    Ok(())
}

/// Settings of a single match between two agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub width: usize,
    pub height: usize,
    /// Time budget per move in milliseconds
    pub time_limit_ms: u64,
    pub player_one: AgentConfig,
    pub player_two: AgentConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            player_one: AgentConfig::default(),
            player_two: AgentConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::board::Board::try_new(self.width, self.height)?;
        self.player_one.validate()?;
        self.player_two.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.search_depth, 3);
        assert_eq!(config.evaluator, EvaluatorKind::PhaseAdaptive);
        assert!(config.iterative);
        assert_eq!(config.method, SearchMethod::Minimax);
        assert_eq!(config.timer_threshold_ms, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_match_config() {
        let config = MatchConfig::from_toml_str(
            r#"
            width = 5
            time_limit_ms = 300

            [player_one]
            method = "alphabeta"
            evaluator = "drilldown"

            [player_two]
            iterative = false
            search_depth = 2
            evaluator = "custom"
            "#,
        )
        .unwrap();

        assert_eq!(config.width, 5);
        assert_eq!(config.height, 7);
        assert_eq!(config.time_limit_ms, 300);
        assert_eq!(config.player_one.method, SearchMethod::AlphaBeta);
        assert_eq!(config.player_one.evaluator, EvaluatorKind::Drilldown);
        assert!(config.player_one.iterative);
        assert!(!config.player_two.iterative);
        assert_eq!(config.player_two.search_depth, 2);
        assert_eq!(config.player_two.evaluator, EvaluatorKind::PhaseAdaptive);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let err = MatchConfig::from_toml_str("[player_one]\nmethod = \"negascout\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = MatchConfig::from_toml_str("[player_two]\nsearch_depth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepth));

        let err = MatchConfig::from_toml_str("width = 20\nheight = 20\n").unwrap_err();
        assert!(matches!(err, ConfigError::Board(_)));

        let config = AgentConfig {
            timer_threshold_ms: -1.0,
            ..AgentConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))));
    }
}
