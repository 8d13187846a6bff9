//! Engine configuration loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! [search]
//! depth = 4
//! pruning = "alpha_beta"
//!
//! [evaluator]
//! check_bonus = 50
//! check_mate_bonus = 10000
//! depth_bonus = 100
//! castle_bonus = 60
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::search::board_evaluator::EvaluatorWeights;
use crate::search::minimax::{Pruning, SearchLimits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: u32,
    pub pruning: Pruning,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: Pruning::None,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits::new(self.depth).with_pruning(self.pruning)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub evaluator: EvaluatorWeights,
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.pruning, Pruning::None);
        assert_eq!(config.evaluator.depth_bonus, 100);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [search]
            pruning = "alpha_beta"

            [evaluator]
            castle_bonus = 80
            "#,
        )
        .expect("config should parse");
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.pruning, Pruning::AlphaBeta);
        assert_eq!(config.evaluator.castle_bonus, 80);
        assert_eq!(config.evaluator.check_bonus, 50);
        assert_eq!(config.search.limits().pruning, Pruning::AlphaBeta);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = EngineConfig::from_toml_str("[search]\ndepth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDepth));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("[search\ndepth = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = EngineConfig::from_path("/nonexistent/engine.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/engine.toml")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
