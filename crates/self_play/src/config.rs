//! Match configuration, loaded from TOML
//!
//! ```toml
//! num_games = 4
//! max_plies = 150
//! output = "results.json"
//!
//! [engine1]
//! engine = "minimax"
//! depth = 5
//!
//! [engine2]
//! engine = "random"
//! seed = 7
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use checkers_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

use crate::error::ConfigError;

/// Deepest search a config may request.
pub const MAX_SEARCH_DEPTH: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Minimax,
    Random,
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub engine: EngineKind,
    /// Search depth in plies (ignored by the random engine)
    pub depth: u8,
    /// Seed for the random engine; unseeded engines use OS entropy
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Minimax,
            depth: 4,
            seed: None,
        }
    }
}

impl PlayerConfig {
    pub fn minimax(depth: u8) -> Self {
        Self {
            engine: EngineKind::Minimax,
            depth,
            seed: None,
        }
    }

    pub fn random(seed: Option<u64>) -> Self {
        Self {
            engine: EngineKind::Random,
            depth: 1,
            seed,
        }
    }

    /// Instantiate the configured engine
    pub fn build(&self) -> Box<dyn Engine> {
        match self.engine {
            EngineKind::Minimax => Box::new(MinimaxEngine::new()),
            EngineKind::Random => match self.seed {
                Some(seed) => Box::new(RandomEngine::seeded(seed)),
                None => Box::new(RandomEngine::new()),
            },
        }
    }

    /// Short name used in reports, e.g. `minimax(d4)`
    pub fn label(&self) -> String {
        match (self.engine, self.seed) {
            (EngineKind::Minimax, _) => format!("minimax(d{})", self.depth),
            (EngineKind::Random, Some(seed)) => format!("random(seed {seed})"),
            (EngineKind::Random, None) => "random".to_string(),
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies after which an unfinished game is scored as a draw
    pub max_plies: u32,
    /// Whether engine1 switches sides every game
    pub alternate_sides: bool,
    /// Where to write the JSON match summary, if anywhere
    pub output: Option<PathBuf>,
    pub engine1: PlayerConfig,
    pub engine2: PlayerConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 2,
            max_plies: 200,
            alternate_sides: true,
            output: None,
            engine1: PlayerConfig::minimax(4),
            engine2: PlayerConfig::minimax(3),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_games == 0 {
            return Err(ConfigError::Invalid("num_games must be at least 1".into()));
        }
        if self.max_plies == 0 {
            return Err(ConfigError::Invalid("max_plies must be at least 1".into()));
        }
        for (name, player) in [("engine1", &self.engine1), ("engine2", &self.engine2)] {
            if !(1..=MAX_SEARCH_DEPTH).contains(&player.depth) {
                return Err(ConfigError::Invalid(format!(
                    "{name}.depth must be between 1 and {MAX_SEARCH_DEPTH}, got {}",
                    player.depth
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
