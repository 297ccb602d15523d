//! Error types for match configuration and execution

use std::path::PathBuf;

use checkers_core::CheckersError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values that parse but cannot be played
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum MatchError {
    /// An engine proposed a move the rules reject
    #[error("{engine} proposed an illegal move: {source}")]
    IllegalMove {
        engine: String,
        #[source]
        source: CheckersError,
    },

    #[error("failed to write results to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
