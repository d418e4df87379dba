//! Error types for the kohra-nav binaries.

use thiserror::Error;

/// Top-level error for the simulator CLI and benchmark runner.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Map error: {0}")]
    Map(#[from] kohra_map::MapError),

    #[error("Unknown algorithm '{0}' (expected bfs|dfs|ucs|astar|greedy)")]
    UnknownAlgorithm(String),

    #[error("Unknown mode '{0}' (expected fog|no-fog)")]
    UnknownMode(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
