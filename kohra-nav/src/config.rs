//! Configuration loading for the maze simulator CLI.

use std::path::Path;

use serde::Deserialize;

use crate::error::{NavError, Result};

/// Main configuration structure. Every field has a default so a partial
/// (or absent) file works; CLI flags override whatever was loaded.
#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub run: RunConfig,
}

/// Settings for a single simulation run.
#[derive(Clone, Debug, Deserialize)]
pub struct RunConfig {
    /// Search algorithm: bfs | dfs | ucs | astar | greedy (default: astar)
    #[serde(default = "default_algo")]
    pub algo: String,

    /// Limit perception to fog-of-war radius 1 (default: false)
    #[serde(default)]
    pub fog: bool,

    /// Step budget for the agent loop (default: 10000)
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Print the masked map after the run (default: false)
    #[serde(default)]
    pub show_map: bool,
}

// Default value functions
fn default_algo() -> String {
    "astar".to_string()
}
fn default_max_steps() -> usize {
    10_000
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algo: default_algo(),
            fog: false,
            max_steps: default_max_steps(),
            show_map: false,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        let config: SimConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.run.algo, "astar");
        assert!(!config.run.fog);
        assert_eq!(config.run.max_steps, 10_000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SimConfig = toml::from_str("[run]\nalgo = \"bfs\"\nfog = true\n").unwrap();
        assert_eq!(config.run.algo, "bfs");
        assert!(config.run.fog);
        assert_eq!(config.run.max_steps, 10_000);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: SimConfig = toml::from_str("").unwrap();
        assert_eq!(config.run.algo, "astar");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[run]\nmax_steps = 250\n").unwrap();
        let config = SimConfig::load(file.path()).unwrap();
        assert_eq!(config.run.max_steps, 250);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "run = not toml").unwrap();
        assert!(SimConfig::load(file.path()).is_err());
    }
}
