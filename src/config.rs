//! Run configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::Algorithm;
use crate::types::GraphResult;

/// Defaults for CLI runs. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Algorithm name: dijkstra, bellman-ford, prim, kruskal.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Default source node for shortest-path runs.
    #[serde(default)]
    pub source: Option<String>,
    /// Default destination node for shortest-path runs.
    #[serde(default)]
    pub destination: Option<String>,
    /// Output format ("text" or "json").
    #[serde(default = "default_format")]
    pub format: String,
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_algorithm() -> String {
    Algorithm::Dijkstra.name().to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            source: None,
            destination: None,
            format: default_format(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl RunConfig {
    /// Parse a configuration from TOML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> GraphResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The configured algorithm, validated.
    pub fn algorithm(&self) -> GraphResult<Algorithm> {
        self.algorithm.parse()
    }

    /// Returns true if output should be JSON.
    pub fn json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<RunConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = RunConfig::from_str(&content)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
