//! Configuration for fetching, output and query behavior

use crate::error::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file the knowledge graph is written to and read from
pub const DEFAULT_DOCUMENT_PATH: &str = "project_knowledge.jsonld";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosting API settings
    pub github: GithubConfig,

    /// Output document settings
    pub output: OutputConfig,

    /// Question answering settings
    pub query: QueryConfig,
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Hosting API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the REST API
    pub api_base: String,

    /// Environment variable holding a personal access token
    pub token_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            timeout_secs: 30,
            user_agent: "repo-graph".to_string(),
        }
    }
}

impl GithubConfig {
    /// Token from the configured environment variable, if set and non-empty
    pub fn token_from_env(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|token| !token.trim().is_empty())
    }
}

/// Output document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the JSON-LD document is written
    pub path: PathBuf,

    /// Stamp `dcterms:modified` with the extraction time
    pub stamp_modified: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DOCUMENT_PATH), stamp_modified: true }
    }
}

/// Query engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Treat questions that match no intent as "about" questions
    pub fallback_to_about: bool,
}
