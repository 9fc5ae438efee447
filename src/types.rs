// src/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub enumerator: EnumeratorConfig,
    pub fetcher: FetcherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("results"),
            enumerator: EnumeratorConfig::default(),
            fetcher: FetcherConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnumeratorConfig {
    pub binary: String,
    /// Appended after `-silent -d <domain>`, e.g. `["-all"]`
    pub extra_args: Vec<String>,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            binary: "subfinder".to_string(),
            extra_args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetcherConfig {
    pub binary: String,
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            binary: "waybackurls".to_string(),
            timeout_secs: 50,
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// How a pipeline run ended when it did not hit a fatal error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    NoSubdomains,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub domain: String,
    pub output_dir: PathBuf,
    pub outcome: RunOutcome,
    pub subdomains: usize,
    pub urls: usize,
    pub failed_fetches: usize,
    pub sensitive: Option<usize>,
    pub params: Option<usize>,
    pub artifacts: Vec<PathBuf>,
    pub duration: Duration,
    pub timestamp: String,
}

#[derive(Debug, Error)]
pub enum BHuntyError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid domain or URL format: {0}")]
    InvalidDomain(String),

    #[error("Error running {tool}: {message}")]
    ToolError {
        tool: String,
        message: String,
    },

    #[error("Timeout error: {0}")]
    TimeoutError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Prompt error: {0}")]
    PromptError(String),
}
