//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use mystic_observability::{LogConfig, LogFormat};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`mystic.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Backend location.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging.
    #[serde(default = "default_log")]
    pub log: LogConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            log: default_log(),
        }
    }
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Warnings and errors in human-readable form, so log lines stay out of the
/// way of command output.
fn default_log() -> LogConfig {
    LogConfig::production().with_format(LogFormat::Human)
}

/// Backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the product backend.
    #[serde(default)]
    pub url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
