//! Configuration management for Herald
//!
//! This crate handles loading `herald.toml`. The only inputs the logger
//! really needs are the level and the environment; the `[log]` table also
//! carries the host IP probe settings.

use herald_common::{Environment, HeraldError, LogLevel, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Well-known address used to learn the outbound-routable host IP
pub const DEFAULT_PROBE_ADDR: &str = "1.1.1.1:53";

/// What the initializer does when the host IP probe fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeFailure {
    /// Report the failure; the process-wide initializer exits
    #[default]
    Abort,
    /// Continue with the unspecified address `0.0.0.0`
    Unknown,
}

/// Logger configuration ([log])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub env: Environment,

    #[serde(default = "default_probe_addr")]
    pub probe_addr: String,

    #[serde(default)]
    pub on_probe_failure: ProbeFailure,
}

fn default_probe_addr() -> String {
    DEFAULT_PROBE_ADDR.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            env: Environment::default(),
            probe_addr: default_probe_addr(),
            on_probe_failure: ProbeFailure::default(),
        }
    }
}

/// On-disk layout of `herald.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    log: LogConfig,
}

impl LogConfig {
    pub fn new(level: LogLevel, env: Environment) -> Self {
        Self {
            level,
            env,
            ..Self::default()
        }
    }

    /// Parse the `[log]` table out of a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| HeraldError::ConfigError(format!("Failed to parse config: {}", e)))?;
        Ok(file.log)
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| HeraldError::ConfigError(format!("Failed to read config: {}", e)))?;

        Self::from_toml_str(&content)
    }
}
