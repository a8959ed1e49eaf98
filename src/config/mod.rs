//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming a YAML config file
pub const CONFIG_PATH_VAR: &str = "GRUBDASH_CONFIG";

/// Server configuration
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (e.g. "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Attach a permissive CORS layer
    pub cors: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors: true,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Failed to parse config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the process configuration
    ///
    /// Reads the file named by `GRUBDASH_CONFIG` if set, otherwise starts
    /// from the defaults, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `GRUBDASH_HOST`, `GRUBDASH_PORT` and `GRUBDASH_LOG` overrides
    ///
    /// `lookup` resolves a variable name to its value.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup("GRUBDASH_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("GRUBDASH_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("Invalid GRUBDASH_PORT '{}'", port))?;
        }
        if let Some(filter) = lookup("GRUBDASH_LOG") {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
