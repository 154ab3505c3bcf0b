//! # Configuration
//!
//! Manages the loading and parsing of the service's configuration file (`config.yaml`).
//! Every section is optional; a missing file yields the built-in defaults.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::paths;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            endpoint: default_endpoint(),
            cors: true,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AssistantConfig {
    /// Artificial delay before answering, mimicking a model round-trip.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    /// EnvFilter directive; `RUST_LOG` wins when set.
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default = "default_true")]
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            filter: None,
            console: true,
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_endpoint() -> String {
    "/api/visual-ai".to_string()
}

fn default_log_dir() -> String {
    paths::DATA_DIR.to_string()
}

fn default_log_file() -> String {
    paths::LOG_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to `null`, which is not a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the router would otherwise panic on.
    pub fn validate(&self) -> Result<()> {
        if !self.server.endpoint.starts_with('/') {
            bail!(
                "server.endpoint must start with '/', got {:?}",
                self.server.endpoint
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.server.endpoint, "/api/visual-ai");
        assert_eq!(config.assistant.simulated_latency_ms, 0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  bind: 0.0.0.0:8080\nassistant:\n  simulated_latency_ms: 1500\n"
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.server.endpoint, "/api/visual-ai");
        assert!(config.server.cors);
        assert_eq!(config.assistant.simulated_latency_ms, 1500);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_yaml("\n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_endpoint_without_leading_slash_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  endpoint: api/visual-ai\n").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("server.endpoint must start with '/'"));
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server: [not, a, map").unwrap();
        assert!(AppConfig::load(file.path()).is_err());
    }
}
