//! Configuration module for the endpoint picker
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`EPP_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use epp::config::EppConfig;
//!
//! let config = EppConfig::default();
//! assert_eq!(config.server.port, 9002);
//!
//! let toml = r#"
//! [[pods]]
//! name = "default/vllm-0"
//! address = "10.0.0.7:8000"
//! "#;
//! let config: EppConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.pods.len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod pod;
pub mod server;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig, LOG_COMPONENTS};
pub use pod::PodConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Serializes tests that read or write `EPP_*` environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Unified configuration for the endpoint picker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Pods seeded into the datastore at startup
    pub pods: Vec<PodConfig>,
}

impl EppConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply `EPP_*` environment variable overrides.
    ///
    /// Invalid values are ignored and the previous value is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("EPP_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("EPP_HOST") {
            self.server.host = host;
        }
        if let Ok(level) = std::env::var("EPP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("EPP_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "server.request_timeout_seconds".to_string(),
                message: "request timeout must be at least one second".to_string(),
            });
        }

        if let Some(component) = self.logging.unknown_component() {
            return Err(ConfigError::Validation {
                field: format!("logging.component_levels.{}", component),
                message: format!(
                    "unknown component (expected one of {})",
                    LOG_COMPONENTS.join(", ")
                ),
            });
        }

        let mut names = HashSet::new();
        for (i, pod) in self.pods.iter().enumerate() {
            if pod.name.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("pods[{}].name", i),
                    message: "name cannot be empty".to_string(),
                });
            }
            if pod.address.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("pods[{}].address", i),
                    message: "address cannot be empty".to_string(),
                });
            }
            if !names.insert(pod.name.as_str()) {
                return Err(ConfigError::Validation {
                    field: format!("pods[{}].name", i),
                    message: format!("duplicate pod name '{}'", pod.name),
                });
            }
        }

        Ok(())
    }
}
