//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, CORS policy,
//! entity name bounds and optional API credentials.

use impact_engine::{Credentials, EntityBounds};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the web search API key
pub const SEARCH_API_KEY_VAR: &str = "SERPAPI_KEY";

/// Environment variable holding the language-model API key
pub const LLM_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Allow any origin, method and header (default: true)
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,

    /// Log filter used when RUST_LOG is not set (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Entity name bounds for `/score`
    #[serde(default)]
    pub entity: EntityBounds,

    /// Search and language-model API keys
    #[serde(default)]
    pub credentials: Credentials,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8000
}

fn default_cors_permissive() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            cors_permissive: default_cors_permissive(),
            log_filter: default_log_filter(),
            entity: EntityBounds::default(),
            credentials: Credentials::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity.min_chars == 0 {
            return Err(ConfigError::Invalid(
                "entity.min_chars must be at least 1".to_string(),
            ));
        }
        if self.entity.min_chars > self.entity.max_chars {
            return Err(ConfigError::Invalid(format!(
                "entity.min_chars ({}) exceeds entity.max_chars ({})",
                self.entity.min_chars, self.entity.max_chars
            )));
        }
        Ok(())
    }

    /// Overlay API keys from `SERPAPI_KEY` and `OPENAI_API_KEY`
    pub fn with_env_credentials(self) -> Self {
        self.with_credentials_from(|name| std::env::var(name).ok())
    }

    /// Overlay API keys from `lookup`, ignoring missing or empty values
    pub fn with_credentials_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(SEARCH_API_KEY_VAR) {
            self.credentials.search_api_key = Some(key);
        }
        if let Some(key) = non_empty(LLM_API_KEY_VAR) {
            self.credentials.llm_api_key = Some(key);
        }
        self
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
