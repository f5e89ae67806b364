//! YAML configuration for the `icm` binary.
//!
//! One file configures the mapper and its HTTP collaborators. Every section
//! is optional and falls back to its defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! mapper:
//!   version: 1
//!   api_host: "api.ft.com"
//!   blog_categories: ["blog", "webchat-live-blogs", "webchat-live-qa", "webchat-markets-live", "fastft"]
//!   publishable_workflow_statuses: ["Stories/WebReady"]
//!
//! document_store:
//!   base_url: "http://document-store-api:8080"
//!   timeout_secs: 5
//!
//! blog_resolver:
//!   base_url: "http://document-store-api:8080"
//!   timeout_secs: 5
//!   authorities:
//!     ftalphaville.ft.com: "http://api.ft.com/system/FT-LABS-WP-1-24"
//!
//! logging:
//!   level: "info"
//!   json: true
//! ```

use std::fs;
use std::path::Path;

use adapters::{BlogResolverConfig, DocumentStoreConfig};
use mapper::MapperConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub mapper: MapperConfig,

    #[serde(default)]
    pub document_store: DocumentStoreConfig,

    #[serde(default)]
    pub blog_resolver: BlogResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.mapper
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("mapper: {e}")))?;
        self.document_store
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.blog_resolver
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            mapper: MapperConfig::default(),
            document_store: DocumentStoreConfig::default(),
            blog_resolver: BlogResolverConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `mapper=debug,info`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
