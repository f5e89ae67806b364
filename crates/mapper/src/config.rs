//! Configuration for the mapper.
//!
//! [`MapperConfig`] is cheap to clone and deserializes from any serde format;
//! the `icm` binary loads it from the `mapper` section of its YAML file.
//!
//! ```rust
//! use mapper::MapperConfig;
//!
//! let config = MapperConfig::default();
//! config.validate().expect("defaults are valid");
//! assert!(config.is_blog_category("fastft"));
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories whose placeholders point at externally hosted blog posts.
pub const DEFAULT_BLOG_CATEGORIES: [&str; 5] = [
    "blog",
    "webchat-live-blogs",
    "webchat-live-qa",
    "webchat-markets-live",
    "fastft",
];

/// Workflow status a story must be in to be published.
pub const DEFAULT_PUBLISHABLE_WORKFLOW_STATUS: &str = "Stories/WebReady";

/// Runtime configuration for [`InternalComponentsMapper`](crate::InternalComponentsMapper).
///
/// # Serialization
///
/// ```yaml
/// version: 1
/// api_host: "api.ft.com"
/// blog_categories: ["blog", "fastft"]
/// publishable_workflow_statuses: ["Stories/WebReady"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Configuration schema version. Must be non-zero.
    ///
    /// Default: `1`
    pub version: u32,

    /// Public API host handed to the body transformer for link rewriting.
    ///
    /// Default: `"api.ft.com"`
    pub api_host: String,

    /// Wires-indexing categories that trigger blog identity resolution for
    /// content placeholders. Compared exactly after trimming.
    ///
    /// Default: [`DEFAULT_BLOG_CATEGORIES`]
    pub blog_categories: Vec<String>,

    /// Workflow statuses [`StandardArticleValidator`](crate::StandardArticleValidator)
    /// accepts outside preview.
    ///
    /// Default: `["Stories/WebReady"]`
    pub publishable_workflow_statuses: Vec<String>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_host: "api.ft.com".into(),
            blog_categories: DEFAULT_BLOG_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            publishable_workflow_statuses: vec![DEFAULT_PUBLISHABLE_WORKFLOW_STATUS.to_string()],
        }
    }
}

impl MapperConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// Call once at start-up; it performs no I/O.
    ///
    /// ```rust
    /// use mapper::{ConfigError, MapperConfig};
    ///
    /// let bad = MapperConfig { api_host: "  ".into(), ..Default::default() };
    /// assert_eq!(bad.validate(), Err(ConfigError::EmptyApiHost));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::InvalidVersion(self.version));
        }
        if self.api_host.trim().is_empty() {
            return Err(ConfigError::EmptyApiHost);
        }
        if let Some(idx) = self
            .blog_categories
            .iter()
            .position(|c| c.trim().is_empty())
        {
            return Err(ConfigError::BlankBlogCategory(idx));
        }
        if self
            .publishable_workflow_statuses
            .iter()
            .all(|s| s.trim().is_empty())
        {
            return Err(ConfigError::NoPublishableWorkflowStatus);
        }
        Ok(())
    }

    /// Whether `category` is one of the configured blog categories.
    pub fn is_blog_category(&self, category: &str) -> bool {
        let category = category.trim();
        !category.is_empty() && self.blog_categories.iter().any(|c| c.trim() == category)
    }
}

/// Errors that can occur when validating a [`MapperConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unsupported mapper config version {0}")]
    InvalidVersion(u32),

    #[error("api_host must not be blank")]
    EmptyApiHost,

    #[error("blog_categories[{0}] is blank")]
    BlankBlogCategory(usize),

    #[error("publishable_workflow_statuses must name at least one status")]
    NoPublishableWorkflowStatus,
}
