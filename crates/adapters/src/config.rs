//! Endpoint configuration for the HTTP collaborators.
//!
//! Both sections deserialize from the `document_store` and `blog_resolver`
//! sections of the `icm` YAML file.
//!
//! ```yaml
//! document_store:
//!   base_url: "http://document-store-api:8080"
//!   timeout_secs: 5
//! blog_resolver:
//!   base_url: "http://document-store-api:8080"
//!   timeout_secs: 5
//!   authorities:
//!     ftalphaville.ft.com: "http://api.ft.com/system/FT-LABS-WP-1-24"
//! ```
use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Where the document store lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStoreConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DocumentStoreConfig {
    pub fn validate(&self) -> Result<(), AdapterError> {
        validate_endpoint("document_store", &self.base_url, self.timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where blog post identities are looked up, and which identifier authority
/// each blog host publishes under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogResolverConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Blog host (e.g. `ftalphaville.ft.com`) to identifier authority.
    pub authorities: BTreeMap<String, String>,
}

impl Default for BlogResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            authorities: BTreeMap::new(),
        }
    }
}

impl BlogResolverConfig {
    pub fn validate(&self) -> Result<(), AdapterError> {
        validate_endpoint("blog_resolver", &self.base_url, self.timeout_secs)?;
        if let Some((host, _)) = self
            .authorities
            .iter()
            .find(|(host, authority)| host.trim().is_empty() || authority.trim().is_empty())
        {
            return Err(AdapterError::InvalidConfig(format!(
                "blog_resolver.authorities has a blank entry for host `{host}`"
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Identifier authority for a blog host, matched case-insensitively.
    pub fn authority_for(&self, host: &str) -> Option<&str> {
        self.authorities
            .iter()
            .find(|(h, _)| h.trim().eq_ignore_ascii_case(host))
            .map(|(_, authority)| authority.trim())
    }
}

fn validate_endpoint(section: &str, base_url: &str, timeout_secs: u64) -> Result<(), AdapterError> {
    let parsed = url::Url::parse(base_url).map_err(|e| {
        AdapterError::InvalidConfig(format!("{section}.base_url `{base_url}`: {e}"))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AdapterError::InvalidConfig(format!(
            "{section}.base_url must be http or https"
        )));
    }
    if timeout_secs == 0 {
        return Err(AdapterError::InvalidConfig(format!(
            "{section}.timeout_secs must be greater than 0"
        )));
    }
    Ok(())
}
