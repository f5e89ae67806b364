//! Blog post identity lookup.
//!
//! Blog posts are indexed in the document store under an identifier
//! authority (one per blog host) and an identifier value (the canonical post
//! url `{scheme}://{host}/?p={ref_field}`). The content-query endpoint answers
//! with a redirect to the content, or with the content itself.
use std::time::Instant;

use reqwest::blocking::{Client, Response};
use reqwest::redirect::Policy;
use reqwest::{header, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use mapper::{BlogUuidResolver, ServiceError};

use crate::config::BlogResolverConfig;
use crate::error::AdapterError;
use crate::REQUEST_ID_HEADER;

const SERVICE: &str = "blog-resolver";

#[derive(Debug, Deserialize)]
struct ContentQueryBody {
    id: Option<String>,
}

/// [`BlogUuidResolver`] backed by `GET /content-query`.
#[derive(Debug, Clone)]
pub struct HttpBlogResolver {
    client: Client,
    config: BlogResolverConfig,
    query_url: String,
}

impl HttpBlogResolver {
    pub fn new(config: &BlogResolverConfig) -> Result<Self, AdapterError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(Policy::none())
            .build()
            .map_err(|e| AdapterError::Client(e.to_string()))?;
        Ok(Self {
            client,
            query_url: format!("{}/content-query", config.base_url.trim_end_matches('/')),
            config: config.clone(),
        })
    }

    /// Identifier authority and value for a post.
    pub fn identifier(&self, service_id: &str, ref_field: &str) -> Result<(String, String), AdapterError> {
        let parsed = Url::parse(service_id.trim())
            .map_err(|_| AdapterError::InvalidServiceId(service_id.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| AdapterError::InvalidServiceId(service_id.to_string()))?;
        let authority = self
            .config
            .authority_for(host)
            .ok_or_else(|| AdapterError::UnknownAuthority(host.to_string()))?;
        let value = format!("{}://{}/?p={}", parsed.scheme(), host, ref_field.trim());
        Ok((authority.to_string(), value))
    }

    pub fn lookup(
        &self,
        service_id: &str,
        ref_field: &str,
        transaction_id: &str,
    ) -> Result<Uuid, AdapterError> {
        let start = Instant::now();
        let (authority, value) = self.identifier(service_id, ref_field)?;
        let response = self
            .client
            .get(&self.query_url)
            .query(&[
                ("identifierAuthority", authority.as_str()),
                ("identifierValue", value.as_str()),
            ])
            .header(REQUEST_ID_HEADER, transaction_id)
            .send()?;
        let status = response.status();
        debug!(
            identifier_value = %value,
            status = status.as_u16(),
            elapsed_micros = start.elapsed().as_micros(),
            "content query"
        );

        if status.is_redirection() {
            return identity_from_location(&response);
        }
        match status {
            StatusCode::OK => {
                let body: ContentQueryBody = response.json()?;
                let id = body.id.ok_or(AdapterError::MissingIdentity)?;
                parse_last_segment(&id)
            }
            StatusCode::NOT_FOUND => Err(AdapterError::NotFound(value)),
            other => Err(AdapterError::UnexpectedStatus {
                status: other.as_u16(),
                url: response.url().to_string(),
            }),
        }
    }
}

fn identity_from_location(response: &Response) -> Result<Uuid, AdapterError> {
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AdapterError::MissingIdentity)?;
    parse_last_segment(location)
}

/// UUID in the last non-empty path segment of `raw`, ignoring any query.
fn parse_last_segment(raw: &str) -> Result<Uuid, AdapterError> {
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    let segment = path
        .rsplit('/')
        .find(|s| !s.is_empty())
        .ok_or(AdapterError::MissingIdentity)?;
    Uuid::parse_str(segment).map_err(|_| AdapterError::InvalidUuid(segment.to_string()))
}

impl BlogUuidResolver for HttpBlogResolver {
    fn resolve(
        &self,
        service_id: &str,
        ref_field: &str,
        transaction_id: &str,
    ) -> Result<Uuid, ServiceError> {
        self.lookup(service_id, ref_field, transaction_id)
            .map_err(|e| ServiceError::new(SERVICE, e.to_string()))
    }
}
