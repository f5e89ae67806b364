use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;
use uuid::Uuid;

use mapper::{ExistenceChecker, ServiceError};

use crate::config::DocumentStoreConfig;
use crate::error::AdapterError;
use crate::REQUEST_ID_HEADER;

const SERVICE: &str = "document-store";

/// [`ExistenceChecker`] backed by the document store's
/// `HEAD /content/{uuid}` endpoint.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(config: &DocumentStoreConfig) -> Result<Self, AdapterError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AdapterError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn content_url(&self, uuid: Uuid) -> String {
        format!("{}/content/{uuid}", self.base_url)
    }

    /// `true` on 200, `false` on 404, an error for anything else.
    pub fn check(&self, uuid: Uuid, transaction_id: &str) -> Result<bool, AdapterError> {
        let start = Instant::now();
        let url = self.content_url(uuid);
        let response = self
            .client
            .head(&url)
            .header(REQUEST_ID_HEADER, transaction_id)
            .send()?;
        let status = response.status();
        debug!(
            %uuid,
            status = status.as_u16(),
            elapsed_micros = start.elapsed().as_micros(),
            "document store existence check"
        );
        match status {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            other => Err(AdapterError::UnexpectedStatus {
                status: other.as_u16(),
                url,
            }),
        }
    }
}

impl ExistenceChecker for HttpDocumentStore {
    fn exists(&self, uuid: Uuid, transaction_id: &str) -> Result<bool, ServiceError> {
        self.check(uuid, transaction_id)
            .map_err(|e| ServiceError::new(SERVICE, e.to_string()))
    }
}
