//! Workspace umbrella crate for the Methode internal components mapper.
//!
//! This crate wires the mapper to its HTTP collaborators from one YAML file
//! and exposes a JSON-in, JSON-out entry point used by the `icm` binary.

pub mod config;

pub use adapters::{
    AdapterError, BlogResolverConfig, DocumentStoreConfig, Html5SelfClosingNormalizer,
    HttpBlogResolver, HttpDocumentStore, PassThroughBodyTransformer,
};
pub use document::{DocumentError, XmlTree};
pub use mapper::{
    derive_image_set_uuid, ArticleValidator, Block, Design, Image, ImageLabel, InternalComponents,
    InternalComponentsMapper, MapperConfig, MapperPorts, MappingError, PublishingStatus,
    ServiceError, SourceCode, SourceDocument, StandardArticleValidator, Summary, TableOfContents,
    Topper, Validators,
};

pub use crate::config::{AppConfig, ConfigLoadError, LoggingConfig};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Errors surfaced by the umbrella entry points.
#[derive(Debug, Error)]
pub enum IcmError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("adapter setup: {0}")]
    Adapter(#[from] AdapterError),

    #[error("source document is not valid JSON: {0}")]
    Decode(String),

    #[error("could not encode internal components: {0}")]
    Encode(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("logging: {0}")]
    Logging(String),
}

/// Installs the global `tracing` subscriber described by `config`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), IcmError> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| IcmError::Logging(e.to_string()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| IcmError::Logging(e.to_string()))
}

/// Mapper backed by the HTTP document store and blog resolver, the HTML5
/// normalizer and the pass-through body transformer.
pub fn build_mapper(config: &AppConfig) -> Result<InternalComponentsMapper, IcmError> {
    let ports = MapperPorts {
        body_transformer: Arc::new(PassThroughBodyTransformer),
        normalizer: Arc::new(Html5SelfClosingNormalizer),
        blog_resolver: Arc::new(HttpBlogResolver::new(&config.blog_resolver)?),
        document_store: Arc::new(HttpDocumentStore::new(&config.document_store)?),
    };
    debug!(
        document_store = %config.document_store.base_url,
        blog_resolver = %config.blog_resolver.base_url,
        api_host = %config.mapper.api_host,
        "mapper built"
    );
    Ok(InternalComponentsMapper::with_standard_validators(
        config.mapper.clone(),
        ports,
    ))
}

/// Decodes a JSON [`SourceDocument`], maps it and returns the
/// [`InternalComponents`] as pretty-printed JSON.
pub fn map_json(
    mapper: &InternalComponentsMapper,
    source_json: &str,
    transaction_id: &str,
    last_modified: DateTime<Utc>,
    preview: bool,
) -> Result<String, IcmError> {
    let document: SourceDocument =
        serde_json::from_str(source_json).map_err(|e| IcmError::Decode(e.to_string()))?;
    debug!(uuid = %document.uuid, transaction_id, "source document decoded");
    let components = mapper.map(&document, transaction_id, last_modified, preview)?;
    serde_json::to_string_pretty(&components).map_err(|e| IcmError::Encode(e.to_string()))
}
