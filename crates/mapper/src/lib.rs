//! Methode internal components mapper
//!
//! Turns one Methode story (an article value blob plus its attributes blob)
//! into the typed [`InternalComponents`] record downstream publishing
//! services consume.
//!
//! ## What we do here
//!
//! - **Gate** - the validator bound to the document's [`SourceCode`] decides
//!   whether it may be published at all. Ineligible and deleted documents stop
//!   here.
//! - **Extract** - design, table of contents, topper, lead images, summary,
//!   push notification fields and the unpublished content description, each
//!   by its own pure rule. See [`extract`].
//! - **Transform the body** - transform, validate against the empty-body
//!   policy, then inject the derived main image-set reference.
//! - **Blocks** - numbered html blocks for dynamic content.
//! - **Resolve identity** - content placeholders resolve to the original
//!   content or to the blog post they stand in for.
//! - **Log** - one `mapper.map` span per call with `map_success` or
//!   `map_failure` and the elapsed time.
//!
//! Every external call goes through a port trait ([`BodyTransformer`],
//! [`MarkupNormalizer`], [`BlogUuidResolver`], [`ExistenceChecker`]) so the
//! mapper itself stays synchronous and stateless.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use mapper::{
//!     BlogUuidResolver, BodyTransformer, ExistenceChecker, InternalComponentsMapper,
//!     MapperConfig, MapperPorts, MarkupNormalizer, ServiceError, SourceDocument,
//!     TransformContext,
//! };
//! use uuid::Uuid;
//!
//! struct Same;
//! impl BodyTransformer for Same {
//!     fn transform(&self, markup: &str, _: &TransformContext<'_>) -> Result<String, ServiceError> {
//!         Ok(markup.to_string())
//!     }
//! }
//! impl MarkupNormalizer for Same {
//!     fn process(&self, markup: &str) -> String {
//!         markup.to_string()
//!     }
//! }
//! struct Offline;
//! impl BlogUuidResolver for Offline {
//!     fn resolve(&self, _: &str, _: &str, _: &str) -> Result<Uuid, ServiceError> {
//!         Err(ServiceError::new("blog-resolver", "offline"))
//!     }
//! }
//! impl ExistenceChecker for Offline {
//!     fn exists(&self, _: Uuid, _: &str) -> Result<bool, ServiceError> {
//!         Err(ServiceError::new("document-store", "offline"))
//!     }
//! }
//!
//! let mapper = InternalComponentsMapper::with_standard_validators(
//!     MapperConfig::default(),
//!     MapperPorts {
//!         body_transformer: Arc::new(Same),
//!         normalizer: Arc::new(Same),
//!         blog_resolver: Arc::new(Offline),
//!         document_store: Arc::new(Offline),
//!     },
//! );
//!
//! let document = SourceDocument {
//!     uuid: Uuid::new_v4(),
//!     kind: "EOM::CompoundStory".into(),
//!     value: b"<doc><story><text><body><p>Hello</p></body></text></story></doc>".to_vec(),
//!     attributes: "<ObjectMetadata><EditorialNotes><Sources><Source>\
//!         <SourceCode>FT</SourceCode></Source></Sources></EditorialNotes></ObjectMetadata>"
//!         .into(),
//!     workflow_status: "Stories/WebReady".into(),
//!     web_url: None,
//! };
//!
//! let components = mapper.map(&document, "tid_example", Utc::now(), false).unwrap();
//! assert_eq!(components.uuid, document.uuid);
//! assert_eq!(components.body_xml.as_deref(), Some("<body><p>Hello</p></body>"));
//! ```

mod blocks;
mod body;
mod config;
mod error;
pub mod extract;
mod gate;
mod identity;
mod image_set;
mod mapper;
mod markers;
pub mod paths;
mod ports;
mod serde_base64;
mod source_code;
mod types;

pub use crate::blocks::{blocks, HTML_BLOCK};
pub use crate::body::{
    inject_main_image, main_image_set_uuid, transform_body, unwrap_body, validate_body,
    BodyPipeline, ContentType, TransformationMode, EMPTY_VALIDATED_BODY, IMAGE_SET_TYPE,
};
pub use crate::config::{
    ConfigError, MapperConfig, DEFAULT_BLOG_CATEGORIES, DEFAULT_PUBLISHABLE_WORKFLOW_STATUS,
};
pub use crate::error::{MappingError, ServiceError};
pub use crate::gate::{ArticleValidator, PublishingStatus, StandardArticleValidator, Validators};
pub use crate::identity::IdentityResolver;
pub use crate::image_set::derive_image_set_uuid;
pub use crate::mapper::{InternalComponentsMapper, MapperPorts};
pub use crate::markers::{ArticleImage, DummyText, Flag, PushNotificationsCohort};
pub use crate::ports::{
    BlogUuidResolver, BodyTransformer, ExistenceChecker, MarkupNormalizer, TransformContext,
};
pub use crate::source_code::{SourceCode, UnknownSourceCode};
pub use crate::types::{
    Block, Design, Image, ImageLabel, InternalComponents, SourceDocument, Summary,
    TableOfContents, Topper,
};
