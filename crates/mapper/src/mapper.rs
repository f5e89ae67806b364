use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use document::{DocumentError, XmlTree};
use tracing::{debug, info, warn, Level};
use uuid::Uuid;

use crate::blocks::blocks;
use crate::body::BodyPipeline;
use crate::config::MapperConfig;
use crate::error::MappingError;
use crate::extract::{self, ArticleTrees};
use crate::gate::{PublishingStatus, StandardArticleValidator, Validators};
use crate::identity::IdentityResolver;
use crate::ports::{
    BlogUuidResolver, BodyTransformer, ExistenceChecker, MarkupNormalizer, TransformContext,
};
use crate::source_code::SourceCode;
use crate::types::{InternalComponents, SourceDocument};

/// External collaborators of the mapper.
#[derive(Clone)]
pub struct MapperPorts {
    pub body_transformer: Arc<dyn BodyTransformer>,
    pub normalizer: Arc<dyn MarkupNormalizer>,
    pub blog_resolver: Arc<dyn BlogUuidResolver>,
    pub document_store: Arc<dyn ExistenceChecker>,
}

/// Maps source documents to [`InternalComponents`].
///
/// Holds no per-call state; one instance may serve many threads as long as
/// its collaborators are thread-safe.
#[derive(Clone)]
pub struct InternalComponentsMapper {
    config: MapperConfig,
    validators: Validators,
    ports: MapperPorts,
}

impl InternalComponentsMapper {
    pub fn new(config: MapperConfig, validators: Validators, ports: MapperPorts) -> Self {
        Self {
            config,
            validators,
            ports,
        }
    }

    /// Mapper with a [`StandardArticleValidator`] bound to every source code.
    pub fn with_standard_validators(config: MapperConfig, ports: MapperPorts) -> Self {
        let validator = Arc::new(StandardArticleValidator::new(&config));
        Self::new(config, Validators::uniform(validator), ports)
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map one document. All-or-nothing: any failing stage aborts the call.
    pub fn map(
        &self,
        document: &SourceDocument,
        transaction_id: &str,
        last_modified: DateTime<Utc>,
        preview: bool,
    ) -> Result<InternalComponents, MappingError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "mapper.map",
            uuid = %document.uuid,
            transaction_id,
            preview
        );
        let _guard = span.enter();

        match self.map_inner(document, transaction_id, last_modified, preview) {
            Ok(components) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    resolved_uuid = %components.uuid,
                    lead_images = components.lead_images.len(),
                    has_body = components.body_xml.is_some(),
                    elapsed_micros,
                    "map_success"
                );
                Ok(components)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "map_failure");
                Err(err)
            }
        }
    }

    fn map_inner(
        &self,
        document: &SourceDocument,
        transaction_id: &str,
        last_modified: DateTime<Utc>,
        preview: bool,
    ) -> Result<InternalComponents, MappingError> {
        let uuid = document.uuid;

        let source = SourceCode::of_attributes(&document.attributes);
        debug!(source = ?source, "source code");
        match self
            .validators
            .publishing_status(source, document, transaction_id, preview)
        {
            PublishingStatus::Valid => {}
            PublishingStatus::Ineligible => return Err(MappingError::NotEligibleForPublish { uuid }),
            PublishingStatus::Deleted => return Err(MappingError::MarkedDeleted { uuid }),
        }
        // The gate only passes registered source codes.
        let Some(source) = source else {
            return Err(MappingError::NotEligibleForPublish { uuid });
        };

        let fail = |e: DocumentError| MappingError::failed(uuid, e);
        let attributes = XmlTree::parse(&document.attributes).map_err(fail)?;
        let value = XmlTree::parse_bytes(&document.value).map_err(fail)?;
        let trees = ArticleTrees::new(&attributes, &value);

        let ctx = TransformContext {
            uuid,
            transaction_id,
            api_host: &self.config.api_host,
            preview,
        };

        let body_xml = if source.has_body() {
            let pipeline = BodyPipeline::new(
                self.ports.body_transformer.as_ref(),
                self.ports.normalizer.as_ref(),
            );
            Some(pipeline.run(&trees, &ctx)?)
        } else {
            None
        };

        let blocks = if source.has_blocks() {
            Some(blocks(&trees, self.ports.body_transformer.as_ref(), &ctx)?)
        } else {
            None
        };

        let resolved: Uuid = if source.resolves_identity() {
            IdentityResolver::new(
                &self.config,
                self.ports.blog_resolver.as_ref(),
                self.ports.document_store.as_ref(),
            )
            .resolve(&attributes, uuid, transaction_id)?
        } else {
            uuid
        };

        Ok(InternalComponents {
            uuid: resolved,
            publish_reference: transaction_id.to_string(),
            last_modified,
            design: extract::design(&trees).map_err(fail)?,
            table_of_contents: extract::table_of_contents(&trees).map_err(fail)?,
            topper: extract::topper(&trees).map_err(fail)?,
            lead_images: extract::lead_images(&trees).map_err(fail)?,
            unpublished_content_description: extract::unpublished_content_description(
                &trees,
                self.ports.normalizer.as_ref(),
            )
            .map_err(fail)?,
            body_xml,
            blocks,
            summary: extract::summary(&trees).map_err(fail)?,
            push_notifications_cohort: extract::push_notifications_cohort(&trees).map_err(fail)?,
            push_notifications_text: extract::push_notifications_text(&trees).map_err(fail)?,
        })
    }
}
