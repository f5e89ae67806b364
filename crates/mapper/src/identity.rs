//! Canonical identity of content placeholders.
//!
//! A placeholder either points at an existing piece of content through its
//! `OriginalUUID`, stands in for a post on one of the blog platforms, or is
//! its own canonical content. The branches are tried in that order.
use document::{DocumentError, XmlTree};
use tracing::debug;
use uuid::Uuid;

use crate::config::MapperConfig;
use crate::error::MappingError;
use crate::markers::Flag;
use crate::paths;
use crate::ports::{BlogUuidResolver, ExistenceChecker};

/// Resolves placeholder identities against the document store and the blog
/// resolver.
pub struct IdentityResolver<'a> {
    config: &'a MapperConfig,
    blog_resolver: &'a dyn BlogUuidResolver,
    document_store: &'a dyn ExistenceChecker,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(
        config: &'a MapperConfig,
        blog_resolver: &'a dyn BlogUuidResolver,
        document_store: &'a dyn ExistenceChecker,
    ) -> Self {
        Self {
            config,
            blog_resolver,
            document_store,
        }
    }

    pub fn resolve(
        &self,
        attributes: &XmlTree<'_>,
        uuid: Uuid,
        transaction_id: &str,
    ) -> Result<Uuid, MappingError> {
        let fail = |e: DocumentError| MappingError::failed(uuid, e);

        let override_original = attributes.string(paths::OVERRIDE_ORIGINAL).map_err(fail)?;
        if Flag::from_attribute(&override_original) == Flag::False {
            return Err(MappingError::NoInternalComponents {
                uuid,
                reason: "placeholder does not override the original content".into(),
            });
        }

        if let Some(original) = attributes.non_blank(paths::ORIGINAL_UUID).map_err(fail)? {
            return self.original(&original, uuid, transaction_id);
        }

        let category = attributes.string(paths::CATEGORY).map_err(fail)?;
        if self.config.is_blog_category(&category) {
            return self.blog(attributes, uuid, transaction_id);
        }

        debug!(%uuid, "placeholder keeps its own identity");
        Ok(uuid)
    }

    fn original(&self, raw: &str, uuid: Uuid, transaction_id: &str) -> Result<Uuid, MappingError> {
        let original = Uuid::parse_str(raw)
            .map_err(|e| MappingError::failed(uuid, format!("original uuid `{raw}`: {e}")))?;

        match self.document_store.exists(original, transaction_id) {
            Ok(true) => {
                debug!(%uuid, %original, "placeholder resolved to original content");
                Ok(original)
            }
            Ok(false) => Err(MappingError::IdentityResolutionFailed {
                uuid,
                reason: format!("original content {original} is not in the document store"),
            }),
            Err(err) => Err(MappingError::IdentityResolutionFailed {
                uuid,
                reason: err.to_string(),
            }),
        }
    }

    fn blog(
        &self,
        attributes: &XmlTree<'_>,
        uuid: Uuid,
        transaction_id: &str,
    ) -> Result<Uuid, MappingError> {
        let required = |path: &str, field: &str| -> Result<String, MappingError> {
            attributes
                .non_blank(path)
                .map_err(|e| MappingError::failed(uuid, e))?
                .ok_or_else(|| MappingError::MissingRequiredField {
                    uuid,
                    field: field.to_string(),
                })
        };
        let service_id = required(paths::SERVICE_ID, "serviceid")?;
        let ref_field = required(paths::REF_FIELD, "ref_field")?;

        let resolved = self
            .blog_resolver
            .resolve(&service_id, &ref_field, transaction_id)
            .map_err(|err| MappingError::IdentityResolutionFailed {
                uuid,
                reason: err.to_string(),
            })?;
        debug!(%uuid, %resolved, service_id = %service_id, "placeholder resolved to blog post");
        Ok(resolved)
    }
}
