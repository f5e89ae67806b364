//! Error types produced by the mapper crate.
//!
//! # Error Categories
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`NotEligibleForPublish`](MappingError::NotEligibleForPublish) | Gate | Validator returned INELIGIBLE, or the source code is unknown |
//! | [`MarkedDeleted`](MappingError::MarkedDeleted) | Gate | Validator returned DELETED |
//! | [`UntransformableContent`](MappingError::UntransformableContent) | Validation | Transformed body is blank outside the allowed-empty cases |
//! | [`MissingRequiredField`](MappingError::MissingRequiredField) | Validation | A field needed for identity resolution is missing or blank |
//! | [`IdentityResolutionFailed`](MappingError::IdentityResolutionFailed) | Resolution | Blog resolver or document store could not confirm an identity |
//! | [`InvalidContent`](MappingError::InvalidContent) | Validation | Blocks are malformed or missing |
//! | [`NoInternalComponents`](MappingError::NoInternalComponents) | Policy | The placeholder must not replace the original's components |
//! | [`TransformationFailed`](MappingError::TransformationFailed) | Internal | Parse, path or collaborator faults |
//!
//! Every variant carries the identity of the document being mapped so a
//! failure can always be traced back to its source.
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by [`InternalComponentsMapper::map`](crate::InternalComponentsMapper::map).
///
/// Mapping is all-or-nothing: the first error aborts the call and no partial
/// record is returned.
///
/// # Examples
///
/// ```rust
/// use mapper::MappingError;
/// use uuid::Uuid;
///
/// let uuid = Uuid::nil();
/// let err = MappingError::MissingRequiredField { uuid, field: "ref_field".into() };
///
/// assert_eq!(err.uuid(), uuid);
/// assert!(err.to_string().contains("ref_field"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    /// The eligibility gate rejected the document.
    #[error("article {uuid} is not eligible for publishing")]
    NotEligibleForPublish {
        /// Identity of the rejected document.
        uuid: Uuid,
    },

    /// The document is flagged as deleted in the CMS.
    #[error("article {uuid} is marked as deleted")]
    MarkedDeleted {
        /// Identity of the deleted document.
        uuid: Uuid,
    },

    /// The transformed body has no content and no empty-body exception applies.
    #[error("article {uuid} has untransformable content: {reason}")]
    UntransformableContent {
        /// Identity of the document.
        uuid: Uuid,
        /// What made the body unusable.
        reason: String,
    },

    /// A field required for identity resolution is missing or blank.
    #[error("article {uuid} is missing required field `{field}`")]
    MissingRequiredField {
        /// Identity of the document.
        uuid: Uuid,
        /// Attribute name of the missing field.
        field: String,
    },

    /// The canonical identity could not be resolved or confirmed.
    #[error("could not resolve identity of article {uuid}: {reason}")]
    IdentityResolutionFailed {
        /// Identity of the placeholder document.
        uuid: Uuid,
        /// Collaborator failure or negative lookup.
        reason: String,
    },

    /// Structured content (blocks) is malformed.
    #[error("article {uuid} has invalid content: {reason}")]
    InvalidContent {
        /// Identity of the document.
        uuid: Uuid,
        /// Which part of the content is invalid.
        reason: String,
    },

    /// The document must not produce internal components.
    #[error("article {uuid} has no internal components: {reason}")]
    NoInternalComponents {
        /// Identity of the document.
        uuid: Uuid,
        /// Why nothing is produced.
        reason: String,
    },

    /// Catch-all for low-level parse, path and collaborator faults.
    #[error("transformation of article {uuid} failed: {reason}")]
    TransformationFailed {
        /// Identity of the document.
        uuid: Uuid,
        /// The underlying fault, rendered as text.
        reason: String,
    },
}

impl MappingError {
    /// Identity of the document the error belongs to.
    pub fn uuid(&self) -> Uuid {
        match self {
            MappingError::NotEligibleForPublish { uuid }
            | MappingError::MarkedDeleted { uuid }
            | MappingError::UntransformableContent { uuid, .. }
            | MappingError::MissingRequiredField { uuid, .. }
            | MappingError::IdentityResolutionFailed { uuid, .. }
            | MappingError::InvalidContent { uuid, .. }
            | MappingError::NoInternalComponents { uuid, .. }
            | MappingError::TransformationFailed { uuid, .. } => *uuid,
        }
    }

    pub(crate) fn failed(uuid: Uuid, cause: impl std::fmt::Display) -> Self {
        MappingError::TransformationFailed {
            uuid,
            reason: cause.to_string(),
        }
    }
}

/// Failure reported by an external collaborator (body transformer, blog
/// resolver, document store).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{service} call failed: {message}")]
pub struct ServiceError {
    /// Collaborator name, e.g. `document-store`.
    pub service: String,
    /// Human-readable failure detail.
    pub message: String,
}

impl ServiceError {
    pub fn new(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_exposes_its_uuid() {
        let uuid = Uuid::new_v4();
        let errors = [
            MappingError::NotEligibleForPublish { uuid },
            MappingError::MarkedDeleted { uuid },
            MappingError::UntransformableContent {
                uuid,
                reason: "blank".into(),
            },
            MappingError::MissingRequiredField {
                uuid,
                field: "serviceid".into(),
            },
            MappingError::IdentityResolutionFailed {
                uuid,
                reason: "404".into(),
            },
            MappingError::InvalidContent {
                uuid,
                reason: "no blocks".into(),
            },
            MappingError::NoInternalComponents {
                uuid,
                reason: "override".into(),
            },
            MappingError::failed(uuid, "boom"),
        ];
        for err in errors {
            assert_eq!(err.uuid(), uuid);
            assert!(err.to_string().contains(&uuid.to_string()), "{err}");
        }
    }

    #[test]
    fn service_error_names_the_collaborator() {
        let err = ServiceError::new("document-store", "connection refused");
        assert_eq!(
            err.to_string(),
            "document-store call failed: connection refused"
        );
    }
}
