//! Eligibility gate.
//!
//! Every mapping call starts here. The gate asks the validator bound to the
//! document's [`SourceCode`] for a [`PublishingStatus`]; nothing is extracted
//! unless that status is [`PublishingStatus::Valid`].
use std::sync::Arc;

use document::XmlTree;
use tracing::debug;

use crate::config::MapperConfig;
use crate::markers::Flag;
use crate::paths;
use crate::source_code::SourceCode;
use crate::types::SourceDocument;

/// Outcome of the eligibility gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishingStatus {
    Valid,
    Ineligible,
    Deleted,
}

/// Decides whether a document may be published.
pub trait ArticleValidator: Send + Sync {
    fn publishing_status(
        &self,
        document: &SourceDocument,
        transaction_id: &str,
        preview: bool,
    ) -> PublishingStatus;
}

/// One validator per [`SourceCode`], bound at construction.
#[derive(Clone)]
pub struct Validators {
    ft: Arc<dyn ArticleValidator>,
    content_placeholder: Arc<dyn ArticleValidator>,
    dynamic_content: Arc<dyn ArticleValidator>,
}

impl Validators {
    pub fn new(
        ft: Arc<dyn ArticleValidator>,
        content_placeholder: Arc<dyn ArticleValidator>,
        dynamic_content: Arc<dyn ArticleValidator>,
    ) -> Self {
        Self {
            ft,
            content_placeholder,
            dynamic_content,
        }
    }

    /// The same validator for every source code.
    pub fn uniform(validator: Arc<dyn ArticleValidator>) -> Self {
        Self::new(validator.clone(), validator.clone(), validator)
    }

    pub fn for_source(&self, code: SourceCode) -> &dyn ArticleValidator {
        match code {
            SourceCode::Ft => self.ft.as_ref(),
            SourceCode::ContentPlaceholder => self.content_placeholder.as_ref(),
            SourceCode::DynamicContent => self.dynamic_content.as_ref(),
        }
    }

    /// Runs the gate. Documents without a registered source code are
    /// ineligible.
    pub fn publishing_status(
        &self,
        code: Option<SourceCode>,
        document: &SourceDocument,
        transaction_id: &str,
        preview: bool,
    ) -> PublishingStatus {
        match code {
            Some(code) => self
                .for_source(code)
                .publishing_status(document, transaction_id, preview),
            None => {
                debug!(uuid = %document.uuid, "unregistered source code");
                PublishingStatus::Ineligible
            }
        }
    }
}

/// Validator for regular Methode stories.
///
/// - `Deleted` when `DIFTcomMarkDeleted` is `true`
/// - `Ineligible` when the kind is not `EOM::CompoundStory`, the attributes
///   do not parse, or (outside preview) the workflow status is not publishable
/// - `Valid` otherwise
#[derive(Debug, Clone)]
pub struct StandardArticleValidator {
    publishable_workflow_statuses: Vec<String>,
}

impl StandardArticleValidator {
    pub const COMPOUND_STORY: &'static str = "EOM::CompoundStory";

    pub fn new(config: &MapperConfig) -> Self {
        Self {
            publishable_workflow_statuses: config.publishable_workflow_statuses.clone(),
        }
    }

    fn is_publishable(&self, status: &str) -> bool {
        let status = status.trim();
        self.publishable_workflow_statuses
            .iter()
            .any(|s| s.trim() == status)
    }
}

impl ArticleValidator for StandardArticleValidator {
    fn publishing_status(
        &self,
        document: &SourceDocument,
        transaction_id: &str,
        preview: bool,
    ) -> PublishingStatus {
        if document.kind != Self::COMPOUND_STORY {
            debug!(transaction_id, kind = %document.kind, "not a compound story");
            return PublishingStatus::Ineligible;
        }

        let attributes = match XmlTree::parse(&document.attributes) {
            Ok(tree) => tree,
            Err(err) => {
                debug!(transaction_id, error = %err, "attributes do not parse");
                return PublishingStatus::Ineligible;
            }
        };

        let deleted = attributes
            .string(paths::MARK_DELETED)
            .map(|raw| Flag::from_attribute(&raw) == Flag::True)
            .unwrap_or(false);
        if deleted {
            return PublishingStatus::Deleted;
        }

        if !preview && !self.is_publishable(&document.workflow_status) {
            debug!(
                transaction_id,
                workflow_status = %document.workflow_status,
                "workflow status not publishable"
            );
            return PublishingStatus::Ineligible;
        }

        PublishingStatus::Valid
    }
}
