//! Contracts for the external collaborators the mapper calls.
//!
//! Every port is `Send + Sync` so one mapper can be shared across threads.
//! Implementations own their own timeout and retry policy; the mapper calls
//! each at most once per need and never retries.
use uuid::Uuid;

use crate::error::ServiceError;

/// Per-call context handed to the body transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformContext<'a> {
    pub uuid: Uuid,
    pub transaction_id: &'a str,
    pub api_host: &'a str,
    pub preview: bool,
}

/// Rewrites a `<body>…</body>` fragment into publishable markup.
pub trait BodyTransformer: Send + Sync {
    fn transform(&self, markup: &str, ctx: &TransformContext<'_>) -> Result<String, ServiceError>;
}

/// Rewrites serialized fragments into self-closing-tag-correct markup.
pub trait MarkupNormalizer: Send + Sync {
    fn process(&self, markup: &str) -> String;
}

/// Resolves the canonical identity of an externally hosted blog post.
pub trait BlogUuidResolver: Send + Sync {
    fn resolve(
        &self,
        service_id: &str,
        ref_field: &str,
        transaction_id: &str,
    ) -> Result<Uuid, ServiceError>;
}

/// Checks whether content with a given identity exists downstream.
pub trait ExistenceChecker: Send + Sync {
    fn exists(&self, uuid: Uuid, transaction_id: &str) -> Result<bool, ServiceError>;
}
