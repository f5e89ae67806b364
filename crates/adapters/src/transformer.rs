use tracing::trace;

use mapper::{BodyTransformer, ServiceError, TransformContext};

/// [`BodyTransformer`] that returns its input unchanged.
///
/// Used by the `icm` binary when no remote transformer is configured, and in
/// tests that exercise the mapper without rewriting markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughBodyTransformer;

impl BodyTransformer for PassThroughBodyTransformer {
    fn transform(&self, markup: &str, ctx: &TransformContext<'_>) -> Result<String, ServiceError> {
        trace!(uuid = %ctx.uuid, transaction_id = ctx.transaction_id, "pass-through body transform");
        Ok(markup.to_string())
    }
}
