use document::DocumentError;

use super::ArticleTrees;
use crate::paths;
use crate::types::Summary;

/// Summary placement. Present whenever the summary element exists; a blank
/// display position is `None`.
pub fn summary(trees: &ArticleTrees<'_, '_>) -> Result<Option<Summary>, DocumentError> {
    if trees.value.element(paths::SUMMARY)?.is_none() {
        return Ok(None);
    }
    Ok(Some(Summary {
        display_position: trees.value.non_blank(paths::SUMMARY_DISPLAY_POSITION)?,
    }))
}
