use document::{inner_markup, DocumentError};

use super::ArticleTrees;
use crate::markers::{DummyText, PushNotificationsCohort};
use crate::paths;

/// Breaking-news cohort from the attributes, translated to its published
/// name. `None` for blank values and the literal `None`.
pub fn push_notifications_cohort(
    trees: &ArticleTrees<'_, '_>,
) -> Result<Option<String>, DocumentError> {
    Ok(trees
        .attributes
        .non_blank(paths::PUSH_NOTIFICATIONS_COHORT)?
        .and_then(|raw| PushNotificationsCohort::from_attribute(&raw).published()))
}

/// Push notification text, unless blank or an editor placeholder.
pub fn push_notifications_text(
    trees: &ArticleTrees<'_, '_>,
) -> Result<Option<String>, DocumentError> {
    let Some(node) = trees.value.element(paths::PUSH_NOTIFICATION_TEXT)? else {
        return Ok(None);
    };
    if DummyText::matches(inner_markup(node)) {
        return Ok(None);
    }
    trees.value.non_blank(paths::PUSH_NOTIFICATION_TEXT)
}
