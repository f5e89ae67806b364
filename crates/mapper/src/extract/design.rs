use document::DocumentError;

use super::{trimmed, ArticleTrees};
use crate::paths;
use crate::types::Design;

/// Page design. The theme prefers the `DesignTheme` attribute over the legacy
/// content-package attribute; both fields fall back to their defaults.
pub fn design(trees: &ArticleTrees<'_, '_>) -> Result<Design, DocumentError> {
    let theme = [
        trimmed(trees.attributes, paths::DESIGN_THEME)?,
        trimmed(trees.value, paths::LEGACY_DESIGN_THEME)?,
    ]
    .into_iter()
    .find(|t| !t.is_empty())
    .unwrap_or_else(|| Design::DEFAULT_THEME.to_string());

    let layout = Some(trimmed(trees.attributes, paths::DESIGN_LAYOUT)?)
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| Design::DEFAULT_LAYOUT.to_string());

    Ok(Design { theme, layout })
}
