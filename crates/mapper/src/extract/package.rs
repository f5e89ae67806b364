//! Content-package fields: table of contents and the "coming next" text.
use document::{inner_markup, DocumentError};

use super::{trimmed, ArticleTrees};
use crate::markers::DummyText;
use crate::paths;
use crate::ports::MarkupNormalizer;
use crate::types::TableOfContents;

/// Present when either the sequence or the label is non-blank.
pub fn table_of_contents(
    trees: &ArticleTrees<'_, '_>,
) -> Result<Option<TableOfContents>, DocumentError> {
    let sequence = trimmed(trees.value, paths::TOC_SEQUENCE)?;
    let label_type = trimmed(trees.value, paths::TOC_LABEL)?;

    if sequence.is_empty() && label_type.is_empty() {
        return Ok(None);
    }
    Ok(Some(TableOfContents {
        sequence,
        label_type,
    }))
}

/// Inline markup of `content-package-next`, normalized and trimmed. Absent,
/// blank and dummy-text values yield `None`.
pub fn unpublished_content_description(
    trees: &ArticleTrees<'_, '_>,
    normalizer: &dyn MarkupNormalizer,
) -> Result<Option<String>, DocumentError> {
    let Some(node) = trees.value.element(paths::CONTENT_PACKAGE_NEXT)? else {
        return Ok(None);
    };

    let markup = inner_markup(node).trim();
    if markup.is_empty() || DummyText::matches(markup) {
        return Ok(None);
    }

    let normalized = normalizer.process(markup);
    let description = normalized.trim();
    Ok((!description.is_empty()).then(|| description.to_string()))
}
