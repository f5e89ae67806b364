//! Field extractors.
//!
//! Each extractor is a standalone pure function over [`ArticleTrees`] with its
//! own presence and default policy. They share no state and may run in any
//! order; the only failure they report is a [`DocumentError`] from the query
//! layer.
use document::{DocumentError, XmlTree};

pub mod design;
pub mod images;
pub mod package;
pub mod push;
pub mod summary;
pub mod topper;

pub use design::design;
pub use images::lead_images;
pub use package::{table_of_contents, unpublished_content_description};
pub use push::{push_notifications_cohort, push_notifications_text};
pub use summary::summary;
pub use topper::topper;

/// The two parsed payloads of one source document.
pub struct ArticleTrees<'t, 'input> {
    /// `/ObjectMetadata` attributes tree.
    pub attributes: &'t XmlTree<'input>,
    /// `/doc` article value tree.
    pub value: &'t XmlTree<'input>,
}

impl<'t, 'input> ArticleTrees<'t, 'input> {
    pub fn new(attributes: &'t XmlTree<'input>, value: &'t XmlTree<'input>) -> Self {
        Self { attributes, value }
    }
}

/// Trimmed string value at `path`, `""` when absent.
pub(crate) fn trimmed(tree: &XmlTree<'_>, path: &str) -> Result<String, DocumentError> {
    Ok(tree.string(path)?.trim().to_string())
}
