//! Parsed, read-only document trees and the three query shapes over them.
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::DocumentError;
use crate::path::XPath;

/// A match produced by evaluating a path.
#[derive(Debug, Clone, Copy)]
pub enum Selection<'a, 'input: 'a> {
    /// An element node.
    Element(Node<'a, 'input>),
    /// An attribute, together with the element carrying it.
    Attribute {
        /// Element the attribute belongs to.
        owner: Node<'a, 'input>,
        /// Unescaped attribute value.
        value: &'a str,
    },
}

impl<'a, 'input: 'a> Selection<'a, 'input> {
    /// XPath string-value: attribute value, or the concatenated text of all
    /// descendant text nodes of an element.
    pub fn string_value(&self) -> String {
        match self {
            Selection::Attribute { value, .. } => (*value).to_string(),
            Selection::Element(node) => node
                .descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect(),
        }
    }

    /// The selected element, or `None` for attribute matches.
    pub fn as_element(&self) -> Option<Node<'a, 'input>> {
        match self {
            Selection::Element(node) => Some(*node),
            Selection::Attribute { .. } => None,
        }
    }
}

/// One parsed document, borrowed from its source text.
///
/// Parsing accepts a DOCTYPE but never resolves external entities or loads
/// external DTD subsets; only the predefined and internally declared
/// entities are expanded.
///
/// # Examples
///
/// ```rust
/// use document::XmlTree;
///
/// let tree = XmlTree::parse(
///     r#"<doc><lead><topper layout="split"><topper-headline> Hi </topper-headline></topper></lead></doc>"#,
/// ).unwrap();
///
/// assert_eq!(tree.string("/doc/lead/topper/@layout").unwrap(), "split");
/// assert_eq!(tree.non_blank("/doc/lead/topper/topper-headline").unwrap().as_deref(), Some("Hi"));
/// assert_eq!(tree.string("/doc/lead/missing").unwrap(), "");
/// ```
#[derive(Debug)]
pub struct XmlTree<'input> {
    doc: Document<'input>,
}

impl<'input> XmlTree<'input> {
    /// Parses XML text.
    pub fn parse(text: &'input str) -> Result<Self, DocumentError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let options = ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = Document::parse_with_options(text, options)
            .map_err(|e| DocumentError::Malformed(e.to_string()))?;
        Ok(Self { doc })
    }

    /// Decodes `bytes` as UTF-8 and parses the result.
    pub fn parse_bytes(bytes: &'input [u8]) -> Result<Self, DocumentError> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| DocumentError::InvalidUtf8(e.to_string()))?;
        Self::parse(text)
    }

    /// The underlying `roxmltree` document.
    pub fn document(&self) -> &Document<'input> {
        &self.doc
    }

    /// Local name of the root element.
    pub fn root_name(&self) -> &str {
        self.doc.root_element().tag_name().name()
    }

    /// Every match of `path`, in document order.
    pub fn nodes(&self, path: &str) -> Result<Vec<Selection<'_, 'input>>, DocumentError> {
        Ok(XPath::compile(path)?.select(&self.doc))
    }

    /// First match of `path`, if any.
    pub fn node(&self, path: &str) -> Result<Option<Selection<'_, 'input>>, DocumentError> {
        Ok(self.nodes(path)?.into_iter().next())
    }

    /// First element matched by `path`; attribute matches are ignored.
    pub fn element(&self, path: &str) -> Result<Option<Node<'_, 'input>>, DocumentError> {
        Ok(self.nodes(path)?.iter().find_map(Selection::as_element))
    }

    /// Whether `path` matches anything.
    pub fn exists(&self, path: &str) -> Result<bool, DocumentError> {
        Ok(self.node(path)?.is_some())
    }

    /// String-value of the first match, or `""` when nothing matches.
    pub fn string(&self, path: &str) -> Result<String, DocumentError> {
        Ok(self
            .node(path)?
            .map(|selection| selection.string_value())
            .unwrap_or_default())
    }

    /// Trimmed string-value of the first match; `None` when absent or blank.
    pub fn non_blank(&self, path: &str) -> Result<Option<String>, DocumentError> {
        let value = self.string(path)?;
        let trimmed = value.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }
}

/// Source text of `node` itself, markup included. Never carries an XML
/// declaration since declarations are not nodes.
pub fn outer_markup<'input>(node: Node<'_, 'input>) -> &'input str {
    let text = node.document().input_text();
    &text[node.range()]
}

/// Source text between the start and end tag of `node`; `""` for empty or
/// self-closed elements.
pub fn inner_markup<'input>(node: Node<'_, 'input>) -> &'input str {
    let text = node.document().input_text();
    match (node.first_child(), node.last_child()) {
        (Some(first), Some(last)) => &text[first.range().start..last.range().end],
        _ => "",
    }
}
