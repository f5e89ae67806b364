//! Compiled absolute location paths.
//!
//! The supported subset is what Methode field lookups need and nothing more:
//!
//! ```text
//! /doc/lead/lead-images/web-master/@fileref
//! └┬┘ └──────────┬─────────────────┘ └──┬──┘
//!  root step   child steps (name or *)  optional trailing attribute step
//! ```
//!
//! Predicates, axes, functions and relative paths are rejected at compile time
//! with [`DocumentError::InvalidPath`].
use std::fmt;
use std::str::FromStr;

use roxmltree::{Document, Node};

use crate::error::DocumentError;
use crate::tree::Selection;

/// One element step of a compiled path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Matches elements whose local name equals the given name.
    Named(String),
    /// `*`: matches any element.
    Any,
}

impl Step {
    fn matches(&self, node: &Node<'_, '_>) -> bool {
        node.is_element()
            && match self {
                Step::Named(name) => node.tag_name().name() == name,
                Step::Any => true,
            }
    }
}

/// An absolute path expression, compiled once and evaluated many times.
///
/// # Examples
///
/// ```rust
/// use document::{XPath, XmlTree};
///
/// let path = XPath::compile("/doc/lead/topper/@layout").unwrap();
/// let tree = XmlTree::parse(r#"<doc><lead><topper layout="split"/></lead></doc>"#).unwrap();
///
/// let hits = path.select(tree.document());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].string_value(), "split");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath {
    expr: String,
    steps: Vec<Step>,
    attribute: Option<String>,
}

impl XPath {
    /// Compiles `expr`, rejecting anything outside the supported subset.
    pub fn compile(expr: &str) -> Result<Self, DocumentError> {
        let invalid = |reason: &str| DocumentError::InvalidPath {
            path: expr.to_string(),
            reason: reason.to_string(),
        };

        let rest = expr
            .strip_prefix('/')
            .ok_or_else(|| invalid("path must be absolute"))?;
        if rest.is_empty() {
            return Err(invalid("path selects no element"));
        }

        let segments: Vec<&str> = rest.split('/').collect();
        let last = segments.len() - 1;
        let mut steps = Vec::with_capacity(segments.len());
        let mut attribute = None;

        for (idx, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(invalid("empty step (descendant axis is not supported)"));
            }
            if let Some(name) = segment.strip_prefix('@') {
                if idx != last {
                    return Err(invalid("attribute step must be the last step"));
                }
                if !is_name(name) {
                    return Err(invalid("attribute name is not a valid XML name"));
                }
                attribute = Some(name.to_string());
            } else if *segment == "*" {
                steps.push(Step::Any);
            } else if is_name(segment) {
                steps.push(Step::Named((*segment).to_string()));
            } else {
                return Err(invalid("unsupported step syntax"));
            }
        }

        if steps.is_empty() {
            return Err(invalid("path selects no element"));
        }

        Ok(Self {
            expr: expr.to_string(),
            steps,
            attribute,
        })
    }

    /// The expression this path was compiled from.
    pub fn as_str(&self) -> &str {
        &self.expr
    }

    /// Element steps, root first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Trailing attribute name, if the path ends in `@name`.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Evaluates the path against `doc`, returning matches in document order.
    pub fn select<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Selection<'a, 'input>> {
        let root = doc.root_element();
        let (first, rest) = match self.steps.split_first() {
            Some(split) => split,
            None => return Vec::new(),
        };

        let mut frontier = if first.matches(&root) {
            vec![root]
        } else {
            Vec::new()
        };
        for step in rest {
            frontier = frontier
                .iter()
                .flat_map(|node| node.children().filter(|child| step.matches(child)))
                .collect();
            if frontier.is_empty() {
                break;
            }
        }

        match &self.attribute {
            None => frontier.into_iter().map(Selection::Element).collect(),
            Some(name) => frontier
                .into_iter()
                .filter_map(|owner| {
                    owner
                        .attribute(name.as_str())
                        .map(|value| Selection::Attribute { owner, value })
                })
                .collect(),
        }
    }
}

impl FromStr for XPath {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

fn is_name(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_element_and_attribute_steps() {
        let path = XPath::compile("/doc/lead/lead-images/web-master/@fileref").unwrap();
        assert_eq!(path.steps().len(), 4);
        assert_eq!(path.steps()[0], Step::Named("doc".into()));
        assert_eq!(path.attribute(), Some("fileref"));
        assert_eq!(path.to_string(), "/doc/lead/lead-images/web-master/@fileref");
    }

    #[test]
    fn wildcard_step_is_accepted() {
        let path: XPath = "/doc/*/body".parse().unwrap();
        assert_eq!(path.steps()[1], Step::Any);
        assert_eq!(path.attribute(), None);
    }

    #[test]
    fn rejects_unsupported_syntax() {
        let cases = [
            ("doc/lead", "absolute"),
            ("/", "no element"),
            ("//body", "descendant"),
            ("/doc/@a/b", "last step"),
            ("/@id", "no element"),
            ("/doc/block[1]", "unsupported"),
            ("/doc/text()", "unsupported"),
            ("/doc/@1bad", "attribute name"),
        ];
        for (expr, fragment) in cases {
            match XPath::compile(expr) {
                Err(DocumentError::InvalidPath { reason, .. }) => {
                    assert!(reason.contains(fragment), "{expr}: {reason}")
                }
                other => panic!("{expr} should not compile, got {other:?}"),
            }
        }
    }

    #[test]
    fn root_step_must_match_root_element() {
        let doc = Document::parse("<doc><lead/></doc>").unwrap();
        let path = XPath::compile("/other/lead").unwrap();
        assert!(path.select(&doc).is_empty());
    }

    #[test]
    fn selects_all_matches_in_document_order() {
        let doc = Document::parse("<doc><p>a</p><q/><p>b</p></doc>").unwrap();
        let hits = XPath::compile("/doc/p").unwrap().select(&doc);
        let values: Vec<String> = hits.iter().map(|s| s.string_value()).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn attribute_step_skips_owners_without_the_attribute() {
        let doc = Document::parse(r#"<doc><img src="1"/><img/><img src="3"/></doc>"#).unwrap();
        let hits = XPath::compile("/doc/img/@src").unwrap().select(&doc);
        let values: Vec<String> = hits.iter().map(|s| s.string_value()).collect();
        assert_eq!(values, vec!["1", "3"]);
    }
}
