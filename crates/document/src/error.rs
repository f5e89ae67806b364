//! Error types produced by the document crate.
//!
//! Parsing and path compilation are the only fallible operations. Queries over
//! an already parsed tree never fail once their path has compiled.
use thiserror::Error;

/// Errors raised while parsing a document or compiling a path expression.
///
/// | Error | When |
/// |-------|------|
/// | [`InvalidUtf8`](DocumentError::InvalidUtf8) | Raw bytes are not UTF-8 |
/// | [`Malformed`](DocumentError::Malformed) | The text is not well-formed XML |
/// | [`InvalidPath`](DocumentError::InvalidPath) | A path expression is outside the supported subset |
///
/// # Examples
///
/// ```rust
/// use document::{DocumentError, XmlTree};
///
/// match XmlTree::parse("<doc><unclosed></doc>") {
///     Err(DocumentError::Malformed(msg)) => assert!(!msg.is_empty()),
///     other => panic!("expected malformed error, got {other:?}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    /// The raw document bytes could not be decoded as UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// The document text is not well-formed XML.
    #[error("malformed XML: {0}")]
    Malformed(String),

    /// The path expression uses syntax the query layer does not support.
    #[error("invalid path `{path}`: {reason}")]
    InvalidPath {
        /// The offending expression, verbatim.
        path: String,
        /// What was wrong with it.
        reason: String,
    },
}
