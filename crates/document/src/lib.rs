//! Methode document trees
//!
//! Read-only XML trees for the two payloads a Methode story carries: the
//! article value (`/doc/...`) and the attributes (`/ObjectMetadata/...`).
//!
//! ## What we do here
//!
//! - **Parse safely** - DOCTYPE declarations are tolerated, external entities
//!   and DTDs are never fetched.
//! - **Query by absolute path** - a small path subset covering element steps,
//!   `*` and a trailing `@attribute`. See [`XPath`].
//! - **Hand back markup** - [`outer_markup`] and [`inner_markup`] slice the
//!   original text so escapes and child markup survive untouched.
//!
//! ## Example
//!
//! ```
//! use document::{inner_markup, XmlTree};
//!
//! let tree = XmlTree::parse("<doc><story><text><body><p>Hi</p></body></text></story></doc>").unwrap();
//! let body = tree.element("/doc/story/text/body").unwrap().unwrap();
//!
//! assert_eq!(inner_markup(body), "<p>Hi</p>");
//! assert_eq!(tree.string("/doc/story/text/body").unwrap(), "Hi");
//! ```

mod error;
mod path;
mod tree;

pub use crate::error::DocumentError;
pub use crate::path::{Step, XPath};
pub use crate::tree::{inner_markup, outer_markup, Selection, XmlTree};

pub use roxmltree::Node;
