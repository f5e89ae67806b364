//! Methode mapper adapters
//!
//! Concrete implementations of the mapper's collaborator ports.
//!
//! ## What we do here
//!
//! - **Normalize markup** - [`Html5SelfClosingNormalizer`] rewrites empty
//!   elements into the form HTML5 parsers expect.
//! - **Transform bodies** - [`PassThroughBodyTransformer`] hands bodies back
//!   untouched when no remote transformer is wired in.
//! - **Check existence** - [`HttpDocumentStore`] asks the document store
//!   whether a piece of content exists.
//! - **Resolve blog posts** - [`HttpBlogResolver`] looks up the canonical
//!   identity of a blog post by identifier authority and value.
//!
//! HTTP collaborators are blocking, forward the transaction id as
//! `X-Request-Id`, apply the configured timeout and never retry.

mod blog_resolver;
mod config;
mod document_store;
mod error;
mod normalizer;
mod transformer;

pub use crate::blog_resolver::HttpBlogResolver;
pub use crate::config::{BlogResolverConfig, DocumentStoreConfig};
pub use crate::document_store::HttpDocumentStore;
pub use crate::error::AdapterError;
pub use crate::normalizer::{Html5SelfClosingNormalizer, VOID_ELEMENTS};
pub use crate::transformer::PassThroughBodyTransformer;

/// Header carrying the transaction id on outbound requests.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";
