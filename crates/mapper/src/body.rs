//! Body transformation pipeline.
//!
//! ```text
//! raw <body> ──transform──▶ transformed ──validate──▶ validated ──inject──▶ bodyXML
//!                                │                                 ▲
//!                     blank? preview/package ⇒ <body></body>       │
//!                     blank otherwise ⇒ UntransformableContent     │
//!                                          web-master fileref ─derive image set─┘
//! ```
use document::{outer_markup, DocumentError, XmlTree};
use tracing::debug;
use uuid::Uuid;

use crate::error::{MappingError, ServiceError};
use crate::extract::ArticleTrees;
use crate::image_set::derive_image_set_uuid;
use crate::markers::{ArticleImage, Flag};
use crate::paths;
use crate::ports::{BodyTransformer, MarkupNormalizer, TransformContext};

/// Canonical representation of a legitimately empty body.
pub const EMPTY_VALIDATED_BODY: &str = "<body></body>";

/// Content type marker on the injected main-image reference.
pub const IMAGE_SET_TYPE: &str = "http://www.ft.com/ontology/content/ImageSet";

const START_BODY: &str = "<body";
const END_BODY: &str = "</body>";
const UUID_MARKER: &str = "uuid=";

/// Whether the caller is publishing or previewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformationMode {
    Publish,
    Preview,
}

impl TransformationMode {
    pub fn from_preview(preview: bool) -> Self {
        if preview {
            TransformationMode::Preview
        } else {
            TransformationMode::Publish
        }
    }
}

/// Document type as far as body validation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A curated bundle; its body may be empty.
    ContentPackage,
    Article,
}

impl ContentType {
    pub fn of(attributes: &XmlTree<'_>) -> Result<Self, DocumentError> {
        let flag = Flag::from_attribute(&attributes.string(paths::IS_CONTENT_PACKAGE)?);
        Ok(if flag == Flag::True {
            ContentType::ContentPackage
        } else {
            ContentType::Article
        })
    }
}

/// Inner content of a `<body …>…</body>` string, trimmed. `None` when the
/// string is not a wrapped body.
///
/// ```rust
/// use mapper::unwrap_body;
///
/// assert_eq!(unwrap_body(r#"<body class="x"> <p>a</p> </body>"#), Some("<p>a</p>"));
/// assert_eq!(unwrap_body("<body></body>"), Some(""));
/// assert_eq!(unwrap_body("<p>a</p>"), None);
/// ```
pub fn unwrap_body(wrapped: &str) -> Option<&str> {
    if !wrapped.starts_with(START_BODY) || !wrapped.ends_with(END_BODY) {
        return None;
    }
    let inner_end = wrapped.len().checked_sub(END_BODY.len())?;
    let after_name = wrapped.get(START_BODY.len()..inner_end)?;
    if !after_name.starts_with(|c: char| c == '>' || c.is_whitespace()) {
        return None;
    }
    let open_end = START_BODY.len() + after_name.find('>')? + 1;
    Some(wrapped[open_end..inner_end].trim())
}

/// Runs the body transformer over a non-blank fragment; blank input gives `""`.
pub fn transform_body(
    raw: &str,
    transformer: &dyn BodyTransformer,
    ctx: &TransformContext<'_>,
) -> Result<String, ServiceError> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }
    transformer.transform(raw, ctx)
}

/// Applies the empty-body policy to a transformed body.
pub fn validate_body(
    mode: TransformationMode,
    content_type: ContentType,
    transformed: String,
    uuid: Uuid,
) -> Result<String, MappingError> {
    let trimmed = transformed.trim();
    if !trimmed.is_empty() {
        let inner = unwrap_body(trimmed).ok_or_else(|| {
            MappingError::failed(uuid, "transformed body is not wrapped in <body>")
        })?;
        if !inner.is_empty() {
            return Ok(transformed);
        }
    }

    if mode == TransformationMode::Preview {
        debug!(%uuid, "blank body accepted in preview");
        return Ok(EMPTY_VALIDATED_BODY.to_string());
    }
    if content_type == ContentType::ContentPackage {
        debug!(%uuid, "blank body accepted for content package");
        return Ok(EMPTY_VALIDATED_BODY.to_string());
    }

    Err(MappingError::UntransformableContent {
        uuid,
        reason: "not a valid Methode article for publication - transformed article body is blank"
            .into(),
    })
}

/// Image-set identity derived from the web-master image, if the article has one.
pub fn main_image_set_uuid(value: &XmlTree<'_>, uuid: Uuid) -> Result<Option<Uuid>, MappingError> {
    let fileref = value
        .string(paths::MAIN_IMAGE_FILEREF)
        .map_err(|e| MappingError::failed(uuid, e))?;
    let Some((_, tail)) = fileref.split_once(UUID_MARKER) else {
        return Ok(None);
    };
    let tail = tail.trim();
    if tail.is_empty() {
        return Ok(None);
    }
    let image = Uuid::parse_str(tail)
        .map_err(|e| MappingError::failed(uuid, format!("main image uuid `{tail}`: {e}")))?;
    Ok(Some(derive_image_set_uuid(image)))
}

/// Inserts the image-set reference as the first child of the body root and
/// normalizes the result.
pub fn inject_main_image(
    body: &str,
    image_set: Uuid,
    normalizer: &dyn MarkupNormalizer,
) -> Result<String, DocumentError> {
    let tree = XmlTree::parse(body)?;
    let text = tree.document().input_text();
    let root = tree.document().root_element();
    let range = root.range();
    let reference = format!(
        r#"<content id="{image_set}" type="{IMAGE_SET_TYPE}" data-embedded="true"></content>"#
    );

    let injected = match root.first_child() {
        Some(first) => splice(text, first.range().start, &reference),
        None => {
            let outer = outer_markup(root);
            match outer.strip_suffix("/>") {
                // <body/>: expand so the reference has somewhere to live.
                Some(open) => format!(
                    "{}{}>{}</{}>{}",
                    &text[..range.start],
                    open.trim_end(),
                    reference,
                    root.tag_name().name(),
                    &text[range.end..]
                ),
                None => {
                    let close = outer
                        .rfind("</")
                        .map_or(range.end, |idx| range.start + idx);
                    splice(text, close, &reference)
                }
            }
        }
    };

    Ok(normalizer.process(&injected))
}

fn splice(text: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

/// The transform, validate, derive and inject stages wired together.
pub struct BodyPipeline<'a> {
    transformer: &'a dyn BodyTransformer,
    normalizer: &'a dyn MarkupNormalizer,
}

impl<'a> BodyPipeline<'a> {
    pub fn new(transformer: &'a dyn BodyTransformer, normalizer: &'a dyn MarkupNormalizer) -> Self {
        Self {
            transformer,
            normalizer,
        }
    }

    pub fn run(
        &self,
        trees: &ArticleTrees<'_, '_>,
        ctx: &TransformContext<'_>,
    ) -> Result<String, MappingError> {
        let uuid = ctx.uuid;
        let fail = |e: DocumentError| MappingError::failed(uuid, e);

        let raw = trees
            .value
            .element(paths::BODY)
            .map_err(fail)?
            .map_or("", outer_markup);
        let content_type = ContentType::of(trees.attributes).map_err(fail)?;
        let mode = TransformationMode::from_preview(ctx.preview);

        let transformed = transform_body(raw, self.transformer, ctx)
            .map_err(|e| MappingError::failed(uuid, e))?;
        let validated = validate_body(mode, content_type, transformed, uuid)?;

        let Some(image_set) = main_image_set_uuid(trees.value, uuid)? else {
            return Ok(validated);
        };
        let flag = trees.attributes.string(paths::ARTICLE_IMAGE).map_err(fail)?;
        if ArticleImage::from_attribute(&flag) == ArticleImage::NoPicture {
            debug!(%uuid, "main image suppressed by no-picture flag");
            return Ok(validated);
        }

        inject_main_image(&validated, image_set, self.normalizer).map_err(fail)
    }
}
