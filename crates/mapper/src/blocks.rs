use document::{inner_markup, DocumentError};
use tracing::debug;

use crate::body::{unwrap_body, TransformationMode};
use crate::error::MappingError;
use crate::extract::ArticleTrees;
use crate::paths;
use crate::ports::{BodyTransformer, TransformContext};
use crate::types::Block;

/// Type tag carried by every extracted block.
pub const HTML_BLOCK: &str = "html-block";

/// Numbered blocks of a dynamic-content document, in slot order.
///
/// Slots are read from `block-1` upwards and iteration stops at the first
/// absent slot. Each html value goes through the body transformer wrapped in
/// `<body>` and comes back unwrapped.
pub fn blocks(
    trees: &ArticleTrees<'_, '_>,
    transformer: &dyn BodyTransformer,
    ctx: &TransformContext<'_>,
) -> Result<Vec<Block>, MappingError> {
    let uuid = ctx.uuid;
    let fail = |e: DocumentError| MappingError::failed(uuid, e);

    if trees.value.element(paths::BLOCKS).map_err(fail)?.is_none() {
        if TransformationMode::from_preview(ctx.preview) == TransformationMode::Preview {
            debug!(%uuid, "no blocks section in preview");
            return Ok(Vec::new());
        }
        return Err(MappingError::InvalidContent {
            uuid,
            reason: "dynamic content has no blocks".into(),
        });
    }

    let mut out = Vec::new();
    for n in 1.. {
        let slot = paths::block_slot(n);
        if trees.value.element(&slot).map_err(fail)?.is_none() {
            break;
        }

        let key = trees
            .value
            .string(&format!("{slot}/block-name"))
            .map_err(fail)?
            .trim()
            .to_string();
        let raw = trees
            .value
            .element(&format!("{slot}/block-html-value"))
            .map_err(fail)?
            .map_or("", inner_markup)
            .trim();
        if raw.is_empty() {
            return Err(MappingError::InvalidContent {
                uuid,
                reason: format!("block {n} has a blank value"),
            });
        }

        let transformed = transformer
            .transform(&format!("<body>{raw}</body>"), ctx)
            .map_err(|e| MappingError::failed(uuid, e))?;
        let value = unwrap_body(transformed.trim()).ok_or_else(|| {
            MappingError::failed(uuid, format!("block {n} transform is not wrapped in <body>"))
        })?;
        if value.is_empty() {
            return Err(MappingError::InvalidContent {
                uuid,
                reason: format!("block {n} is empty after transformation"),
            });
        }

        out.push(Block {
            key,
            value_xml: value.to_string(),
            kind: HTML_BLOCK.to_string(),
        });
    }

    debug!(%uuid, count = out.len(), "blocks extracted");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::extract::fixtures::{parse, EMPTY_ATTRIBUTES};
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Echoes its input, recording every call.
    #[derive(Default)]
    struct Echo(Mutex<Vec<String>>);

    impl BodyTransformer for Echo {
        fn transform(&self, markup: &str, _: &TransformContext<'_>) -> Result<String, ServiceError> {
            self.0.lock().unwrap().push(markup.to_string());
            Ok(markup.to_string())
        }
    }

    struct Returning(&'static str);

    impl BodyTransformer for Returning {
        fn transform(&self, _: &str, _: &TransformContext<'_>) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    fn ctx(preview: bool) -> TransformContext<'static> {
        TransformContext {
            uuid: Uuid::nil(),
            transaction_id: "tid_test",
            api_host: "test.api.ft.com",
            preview,
        }
    }

    fn slot(n: usize, name: &str, value: &str) -> String {
        format!(
            "<block-{n}><block-name>{name}</block-name><block-html-value>{value}</block-html-value></block-{n}>"
        )
    }

    fn run_with(
        blocks_xml: &str,
        transformer: &dyn BodyTransformer,
        preview: bool,
    ) -> Result<Vec<Block>, MappingError> {
        let value = format!("<doc><lead/><story/>{blocks_xml}</doc>");
        let (a, v) = (parse(EMPTY_ATTRIBUTES), parse(&value));
        blocks(&ArticleTrees::new(&a, &v), transformer, &ctx(preview))
    }

    #[test]
    fn single_block_is_extracted() {
        let got = run_with(
            &format!("<blocks>{}</blocks>", slot(1, "x", "x-value")),
            &Echo::default(),
            false,
        )
        .unwrap();
        assert_eq!(
            got,
            vec![Block {
                key: "x".into(),
                value_xml: "x-value".into(),
                kind: HTML_BLOCK.into(),
            }]
        );
    }

    #[test]
    fn blank_key_is_kept() {
        let got = run_with(
            &format!("<blocks>{}</blocks>", slot(1, " ", "x-value")),
            &Echo::default(),
            false,
        )
        .unwrap();
        assert_eq!(got[0].key, "");
        assert_eq!(got[0].value_xml, "x-value");
    }

    #[test]
    fn value_is_wrapped_for_the_transformer() {
        let echo = Echo::default();
        run_with(
            &format!("<blocks>{}</blocks>", slot(1, "k", "<p>a</p>")),
            &echo,
            false,
        )
        .unwrap();
        assert_eq!(echo.0.lock().unwrap().as_slice(), ["<body><p>a</p></body>"]);
    }

    #[test]
    fn iteration_stops_at_first_gap() {
        let xml = format!(
            "<blocks>{}{}{}</blocks>",
            slot(1, "a", "1"),
            slot(2, "b", "2"),
            slot(4, "d", "4")
        );
        let keys: Vec<String> = run_with(&xml, &Echo::default(), false)
            .unwrap()
            .into_iter()
            .map(|b| b.key)
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn blank_value_is_invalid() {
        let err = run_with(
            &format!("<blocks>{}</blocks>", slot(1, "x", "  ")),
            &Echo::default(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::InvalidContent { .. }));
    }

    #[test]
    fn empty_transform_result_is_invalid() {
        let err = run_with(
            &format!("<blocks>{}</blocks>", slot(1, "x", "x-value")),
            &Returning("<body></body>"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::InvalidContent { .. }));
    }

    #[test]
    fn unwrapped_transform_result_fails() {
        let err = run_with(
            &format!("<blocks>{}</blocks>", slot(1, "x", "x-value")),
            &Returning("x-value"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, MappingError::TransformationFailed { .. }));
    }

    #[test]
    fn missing_section_depends_on_mode() {
        assert_eq!(run_with("", &Echo::default(), true).unwrap(), Vec::new());
        let err = run_with("", &Echo::default(), false).unwrap_err();
        assert!(matches!(err, MappingError::InvalidContent { .. }));
    }

    #[test]
    fn empty_section_gives_empty_list() {
        assert!(run_with("<blocks/>", &Echo::default(), false).unwrap().is_empty());
    }
}
