use document::DocumentError;

use super::{trimmed, ArticleTrees};
use crate::paths;
use crate::types::Topper;

/// Topper of the article. Present only when its layout is non-blank; the
/// text fields then default to `""`.
pub fn topper(trees: &ArticleTrees<'_, '_>) -> Result<Option<Topper>, DocumentError> {
    let layout = trimmed(trees.value, paths::TOPPER_LAYOUT)?;
    if layout.is_empty() {
        return Ok(None);
    }

    Ok(Some(Topper {
        headline: trimmed(trees.value, paths::TOPPER_HEADLINE)?,
        standfirst: trimmed(trees.value, paths::TOPPER_STANDFIRST)?,
        background_colour: trimmed(trees.value, paths::TOPPER_BACKGROUND)?,
        layout,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::*;

    fn run(topper_xml: &str) -> Option<Topper> {
        let value = lead(&format!("<lead-components>{topper_xml}</lead-components>"));
        let (a, v) = (parse(EMPTY_ATTRIBUTES), parse(&value));
        topper(&ArticleTrees::new(&a, &v)).unwrap()
    }

    #[test]
    fn full_topper() {
        let topper = run(
            r#"<topper layout="split-text-left" background-colour="pink">
                 <topper-headline>Topper headline</topper-headline>
                 <topper-standfirst> Topper <b>standfirst</b> </topper-standfirst>
               </topper>"#,
        )
        .unwrap();
        assert_eq!(
            topper,
            Topper {
                headline: "Topper headline".into(),
                standfirst: "Topper standfirst".into(),
                background_colour: "pink".into(),
                layout: "split-text-left".into(),
            }
        );
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let topper = run(r#"<topper layout="full-bleed-offset" background-colour="auto"/>"#).unwrap();
        assert_eq!(topper.headline, "");
        assert_eq!(topper.standfirst, "");
        assert_eq!(topper.background_colour, "auto");
    }

    #[test]
    fn no_topper_without_layout() {
        assert_eq!(
            run(r#"<topper background-colour="pink"><topper-headline>H</topper-headline></topper>"#),
            None
        );
        assert_eq!(run(r#"<topper layout="  "/>"#), None);
        assert_eq!(run(""), None);
    }
}
