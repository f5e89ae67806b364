//! HTML5-compatible serialization of XML fragments.
//!
//! XML serializers write empty elements either as `<x></x>` or `<x/>`
//! regardless of the element. HTML5 parsers only understand the short form
//! for void elements, so:
//!
//! - void elements are always self-closed: `<br></br>` becomes `<br/>`
//! - every other element is always expanded: `<p/>` becomes `<p></p>`
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use mapper::MarkupNormalizer;

/// Elements HTML5 defines as having no content.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const NAME: &str = r"[A-Za-z][A-Za-z0-9:._-]*";
const ATTRS: &str = r#"(?:\s+[^\s=/>]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*"#;

static EMPTY_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"<({NAME})({ATTRS})\s*>\s*</({NAME})\s*>"))
        .expect("EMPTY_PAIR: hardcoded regex is valid")
});

static SELF_CLOSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"<({NAME})({ATTRS})\s*/>")).expect("SELF_CLOSED: hardcoded regex is valid")
});

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// [`MarkupNormalizer`] that fixes the closing form of empty elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html5SelfClosingNormalizer;

impl Html5SelfClosingNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupNormalizer for Html5SelfClosingNormalizer {
    fn process(&self, markup: &str) -> String {
        let collapsed = EMPTY_PAIR.replace_all(markup, |caps: &Captures<'_>| {
            let (open, close) = (&caps[1], &caps[3]);
            if open.eq_ignore_ascii_case(close) && is_void(open) {
                format!("<{open}{}/>", &caps[2])
            } else {
                caps[0].to_string()
            }
        });

        SELF_CLOSED
            .replace_all(&collapsed, |caps: &Captures<'_>| {
                let name = &caps[1];
                if is_void(name) {
                    format!("<{name}{}/>", &caps[2])
                } else {
                    format!("<{name}{}></{name}>", &caps[2])
                }
            })
            .into_owned()
    }
}
