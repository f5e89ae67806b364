//! Sentinel values with business meaning, recognised once at the document
//! boundary instead of compared ad hoc.
use once_cell::sync::Lazy;
use regex::Regex;

static DUMMY_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^<\?EM-dummyText.*\?>$").expect("DUMMY_TEXT: hardcoded regex is valid")
});

/// Editor placeholder left in an empty field, e.g.
/// `<?EM-dummyText [Push notification text]?>`.
pub struct DummyText;

impl DummyText {
    /// Whether `markup`, trimmed, is nothing but a dummy-text marker.
    pub fn matches(markup: &str) -> bool {
        DUMMY_TEXT.is_match(markup.trim())
    }
}

/// The `DIFTcomArticleImage` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleImage {
    /// Editors asked for no main picture; nothing is injected into the body.
    NoPicture,
    /// Any other value, including absence.
    Default,
}

impl ArticleImage {
    const NO_PICTURE: &'static str = "No picture";

    pub fn from_attribute(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(Self::NO_PICTURE) {
            ArticleImage::NoPicture
        } else {
            ArticleImage::Default
        }
    }
}

/// A `true`/`false` attribute flag, compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    True,
    False,
    /// Missing, blank or any other text.
    Unset,
}

impl Flag {
    pub fn from_attribute(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Flag::True
        } else if raw.eq_ignore_ascii_case("false") {
            Flag::False
        } else {
            Flag::Unset
        }
    }
}

/// Audience of a breaking-news push notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushNotificationsCohort {
    UkBreakingNews,
    GlobalBreakingNews,
    /// Literal `None`: no notification.
    Disabled,
    /// Unrecognised value, kept verbatim.
    Other(String),
}

impl PushNotificationsCohort {
    /// Recognises a non-blank attribute value. Matching is exact.
    pub fn from_attribute(raw: &str) -> Self {
        match raw.trim() {
            "UK_breaking_news" => PushNotificationsCohort::UkBreakingNews,
            "Global_breaking_news" => PushNotificationsCohort::GlobalBreakingNews,
            "None" => PushNotificationsCohort::Disabled,
            other => PushNotificationsCohort::Other(other.to_string()),
        }
    }

    /// Value published downstream, if any.
    pub fn published(&self) -> Option<String> {
        match self {
            PushNotificationsCohort::UkBreakingNews => Some("uk-breaking-news".into()),
            PushNotificationsCohort::GlobalBreakingNews => Some("global-breaking-news".into()),
            PushNotificationsCohort::Disabled => None,
            PushNotificationsCohort::Other(raw) => Some(raw.clone()),
        }
    }
}
