//! Document provenance tags.
use std::fmt;
use std::str::FromStr;

use document::XmlTree;
use thiserror::Error;

use crate::paths;

/// Provenance of a Methode story. Selects the validator, whether a body and
/// blocks are produced, and whether identity resolution runs.
///
/// ```rust
/// use mapper::SourceCode;
///
/// let code: SourceCode = "ContentPlaceholder".parse().unwrap();
/// assert!(code.resolves_identity());
/// assert!(!code.has_body());
/// assert!("Reuters".parse::<SourceCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCode {
    /// FT-authored article.
    Ft,
    /// Stand-in for externally hosted content.
    ContentPlaceholder,
    /// Block-structured dynamic content.
    DynamicContent,
}

impl SourceCode {
    pub const ALL: [SourceCode; 3] = [
        SourceCode::Ft,
        SourceCode::ContentPlaceholder,
        SourceCode::DynamicContent,
    ];

    /// Value of the `SourceCode` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SourceCode::Ft => "FT",
            SourceCode::ContentPlaceholder => "ContentPlaceholder",
            SourceCode::DynamicContent => "DynamicContent",
        }
    }

    /// Whether the body pipeline runs. Placeholders carry no body.
    pub const fn has_body(&self) -> bool {
        match self {
            SourceCode::Ft | SourceCode::DynamicContent => true,
            SourceCode::ContentPlaceholder => false,
        }
    }

    /// Whether body blocks are extracted.
    pub const fn has_blocks(&self) -> bool {
        match self {
            SourceCode::DynamicContent => true,
            SourceCode::Ft | SourceCode::ContentPlaceholder => false,
        }
    }

    /// Whether the output identity may differ from the document identity.
    pub const fn resolves_identity(&self) -> bool {
        match self {
            SourceCode::ContentPlaceholder => true,
            SourceCode::Ft | SourceCode::DynamicContent => false,
        }
    }

    /// Reads the source code of an attributes document. `None` when the
    /// attributes do not parse or carry no registered source code.
    pub fn of_attributes(attributes: &str) -> Option<SourceCode> {
        let tree = XmlTree::parse(attributes).ok()?;
        tree.string(paths::SOURCE_CODE).ok()?.parse().ok()
    }
}

impl fmt::Display for SourceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source code with no registered variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown source code `{0}`")]
pub struct UnknownSourceCode(pub String);

impl FromStr for SourceCode {
    type Err = UnknownSourceCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SourceCode::ALL
            .into_iter()
            .find(|code| code.as_str() == trimmed)
            .ok_or_else(|| UnknownSourceCode(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registered_codes_exactly() {
        for code in SourceCode::ALL {
            assert_eq!(code.as_str().parse::<SourceCode>(), Ok(code));
        }
        assert_eq!(" FT\n".parse::<SourceCode>(), Ok(SourceCode::Ft));
        assert_eq!(
            "ft".parse::<SourceCode>(),
            Err(UnknownSourceCode("ft".into()))
        );
    }

    #[test]
    fn strategies_are_bound_per_variant() {
        assert!(SourceCode::Ft.has_body() && !SourceCode::Ft.has_blocks());
        assert!(SourceCode::DynamicContent.has_body() && SourceCode::DynamicContent.has_blocks());
        assert!(!SourceCode::ContentPlaceholder.has_body());
        assert!(SourceCode::ContentPlaceholder.resolves_identity());
        assert!(!SourceCode::DynamicContent.resolves_identity());
    }

    #[test]
    fn reads_source_code_from_attributes() {
        let attrs = "<ObjectMetadata><EditorialNotes><Sources><Source><SourceCode>DynamicContent</SourceCode></Source></Sources></EditorialNotes></ObjectMetadata>";
        assert_eq!(
            SourceCode::of_attributes(attrs),
            Some(SourceCode::DynamicContent)
        );
        assert_eq!(SourceCode::of_attributes("<ObjectMetadata/>"), None);
        assert_eq!(SourceCode::of_attributes("not xml"), None);
    }
}
