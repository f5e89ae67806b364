//! Core data model types for the mapper crate.
//!
//! # Type Hierarchy
//!
//! ```text
//! SourceDocument
//! ├── uuid: Uuid
//! ├── kind: String              ("type" on the wire, e.g. EOM::CompoundStory)
//! ├── value: Vec<u8>            (article XML, base64 on the wire)
//! ├── attributes: String        (ObjectMetadata XML)
//! ├── workflow_status: String
//! └── web_url: Option<String>
//!
//!         ↓ InternalComponentsMapper::map()
//!
//! InternalComponents
//! ├── uuid, publish_reference, last_modified
//! ├── design: Design            (always present)
//! ├── table_of_contents: Option<TableOfContents>
//! ├── topper: Option<Topper>
//! ├── lead_images: Vec<Image>   (square, standard, wide order)
//! ├── unpublished_content_description: Option<String>
//! ├── body_xml: Option<String>
//! ├── blocks: Option<Vec<Block>>
//! ├── summary: Option<Summary>
//! └── push_notifications_{cohort,text}: Option<String>
//! ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Methode story as delivered by the ingestion layer. Read-only input.
///
/// ```rust
/// use mapper::SourceDocument;
///
/// let json = r#"{
///     "uuid": "a0f8fa2e-8d4e-11e7-a352-e46f43c5825d",
///     "type": "EOM::CompoundStory",
///     "value": "PGRvYy8+",
///     "attributes": "<ObjectMetadata/>",
///     "workflowStatus": "Stories/WebReady"
/// }"#;
///
/// let doc: SourceDocument = serde_json::from_str(json).unwrap();
/// assert_eq!(doc.value, b"<doc/>");
/// assert!(doc.web_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub uuid: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "crate::serde_base64")]
    pub value: Vec<u8>,
    pub attributes: String,
    pub workflow_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// The mapped record handed to downstream publishing services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalComponents {
    /// Canonical identity; differs from the source identity only for
    /// resolved content placeholders.
    pub uuid: Uuid,
    pub publish_reference: String,
    pub last_modified: DateTime<Utc>,
    pub design: Design,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<TableOfContents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topper: Option<Topper>,
    #[serde(default)]
    pub lead_images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unpublished_content_description: Option<String>,
    #[serde(
        rename = "bodyXML",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_xml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications_cohort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications_text: Option<String>,
}

/// Visual design of the article page. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    pub theme: String,
    pub layout: String,
}

impl Design {
    pub const DEFAULT_THEME: &'static str = "basic";
    pub const DEFAULT_LAYOUT: &'static str = "default";
}

impl Default for Design {
    fn default() -> Self {
        Self {
            theme: Self::DEFAULT_THEME.into(),
            layout: Self::DEFAULT_LAYOUT.into(),
        }
    }
}

/// Content-package table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOfContents {
    pub sequence: String,
    pub label_type: String,
}

/// Headline unit shown above the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topper {
    pub headline: String,
    pub standfirst: String,
    pub background_colour: String,
    pub layout: String,
}

/// Crop of a lead image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLabel {
    Square,
    Standard,
    Wide,
}

impl ImageLabel {
    /// Output order of lead images.
    pub const ALL: [ImageLabel; 3] = [ImageLabel::Square, ImageLabel::Standard, ImageLabel::Wide];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageLabel::Square => "square",
            ImageLabel::Standard => "standard",
            ImageLabel::Wide => "wide",
        }
    }
}

/// One lead image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub label: ImageLabel,
}

/// One structured body block (dynamic content only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub key: String,
    #[serde(rename = "valueXML")]
    pub value_xml: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Placement of the article summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub display_position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn minimal_components() -> InternalComponents {
        InternalComponents {
            uuid: Uuid::nil(),
            publish_reference: "tid_test".into(),
            last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            design: Design::default(),
            table_of_contents: None,
            topper: None,
            lead_images: vec![],
            unpublished_content_description: None,
            body_xml: Some("<body><p>x</p></body>".into()),
            blocks: None,
            summary: None,
            push_notifications_cohort: None,
            push_notifications_text: None,
        }
    }

    #[test]
    fn components_serialize_camel_case_and_skip_absent_fields() {
        let json = serde_json::to_value(minimal_components()).unwrap();
        assert_eq!(json["publishReference"], "tid_test");
        assert_eq!(json["bodyXML"], "<body><p>x</p></body>");
        assert_eq!(json["design"]["theme"], "basic");
        assert_eq!(json["leadImages"], serde_json::json!([]));
        assert!(json.get("topper").is_none());
        assert!(json.get("blocks").is_none());
    }

    #[test]
    fn block_and_image_use_wire_names() {
        let block = Block {
            key: "x".into(),
            value_xml: "x-value".into(),
            kind: "html-block".into(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["valueXML"], "x-value");
        assert_eq!(json["type"], "html-block");

        let image = Image {
            id: "abc".into(),
            label: ImageLabel::Wide,
        };
        assert_eq!(serde_json::to_value(&image).unwrap()["label"], "wide");
    }

    #[test]
    fn source_document_rejects_invalid_identity() {
        let json = r#"{"uuid":"not-a-uuid","type":"EOM::CompoundStory","value":"","attributes":"","workflowStatus":""}"#;
        assert!(serde_json::from_str::<SourceDocument>(json).is_err());
    }

    #[test]
    fn source_document_value_round_trips_through_base64() {
        let doc = SourceDocument {
            uuid: Uuid::new_v4(),
            kind: "EOM::CompoundStory".into(),
            value: b"<doc><story/></doc>".to_vec(),
            attributes: "<ObjectMetadata/>".into(),
            workflow_status: "Stories/WebReady".into(),
            web_url: None,
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("PGRvYz48c3Rvcnkv"));
        let back: SourceDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
