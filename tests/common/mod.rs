//! Common fixtures for the mapper integration tests.
//!
//! [`Story`] builds a source document from the pieces a test cares about;
//! the fakes implement the collaborator ports and record every call.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use icm::{
    Html5SelfClosingNormalizer, InternalComponentsMapper, MapperConfig, MapperPorts,
    ServiceError, SourceDocument,
};
use mapper::{BlogUuidResolver, BodyTransformer, ExistenceChecker, TransformContext};
use uuid::Uuid;

pub const TX_ID: &str = "tid_test";
pub const API_HOST: &str = "test.api.ft.com";
pub const COMPOUND_STORY: &str = "EOM::CompoundStory";
pub const WEB_READY: &str = "Stories/WebReady";
pub const BLOG_UUID: &str = "e3b1c5d8-7d4e-4b0e-9a0f-1f2a3b4c5d6e";
pub const SERVICE_ID: &str = "http://ftalphaville.ft.com/?p=2193913";
pub const REF_FIELD: &str = "2193913";

pub fn last_modified() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 8, 30, 9, 0, 0).unwrap()
}

/// Source document builder.
#[derive(Debug, Clone)]
pub struct Story {
    pub uuid: Uuid,
    pub kind: String,
    pub workflow_status: String,
    pub source_code: String,
    pub diftcom: Vec<String>,
    pub editorial: Vec<String>,
    pub wires: Vec<String>,
    pub lead: Vec<String>,
    pub story: Vec<String>,
    pub body: Option<String>,
    pub blocks: Option<String>,
}

impl Story {
    pub fn new(source_code: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            kind: COMPOUND_STORY.into(),
            workflow_status: WEB_READY.into(),
            source_code: source_code.into(),
            diftcom: Vec::new(),
            editorial: Vec::new(),
            wires: Vec::new(),
            lead: Vec::new(),
            story: Vec::new(),
            body: Some("<body><p>Some text</p></body>".into()),
            blocks: None,
        }
    }

    pub fn ft() -> Self {
        Self::new("FT")
    }

    pub fn placeholder() -> Self {
        Self::new("ContentPlaceholder").without_body()
    }

    pub fn dynamic_content() -> Self {
        Self::new("DynamicContent")
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn workflow_status(mut self, status: &str) -> Self {
        self.workflow_status = status.into();
        self
    }

    pub fn diftcom(mut self, tag: &str, value: &str) -> Self {
        self.diftcom.push(element(tag, value));
        self
    }

    pub fn editorial(mut self, tag: &str, value: &str) -> Self {
        self.editorial.push(element(tag, value));
        self
    }

    pub fn wires(mut self, tag: &str, value: &str) -> Self {
        self.wires.push(element(tag, value));
        self
    }

    /// Blog placeholder fields for the given category.
    pub fn blog(self, category: &str) -> Self {
        self.wires("category", category)
            .wires("serviceid", SERVICE_ID)
            .wires("ref_field", REF_FIELD)
    }

    /// Raw markup appended inside `/doc/lead`.
    pub fn lead(mut self, xml: &str) -> Self {
        self.lead.push(xml.into());
        self
    }

    /// Raw markup appended inside `/doc/story`, before the body.
    pub fn story(mut self, xml: &str) -> Self {
        self.story.push(xml.into());
        self
    }

    pub fn body(mut self, xml: &str) -> Self {
        self.body = Some(xml.into());
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Inner markup of `/doc/blocks`.
    pub fn blocks(mut self, xml: &str) -> Self {
        self.blocks = Some(xml.into());
        self
    }

    pub fn main_image(self, image: &str) -> Self {
        self.lead(&format!(
            r#"<lead-images><web-master fileref="/FT/Graphics/Online/Master_2048x1152/2017/08/img.jpg?uuid={image}"/></lead-images>"#
        ))
    }

    pub fn attributes_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <!DOCTYPE ObjectMetadata SYSTEM \"/SysConfig/Classify/FTStories/classify.dtd\">\
             <ObjectMetadata>\
             <EditorialNotes><Sources><Source><SourceCode>{}</SourceCode></Source></Sources>{}</EditorialNotes>\
             <WiresIndexing>{}</WiresIndexing>\
             <OutputChannels><DIFTcom>{}</DIFTcom></OutputChannels>\
             </ObjectMetadata>",
            self.source_code,
            self.editorial.concat(),
            self.wires.concat(),
            self.diftcom.concat()
        )
    }

    pub fn value_xml(&self) -> String {
        let text = self
            .body
            .as_deref()
            .map(|b| format!("<text>{b}</text>"))
            .unwrap_or_default();
        let blocks = self
            .blocks
            .as_deref()
            .map(|b| format!("<blocks>{b}</blocks>"))
            .unwrap_or_default();
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <!DOCTYPE doc SYSTEM \"/SysConfig/Rules/ftpsi.dtd\">\
             <doc><lead>{}</lead><story>{}{}</story>{}</doc>",
            self.lead.concat(),
            self.story.concat(),
            text,
            blocks
        )
    }

    pub fn document(&self) -> SourceDocument {
        SourceDocument {
            uuid: self.uuid,
            kind: self.kind.clone(),
            value: self.value_xml().into_bytes(),
            attributes: self.attributes_xml(),
            workflow_status: self.workflow_status.clone(),
            web_url: None,
        }
    }
}

fn element(tag: &str, value: &str) -> String {
    format!("<{tag}>{value}</{tag}>")
}

/// How the fake body transformer answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Echo,
    Fixed(String),
    Fail,
}

#[derive(Debug)]
pub struct RecordingTransformer {
    pub calls: Mutex<Vec<String>>,
    reply: Reply,
}

impl RecordingTransformer {
    pub fn new(reply: Reply) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl BodyTransformer for RecordingTransformer {
    fn transform(&self, markup: &str, ctx: &TransformContext<'_>) -> Result<String, ServiceError> {
        assert_eq!(ctx.transaction_id, TX_ID);
        assert_eq!(ctx.api_host, API_HOST);
        self.calls.lock().unwrap().push(markup.to_string());
        match &self.reply {
            Reply::Echo => Ok(markup.to_string()),
            Reply::Fixed(out) => Ok(out.clone()),
            Reply::Fail => Err(ServiceError::new("body-transformer", "500 Internal Server Error")),
        }
    }
}

#[derive(Debug)]
pub struct FakeBlogResolver {
    pub calls: Mutex<Vec<(String, String, String)>>,
    answer: Result<Uuid, ServiceError>,
}

impl FakeBlogResolver {
    pub fn answering(answer: Result<Uuid, ServiceError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            answer,
        }
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl BlogUuidResolver for FakeBlogResolver {
    fn resolve(
        &self,
        service_id: &str,
        ref_field: &str,
        transaction_id: &str,
    ) -> Result<Uuid, ServiceError> {
        self.calls.lock().unwrap().push((
            service_id.to_string(),
            ref_field.to_string(),
            transaction_id.to_string(),
        ));
        self.answer.clone()
    }
}

#[derive(Debug)]
pub struct FakeDocumentStore {
    pub calls: Mutex<Vec<Uuid>>,
    answer: Result<bool, ServiceError>,
}

impl FakeDocumentStore {
    pub fn answering(answer: Result<bool, ServiceError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            answer,
        }
    }

    pub fn calls(&self) -> Vec<Uuid> {
        self.calls.lock().unwrap().clone()
    }
}

impl ExistenceChecker for FakeDocumentStore {
    fn exists(&self, uuid: Uuid, _transaction_id: &str) -> Result<bool, ServiceError> {
        self.calls.lock().unwrap().push(uuid);
        self.answer.clone()
    }
}

/// A mapper with standard validators, the HTML5 normalizer and recording fakes.
pub struct Harness {
    pub transformer: Arc<RecordingTransformer>,
    pub blogs: Arc<FakeBlogResolver>,
    pub store: Arc<FakeDocumentStore>,
    pub mapper: InternalComponentsMapper,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(
            Reply::Echo,
            Ok(Uuid::parse_str(BLOG_UUID).unwrap()),
            Ok(true),
        )
    }

    pub fn build(
        reply: Reply,
        blog_answer: Result<Uuid, ServiceError>,
        store_answer: Result<bool, ServiceError>,
    ) -> Self {
        let transformer = Arc::new(RecordingTransformer::new(reply));
        let blogs = Arc::new(FakeBlogResolver::answering(blog_answer));
        let store = Arc::new(FakeDocumentStore::answering(store_answer));
        let config = MapperConfig {
            api_host: API_HOST.into(),
            ..MapperConfig::default()
        };
        let ports = MapperPorts {
            body_transformer: transformer.clone(),
            normalizer: Arc::new(Html5SelfClosingNormalizer),
            blog_resolver: blogs.clone(),
            document_store: store.clone(),
        };
        Self {
            transformer,
            blogs,
            store,
            mapper: InternalComponentsMapper::with_standard_validators(config, ports),
        }
    }

    pub fn map(&self, story: &Story) -> Result<icm::InternalComponents, icm::MappingError> {
        self.mapper.map(&story.document(), TX_ID, last_modified(), false)
    }

    pub fn preview(&self, story: &Story) -> Result<icm::InternalComponents, icm::MappingError> {
        self.mapper.map(&story.document(), TX_ID, last_modified(), true)
    }
}
