//! Rendered diagram content.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::OpenMap;
use super::descriptor::DiagramDescriptor;
use super::template::TemplateData;

const KEY: &str = "key";
const FROM: &str = "from";
const TO: &str = "to";

/// A diagram node: an open map that conventionally carries a unique `key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Node(OpenMap);

impl Node {
    /// Creates a node carrying only `key`.
    #[must_use]
    pub fn keyed(key: impl Into<String>) -> Self {
        let mut map = OpenMap::new();
        map.insert(KEY.to_owned(), serde_json::Value::String(key.into()));
        Self(map)
    }

    /// Wraps an arbitrary attribute map.
    #[must_use]
    pub const fn from_map(map: OpenMap) -> Self {
        Self(map)
    }

    /// Adds or replaces one attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the node key when it is a string.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        string_attribute(&self.0, KEY)
    }

    /// Returns every attribute.
    #[must_use]
    pub const fn attributes(&self) -> &OpenMap {
        &self.0
    }
}

/// A diagram edge: an open map that conventionally carries `key`, `from`
/// and `to`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Edge(OpenMap);

impl Edge {
    /// Creates an edge from node `from` to node `to`.
    #[must_use]
    pub fn connecting(
        key: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let mut map = OpenMap::new();
        map.insert(KEY.to_owned(), serde_json::Value::String(key.into()));
        map.insert(FROM.to_owned(), serde_json::Value::String(from.into()));
        map.insert(TO.to_owned(), serde_json::Value::String(to.into()));
        Self(map)
    }

    /// Wraps an arbitrary attribute map.
    #[must_use]
    pub const fn from_map(map: OpenMap) -> Self {
        Self(map)
    }

    /// Adds or replaces one attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the edge key when it is a string.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        string_attribute(&self.0, KEY)
    }

    /// Returns the source node key when it is a string.
    #[must_use]
    pub fn from_key(&self) -> Option<&str> {
        string_attribute(&self.0, FROM)
    }

    /// Returns the target node key when it is a string.
    #[must_use]
    pub fn to_key(&self) -> Option<&str> {
        string_attribute(&self.0, TO)
    }

    /// Returns every attribute.
    #[must_use]
    pub const fn attributes(&self) -> &OpenMap {
        &self.0
    }
}

fn string_attribute<'a>(map: &'a OpenMap, name: &str) -> Option<&'a str> {
    map.get(name).and_then(serde_json::Value::as_str)
}

/// The content of one diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagramData {
    /// Nodes in plugin order.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub nodes: Vec<Node>,
    /// Edges in plugin order.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub edges: Vec<Edge>,
    /// Optional presentational styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<TemplateData>,
}

impl DiagramData {
    /// Creates diagram content without templates.
    #[must_use]
    pub const fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            templates: None,
        }
    }

    /// Attaches styling templates.
    #[must_use]
    pub fn with_templates(mut self, templates: TemplateData) -> Self {
        self.templates = Some(templates);
        self
    }
}

/// One rendered diagram tagged with the type it renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    descriptor: Option<DiagramDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<DiagramData>,
}

impl Diagram {
    /// Creates a diagram of the given type.
    #[must_use]
    pub const fn new(descriptor: DiagramDescriptor, content: DiagramData) -> Self {
        Self {
            descriptor: Some(descriptor),
            content: Some(content),
        }
    }

    /// Returns the diagram type.
    #[must_use]
    pub const fn descriptor(&self) -> Option<&DiagramDescriptor> {
        self.descriptor.as_ref()
    }

    /// Returns the rendered content.
    #[must_use]
    pub const fn content(&self) -> Option<&DiagramData> {
        self.content.as_ref()
    }
}
