//! Change notifications and the host context that accompanies them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ChangeDetail, Settings};
use crate::enums::{Action, Source};

/// A single file-level change reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_path: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "ChangeDetail::is_empty"
    )]
    detail: ChangeDetail,
}

impl Change {
    /// Creates a change for `file_path`.
    #[must_use]
    pub fn new(action: Action, source: Source, file_path: impl Into<String>) -> Self {
        Self {
            action: Some(action),
            source: Some(source),
            file_path: Some(file_path.into()),
            detail: ChangeDetail::new(),
        }
    }

    /// Attaches the open detail map.
    #[must_use]
    pub fn with_detail(mut self, detail: ChangeDetail) -> Self {
        self.detail = detail;
        self
    }

    /// Returns the action, if reported.
    #[must_use]
    pub const fn action(&self) -> Option<Action> {
        self.action
    }

    /// Returns the source surface, if reported.
    #[must_use]
    pub const fn source(&self) -> Option<Source> {
        self.source
    }

    /// Returns the path of the changed file, if reported.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    /// Returns the action- and source-specific detail.
    #[must_use]
    pub const fn detail(&self) -> &ChangeDetail {
        &self.detail
    }
}

/// The parsed specification module, opaque to the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Module(String);

impl Module {
    /// Wraps an encoded module.
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Returns the encoded module.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the encoded size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the module is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A locator inside a parsed module.
///
/// Every field is optional and fields combine freely. A position with no
/// fields set means the host has no specific focus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Application path, outermost name first.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub app: Vec<String>,
    /// Endpoint name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Statement locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stmt: Option<String>,
    /// Type name.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Parameter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Annotation name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anno: Option<String>,
    /// Tag name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Raw source coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl Position {
    /// Returns `true` when no locator field is set.
    #[must_use]
    pub const fn is_unfocused(&self) -> bool {
        self.app.is_empty()
            && self.endpoint.is_none()
            && self.stmt.is_none()
            && self.type_name.is_none()
            && self.field.is_none()
            && self.param.is_none()
            && self.anno.is_none()
            && self.tag.is_none()
            && self.src.is_none()
    }
}

/// Read-only snapshot of host state at request time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Path of the focused file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Content of the focused file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
    /// Where in the module the host is focused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<Position>,
    /// The module parsed from the focused file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<Module>,
    /// Host settings relevant to the plugin.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Settings::is_empty"
    )]
    pub settings: Settings,
    /// Root directory of the specification workspace.
    #[serde(rename = "syslRoot", default, skip_serializing_if = "Option::is_none")]
    pub spec_root: Option<String>,
    /// Identifier of the view where the change occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
}
