//! Presentational styling templates.
//!
//! Templates describe how nodes, edges and groups should look. They are
//! purely presentational: a diagram without templates is still complete.
//! Size-like hints (`desiredSize`, `minSize`, `shadowOffset`,
//! `segmentOffset`) are maps from axis names such as `width` or `x` to
//! integers.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::OpenMap;
use crate::enums::TemplateTextBlockAlign;

/// Integer hints keyed by axis or dimension name.
pub type Dimensions = BTreeMap<String, i64>;

/// Free-form layout hints for the whole diagram.
pub type TemplateLayoutData = OpenMap;

/// Styling for an entire diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    /// Label shown for the diagram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_label: Option<String>,
    /// Layout hints passed through to the host's layout engine.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "TemplateLayoutData::is_empty"
    )]
    pub diagram_layout: TemplateLayoutData,
    /// Node templates keyed by template name.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub nodes: BTreeMap<String, TemplateNodeData>,
    /// Edge templates keyed by template name.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub edges: BTreeMap<String, TemplateEdgeData>,
    /// Group templates keyed by template name.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub groups: BTreeMap<String, TemplateGroupData>,
}

/// Styling for one kind of node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateNodeData {
    /// Panels making up the node, outermost first.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sections: Vec<TemplateSectionData>,
    /// Drop shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<TemplateShadowData>,
}

/// Styling for one kind of edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEdgeData {
    /// Shape of the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_shape: Option<TemplateShape>,
    /// Shape of the arrow head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_shape: Option<TemplateShape>,
    /// Label drawn along the edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TemplateTextBlock>,
    /// Corner rounding radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner: Option<i64>,
}

/// Styling for one kind of group, expanded and collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateGroupData {
    /// Panels shown while the group is expanded.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub expanded: Vec<TemplateSectionData>,
    /// Panels shown while the group is collapsed.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub collapsed: Vec<TemplateSectionData>,
    /// Drop shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<TemplateShadowData>,
}

/// One panel of a node or group. Panels nest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSectionData {
    /// Background colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Preferred size.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Dimensions::is_empty"
    )]
    pub desired_size: Dimensions,
    /// Minimum size.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Dimensions::is_empty"
    )]
    pub min_size: Dimensions,
    /// Fixed width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    /// Fixed height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Whether this panel hosts the group's members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_panel: Option<bool>,
    /// Inner padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<i64>,
    /// Panel layout kind, such as `Vertical` or `Auto`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_type: Option<String>,
    /// Nested panels.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sections: Vec<TemplateSectionData>,
    /// Outline shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<TemplateShape>,
    /// Whether the panel stretches to fill its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stretch: Option<bool>,
    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TemplateTextBlock>,
}

/// A drawn shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateShape {
    /// Shape kind, such as `Rectangle` or `RoundedRectangle`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<String>,
    /// Fill colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Stroke colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Stroke width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<i64>,
    /// Arrow head kind, for edge arrow shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_arrow: Option<String>,
}

/// A block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateTextBlock {
    /// Text, or the name of the node attribute to bind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Alignment within the enclosing panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TemplateTextBlockAlign>,
    /// CSS font shorthand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// CSS-style margin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    /// Maximum number of lines before truncation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<i64>,
    /// Offset from the edge segment, for edge labels.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Dimensions::is_empty"
    )]
    pub segment_offset: Dimensions,
    /// Whether the text stretches to fill its panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stretch: Option<bool>,
    /// Text colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

/// A drop shadow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateShadowData {
    /// Blur radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<i64>,
    /// Shadow colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    /// Offset of the shadow from its shape.
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Dimensions::is_empty"
    )]
    pub shadow_offset: Dimensions,
}
