//! Diagram type identity and capability advertisement.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity of a diagram type.
///
/// The `id` is the stable key hosts use to match rendered diagrams against
/// negotiated capabilities. It is optional on the wire but required wherever
/// the descriptor is used as a reference.
///
/// # Example
///
/// ```
/// use diagram_plugin_protocol::DiagramDescriptor;
///
/// let descriptor = DiagramDescriptor::new("erd").with_name("Entity relationships");
/// assert_eq!(descriptor.id(), Some("erd"));
/// assert_eq!(descriptor.name(), Some("Entity relationships"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagramDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
}

impl DiagramDescriptor {
    /// Creates a descriptor with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Returns the stable id, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the display name, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the description, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the icon identifier, if present.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

/// Whether one diagram type can currently be rendered by the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    descriptor: Option<DiagramDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl Availability {
    /// Marks `descriptor` as available.
    #[must_use]
    pub const fn available(descriptor: DiagramDescriptor) -> Self {
        Self {
            descriptor: Some(descriptor),
            available: Some(true),
            reason: None,
        }
    }

    /// Marks `descriptor` as unavailable for the given reason.
    #[must_use]
    pub fn unavailable(descriptor: DiagramDescriptor, reason: impl Into<String>) -> Self {
        Self {
            descriptor: Some(descriptor),
            available: Some(false),
            reason: Some(reason.into()),
        }
    }

    /// Returns the described diagram type.
    #[must_use]
    pub const fn descriptor(&self) -> Option<&DiagramDescriptor> {
        self.descriptor.as_ref()
    }

    /// Returns `true` only when the entry explicitly says so.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(false)
    }

    /// Returns why the type is unavailable, if a reason was given.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Diagram-related capabilities of a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiagramCapabilities {
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    availabilities: Vec<Availability>,
}

impl DiagramCapabilities {
    /// Creates the capability list.
    #[must_use]
    pub const fn new(availabilities: Vec<Availability>) -> Self {
        Self { availabilities }
    }

    /// Returns every advertised entry in plugin order.
    #[must_use]
    pub fn availabilities(&self) -> &[Availability] {
        &self.availabilities
    }

    /// Returns the ids of the diagram types marked available.
    pub fn available_ids(&self) -> impl Iterator<Item = &str> {
        self.availabilities
            .iter()
            .filter(|entry| entry.is_available())
            .filter_map(|entry| entry.descriptor().and_then(DiagramDescriptor::id))
    }
}

/// Everything a plugin advertises in reply to `initialize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    diagrams: Option<DiagramCapabilities>,
}

impl ServerCapabilities {
    /// Creates capabilities advertising the given diagram types.
    #[must_use]
    pub const fn with_diagrams(diagrams: DiagramCapabilities) -> Self {
        Self {
            diagrams: Some(diagrams),
        }
    }

    /// Returns the diagram capabilities, if any were advertised.
    #[must_use]
    pub const fn diagrams(&self) -> Option<&DiagramCapabilities> {
        self.diagrams.as_ref()
    }
}
