//! Shared vocabulary used by both protocol operations.
//!
//! Records carry camelCase wire names. Optional fields and empty collections
//! are omitted on encode, and unknown record fields are ignored on decode so
//! older plugins tolerate newer hosts. Open maps ([`OpenMap`]) are the
//! exception: they keep every key, in order, so unknown content round-trips
//! unchanged.

mod change;
mod descriptor;
mod diagram;
pub mod template;


pub use self::change::{Change, Context, Module, Position};
pub use self::descriptor::{
    Availability, DiagramCapabilities, DiagramDescriptor, ServerCapabilities,
};
pub use self::diagram::{Diagram, DiagramData, Edge, Node};
pub use self::template::TemplateData;

use serde::{Deserialize, Deserializer};

/// Open key-value map with values of arbitrary JSON shape.
///
/// Key order is preserved, and no schema is applied beyond the map being
/// well formed.
pub type OpenMap = serde_json::Map<String, serde_json::Value>;

/// Capabilities advertised by the host during negotiation.
pub type ClientCapabilities = OpenMap;

/// Host settings relevant to the plugin.
pub type Settings = OpenMap;

/// Action- and source-specific detail attached to a [`Change`].
pub type ChangeDetail = OpenMap;

/// Structured data attached to an error response.
pub type ErrorData = OpenMap;

/// Decodes an explicit `null` exactly like an absent field.
///
/// Collection fields use this together with `#[serde(default)]`, which on
/// its own only covers the absent case.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
