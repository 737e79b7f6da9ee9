//! Wire protocol between a host editor and an out-of-process diagram plugin.
//!
//! The host spawns the plugin once per request. The plugin reads exactly one
//! JSON [`RequestEnvelope`] from standard input, dispatches it through the
//! [`handler`], and writes exactly one JSON [`Response`] to standard output
//! before exiting. There is no session: every invocation is a pure function
//! from request bytes to response bytes.
//!
//! Two requests exist. `initialize` negotiates which diagram types the
//! plugin can render; `onchange` reports a file-level [`Change`] together
//! with a [`Context`] snapshot and receives zero or more rendered
//! [`Diagram`]s in display order.
//!
//! # Error classes
//!
//! Failures to read, decode, or encode a document are transport failures
//! ([`CodecError`]) and never produce a response. Everything that goes
//! wrong after a request has been decoded becomes an `error` response
//! carrying an [`ErrorInfo`], written through the normal success path.
//!
//! # Example
//!
//! ```
//! use diagram_plugin_protocol::codec::decode_request;
//! use diagram_plugin_protocol::handler::{DiagramProvider, RenderError, dispatch};
//! use diagram_plugin_protocol::{Availability, Change, Context, Diagram, DiagramDescriptor};
//!
//! struct Empty;
//!
//! impl DiagramProvider for Empty {
//!     fn availabilities(&self) -> Vec<Availability> {
//!         vec![Availability::available(DiagramDescriptor::new("empty"))]
//!     }
//!
//!     fn render(
//!         &self,
//!         _change: Option<&Change>,
//!         _context: Option<&Context>,
//!     ) -> Result<Vec<Diagram>, RenderError> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let envelope = decode_request(br#"{"initialize":{}}"#).expect("valid request");
//! let response = dispatch(&Empty, envelope);
//! assert!(response.initialize().is_some());
//! ```

pub mod codec;
pub mod enums;
pub mod envelope;
pub mod handler;
pub mod model;
pub mod schema;

#[cfg(test)]
mod tests;

pub use self::codec::CodecError;
pub use self::enums::{Action, Source, TemplateTextBlockAlign, UnknownTokenError};
pub use self::envelope::{
    ErrorInfo, InitializeRequest, InitializeResponse, OnChangeRequest, OnChangeResponse,
    PROTOCOL_VERSION, ProtocolVersion, Request, RequestEnvelope, RequestShapeError, Response,
};
pub use self::model::{
    Availability, Change, Context, Diagram, DiagramCapabilities, DiagramData, DiagramDescriptor,
    Edge, Module, Node, OpenMap, Position, ServerCapabilities,
};
