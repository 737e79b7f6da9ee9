//! Request and response envelopes.
//!
//! On the wire both envelopes are objects with one populated member:
//! `{"initialize": ...}` or `{"onchange": ...}` for requests and
//! `{"error": ...}`, `{"initialize": ...}` or `{"onchange": ...}` for
//! responses. In memory they are closed sum types, so "nothing populated"
//! and "several populated" cannot be represented.
//!
//! Hosts do send envelopes that populate nothing, and that case must turn
//! into an error response rather than a decode failure. Decoding therefore
//! goes through the lenient [`RequestEnvelope`], whose
//! [`into_request`](RequestEnvelope::into_request) reports a malformed
//! shape as a [`RequestShapeError`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    Change, ClientCapabilities, Context, Diagram, ErrorData, ServerCapabilities,
};

/// Version of the wire schema.
///
/// A major bump marks an incompatible change to any document shape or
/// enumeration. A minor bump is additive.
///
/// # Example
///
/// ```
/// use diagram_plugin_protocol::ProtocolVersion;
///
/// let v = ProtocolVersion::new(1, 0);
/// assert!(v.is_compatible_with(&ProtocolVersion::new(1, 3)));
/// assert!(!v.is_compatible_with(&ProtocolVersion::new(2, 0)));
/// assert_eq!(v.to_string(), "1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolVersion {
    major: u16,
    minor: u16,
}

impl ProtocolVersion {
    /// Creates a protocol version.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Returns the major version number.
    #[must_use]
    pub const fn major(self) -> u16 {
        self.major
    }

    /// Returns the minor version number.
    #[must_use]
    pub const fn minor(self) -> u16 {
        self.minor
    }

    /// Returns `true` if `other` shares the same major version.
    #[must_use]
    pub const fn is_compatible_with(self, other: &Self) -> bool {
        self.major == other.major
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The protocol version implemented by this crate.
pub const PROTOCOL_VERSION: ProtocolVersion = ProtocolVersion::new(1, 0);

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Capability negotiation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitializeRequest {
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "ClientCapabilities::is_empty"
    )]
    capabilities: ClientCapabilities,
}

impl InitializeRequest {
    /// Creates a request advertising the given host capabilities.
    #[must_use]
    pub const fn new(capabilities: ClientCapabilities) -> Self {
        Self { capabilities }
    }

    /// Returns the host capabilities. Unrecognised entries are ignored.
    #[must_use]
    pub const fn capabilities(&self) -> &ClientCapabilities {
        &self.capabilities
    }
}

/// Change notification request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnChangeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    change: Option<Change>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<Context>,
}

impl OnChangeRequest {
    /// Creates a change notification.
    #[must_use]
    pub const fn new(change: Option<Change>, context: Option<Context>) -> Self {
        Self { change, context }
    }

    /// Returns the reported change.
    #[must_use]
    pub const fn change(&self) -> Option<&Change> {
        self.change.as_ref()
    }

    /// Returns the host context snapshot.
    #[must_use]
    pub const fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }
}

/// A decoded request with exactly one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Request {
    /// Capability negotiation.
    #[serde(rename = "initialize")]
    Initialize(InitializeRequest),
    /// Change notification.
    #[serde(rename = "onchange")]
    OnChange(OnChangeRequest),
}

impl Request {
    /// Returns the wire name of the operation.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "initialize",
            Self::OnChange(_) => "onchange",
        }
    }
}

/// Raised when a request envelope does not populate exactly one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestShapeError {
    /// No operation was populated.
    #[error("unknown request type")]
    Empty,
    /// More than one operation was populated.
    #[error("ambiguous request type: initialize and onchange are both populated")]
    Ambiguous,
}

/// The lenient wire shape of a request.
///
/// Both members are optional, exactly as hosts send them. An explicit
/// `null` is treated like an absent member. Unknown top-level members are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequestEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initialize: Option<InitializeRequest>,
    #[serde(rename = "onchange", default, skip_serializing_if = "Option::is_none")]
    on_change: Option<OnChangeRequest>,
}

impl RequestEnvelope {
    /// Converts the envelope into a closed [`Request`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestShapeError::Empty`] when neither operation is
    /// populated and [`RequestShapeError::Ambiguous`] when both are.
    pub fn into_request(self) -> Result<Request, RequestShapeError> {
        match (self.initialize, self.on_change) {
            (Some(initialize), None) => Ok(Request::Initialize(initialize)),
            (None, Some(on_change)) => Ok(Request::OnChange(on_change)),
            (None, None) => Err(RequestShapeError::Empty),
            (Some(_), Some(_)) => Err(RequestShapeError::Ambiguous),
        }
    }
}

impl From<Request> for RequestEnvelope {
    fn from(request: Request) -> Self {
        match request {
            Request::Initialize(initialize) => Self {
                initialize: Some(initialize),
                on_change: None,
            },
            Request::OnChange(on_change) => Self {
                initialize: None,
                on_change: Some(on_change),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Descriptive error payload. Carries no retry semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "ErrorData::is_empty"
    )]
    data: ErrorData,
}

impl ErrorInfo {
    /// Creates an error carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
            data: ErrorData::new(),
        }
    }

    /// Attaches a numeric code.
    #[must_use]
    pub const fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Attaches structured data.
    #[must_use]
    pub fn with_data(mut self, data: ErrorData) -> Self {
        self.data = data;
        self
    }

    /// Returns the numeric code, if any.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    /// Returns the message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the structured data.
    #[must_use]
    pub const fn data(&self) -> &ErrorData {
        &self.data
    }
}

/// Reply to a capability negotiation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capabilities: Option<ServerCapabilities>,
}

impl InitializeResponse {
    /// Creates a reply advertising `capabilities`.
    #[must_use]
    pub const fn new(capabilities: ServerCapabilities) -> Self {
        Self {
            capabilities: Some(capabilities),
        }
    }

    /// Returns the advertised capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> Option<&ServerCapabilities> {
        self.capabilities.as_ref()
    }
}

/// Reply to a change notification.
///
/// Diagrams appear in the order the plugin wants them displayed. Each one is
/// a complete payload, never a patch against an earlier render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnChangeResponse {
    #[serde(
        default,
        deserialize_with = "crate::model::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    render_diagram: Vec<Diagram>,
}

impl OnChangeResponse {
    /// Creates a reply rendering `diagrams` in order.
    #[must_use]
    pub const fn new(diagrams: Vec<Diagram>) -> Self {
        Self {
            render_diagram: diagrams,
        }
    }

    /// Returns the rendered diagrams in display order.
    #[must_use]
    pub fn diagrams(&self) -> &[Diagram] {
        &self.render_diagram
    }
}

/// A response with exactly one populated member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Response {
    /// The operation failed. The exchange itself succeeded.
    #[serde(rename = "error")]
    Error(ErrorInfo),
    /// Result of capability negotiation.
    #[serde(rename = "initialize")]
    Initialize(InitializeResponse),
    /// Result of a change notification.
    #[serde(rename = "onchange")]
    OnChange(OnChangeResponse),
}

impl Response {
    /// Creates an error response carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorInfo::new(message))
    }

    /// Returns the error payload when the operation failed.
    #[must_use]
    pub const fn error_info(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Error(info) => Some(info),
            Self::Initialize(_) | Self::OnChange(_) => None,
        }
    }

    /// Returns the negotiation result, if this is one.
    #[must_use]
    pub const fn initialize(&self) -> Option<&InitializeResponse> {
        match self {
            Self::Initialize(result) => Some(result),
            Self::Error(_) | Self::OnChange(_) => None,
        }
    }

    /// Returns the change notification result, if this is one.
    #[must_use]
    pub const fn on_change(&self) -> Option<&OnChangeResponse> {
        match self {
            Self::OnChange(result) => Some(result),
            Self::Error(_) | Self::Initialize(_) => None,
        }
    }

    /// Returns `true` when the error member is populated.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
