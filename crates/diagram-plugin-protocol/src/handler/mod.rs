//! Request dispatch, capability negotiation and change handling.
//!
//! The handler is written against [`DiagramProvider`], which supplies the
//! diagram types a plugin supports and renders them. Everything the
//! provider gets wrong, and every malformed-but-decodable envelope, becomes
//! an `error` [`Response`]: this is the protocol's only soft-failure path.
//! Nothing in this module aborts the exchange.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::envelope::{
    InitializeRequest, InitializeResponse, OnChangeRequest, OnChangeResponse, Request,
    RequestEnvelope, Response,
};
use crate::model::{
    Availability, Change, Context, Diagram, DiagramCapabilities, DiagramDescriptor,
    ServerCapabilities,
};

/// Source of diagram types and their rendered content.
pub trait DiagramProvider {
    /// Returns one entry for every diagram type the plugin can potentially
    /// render, in advertisement order.
    ///
    /// The ids marked available here are the only ids
    /// [`render`](Self::render) may use.
    fn availabilities(&self) -> Vec<Availability>;

    /// Renders the diagrams affected by a change, in display order.
    ///
    /// Returning no diagrams is valid: the provider decides per invocation
    /// which types to re-render.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the diagrams cannot be produced.
    fn render(
        &self,
        change: Option<&Change>,
        context: Option<&Context>,
    ) -> Result<Vec<Diagram>, RenderError>;
}

/// Errors raised by [`DiagramProvider::render`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Rendering failed.
    #[error("{message}")]
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

impl RenderError {
    /// Creates a generic rendering failure.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Errors raised while handling a decoded request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The provider failed to render.
    #[error("failed to render diagrams: {source}")]
    Render {
        /// Underlying provider error.
        #[from]
        source: RenderError,
    },
    /// An availability entry cannot be referenced because it has no id.
    #[error("availability entry {position} has no diagram type id")]
    UnidentifiedAvailability {
        /// Zero-based index of the entry.
        position: usize,
    },
    /// Two availability entries share an id.
    #[error("diagram type '{id}' is advertised more than once")]
    DuplicateDiagramType {
        /// The repeated id.
        id: String,
    },
    /// A rendered diagram does not say which type it renders.
    #[error("rendered diagram {position} has no diagram type id")]
    UnidentifiedDiagram {
        /// Zero-based index of the diagram.
        position: usize,
    },
    /// A rendered diagram uses a type that was not negotiated as available.
    #[error("rendered diagram type '{id}' was not negotiated as available")]
    UnavailableDiagram {
        /// The offending id.
        id: String,
    },
}

/// Converts a decoded envelope into a response.
///
/// Envelopes that populate no operation, or more than one, produce an
/// error response.
pub fn dispatch<P>(provider: &P, envelope: RequestEnvelope) -> Response
where
    P: DiagramProvider + ?Sized,
{
    match envelope.into_request() {
        Ok(request) => handle(provider, request),
        Err(error) => {
            warn!(%error, "rejecting request envelope");
            Response::error(error.to_string())
        }
    }
}

/// Runs the operation carried by `request`.
pub fn handle<P>(provider: &P, request: Request) -> Response
where
    P: DiagramProvider + ?Sized,
{
    let kind = request.kind();
    let outcome = match &request {
        Request::Initialize(initialize) => {
            negotiate(provider, initialize).map(Response::Initialize)
        }
        Request::OnChange(on_change) => {
            handle_change(provider, on_change).map(Response::OnChange)
        }
    };

    outcome.unwrap_or_else(|error| {
        warn!(request = kind, %error, "request failed");
        Response::error(error.to_string())
    })
}

/// Answers a capability negotiation.
///
/// Host capabilities are accepted and ignored when unrecognised.
///
/// # Errors
///
/// Returns a [`HandlerError`] if the provider's table lists an entry
/// without an id or repeats an id.
pub fn negotiate<P>(
    provider: &P,
    request: &InitializeRequest,
) -> Result<InitializeResponse, HandlerError>
where
    P: DiagramProvider + ?Sized,
{
    debug!(
        client_capabilities = request.capabilities().len(),
        "negotiating capabilities"
    );

    let availabilities = provider.availabilities();
    validate_availabilities(&availabilities)?;

    let diagrams = DiagramCapabilities::new(availabilities);
    debug!(
        available = diagrams.available_ids().count(),
        advertised = diagrams.availabilities().len(),
        "capabilities negotiated"
    );
    Ok(InitializeResponse::new(ServerCapabilities::with_diagrams(diagrams)))
}

/// Renders the diagrams affected by a change notification.
///
/// # Errors
///
/// Returns a [`HandlerError`] if rendering fails or if a rendered diagram
/// lacks an id or uses an id the provider does not advertise as available.
pub fn handle_change<P>(
    provider: &P,
    request: &OnChangeRequest,
) -> Result<OnChangeResponse, HandlerError>
where
    P: DiagramProvider + ?Sized,
{
    log_change(request);

    let diagrams = provider.render(request.change(), request.context())?;
    let capabilities = DiagramCapabilities::new(provider.availabilities());
    let available: HashSet<&str> = capabilities.available_ids().collect();

    for (position, diagram) in diagrams.iter().enumerate() {
        let id = diagram
            .descriptor()
            .and_then(DiagramDescriptor::id)
            .ok_or(HandlerError::UnidentifiedDiagram { position })?;
        if !available.contains(id) {
            return Err(HandlerError::UnavailableDiagram { id: id.to_owned() });
        }
    }

    debug!(diagrams = diagrams.len(), "rendered change");
    Ok(OnChangeResponse::new(diagrams))
}

fn validate_availabilities(availabilities: &[Availability]) -> Result<(), HandlerError> {
    let mut seen = HashSet::new();
    for (position, entry) in availabilities.iter().enumerate() {
        let id = entry
            .descriptor()
            .and_then(DiagramDescriptor::id)
            .ok_or(HandlerError::UnidentifiedAvailability { position })?;
        if !seen.insert(id) {
            return Err(HandlerError::DuplicateDiagramType { id: id.to_owned() });
        }
    }
    Ok(())
}

/// Logs a summary of a change notification. The module is reported by
/// size only.
fn log_change(request: &OnChangeRequest) {
    let change = request.change();
    let context = request.context();
    debug!(
        action = change.and_then(Change::action).map(|action| action.as_str()),
        source = change.and_then(Change::source).map(|source| source.as_str()),
        file = change.and_then(Change::file_path),
        view = context.and_then(|ctx| ctx.view_id.as_deref()),
        module_bytes = context
            .and_then(|ctx| ctx.module.as_ref())
            .map(crate::model::Module::len),
        "handling change notification"
    );
}
