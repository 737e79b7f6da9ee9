//! Reference diagram plugin.
//!
//! The host spawns this process once per request. It reads one JSON request
//! document from stdin until end of input, dispatches it to
//! [`ExampleProvider`], writes one JSON response document to stdout and
//! exits. Logs and transport failures go to stderr only.
//!
//! Failures that happen after a request was decoded are answered with an
//! `error` response and exit successfully. Failures to read, decode or
//! write a document produce no response and exit with a failure status.

#[cfg(test)]
mod tests;

mod provider;
pub mod telemetry;

use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::ExitCode;
use std::sync::Arc;

use diagram_plugin_config::Config;
use diagram_plugin_protocol::codec::{CodecError, decode_request, encode_response};
use diagram_plugin_protocol::handler::{DiagramProvider, dispatch};
use ortho_config::OrthoError;
use thiserror::Error;
use tracing::debug;

pub use self::provider::{EXAMPLE_DIAGRAM_ID, ExampleProvider};
use self::telemetry::TelemetryError;

const DEFAULT_PROGRAM_NAME: &str = "diagram-plugin-example";

/// Errors that abort the exchange without producing a response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Standard input is attached to a terminal rather than a pipe or file.
    #[error("no request on stdin: pipe a JSON request document into the plugin")]
    InteractiveInput,
    /// Reading the request from stdin failed.
    #[error("failed to read plugin request: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The request could not be decoded or the response encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Writing the response to stdout failed.
    #[error("failed to write plugin response: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Top-level failures reported by [`run`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be resolved.
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<OrthoError>),
    /// The tracing subscriber could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// The request/response exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Executes one request/response exchange against `provider`.
///
/// # Errors
///
/// Returns a [`TransportError`] if stdin is a terminal, if the request
/// cannot be read or decoded, or if the response cannot be encoded or
/// written. Nothing is written to `stdout` in the first three cases.
pub fn run_with_provider<P>(
    stdin: &mut impl Read,
    stdout: &mut impl Write,
    stdin_is_terminal: bool,
    provider: &P,
) -> Result<(), TransportError>
where
    P: DiagramProvider + ?Sized,
{
    if stdin_is_terminal {
        return Err(TransportError::InteractiveInput);
    }

    let mut input = Vec::new();
    stdin
        .read_to_end(&mut input)
        .map_err(|source| TransportError::Read { source })?;
    debug!(bytes = input.len(), "read plugin request");

    let envelope = decode_request(&input)?;
    let response = dispatch(provider, envelope);
    let payload = encode_response(&response)?;

    stdout
        .write_all(&payload)
        .map_err(|source| TransportError::Write { source })?;
    stdout
        .flush()
        .map_err(|source| TransportError::Write { source })?;
    debug!(
        bytes = payload.len(),
        error = response.is_error(),
        "wrote plugin response"
    );
    Ok(())
}

/// Runs the plugin process with the provided arguments and IO handles.
///
/// Only the program name is taken from `args`; configuration comes from
/// files and the environment.
#[must_use]
pub fn run<I, R, W, E>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    stdin_is_terminal: bool,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    match try_run(args, stdin, stdout, stdin_is_terminal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, R, W>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stdin_is_terminal: bool,
) -> Result<(), AppError>
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
{
    let program = args
        .into_iter()
        .next()
        .unwrap_or_else(|| OsString::from(DEFAULT_PROGRAM_NAME));
    let config = Config::load_for_program(program).map_err(AppError::LoadConfiguration)?;
    let _telemetry = telemetry::initialise(&config)?;
    run_with_provider(stdin, stdout, stdin_is_terminal, &ExampleProvider)?;
    Ok(())
}
