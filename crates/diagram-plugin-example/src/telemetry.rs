//! Log output for the plugin process.
//!
//! stdout belongs to the single response document, so every record goes to
//! stderr, which the host captures alongside the exit status. The subscriber
//! is installed at most once per process; later calls are no-ops.

use std::io::{self, IsTerminal};

use diagram_plugin_config::{Config, LogFormat};
use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Proof that the process-wide subscriber is in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter directive is not valid `EnvFilter` syntax.
    #[error("invalid log filter '{directive}': {message}")]
    Filter {
        /// Directive as configured.
        directive: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Another subscriber already owns the process.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the stderr subscriber described by `config` on first use.
///
/// A second call keeps the first subscriber even if `config` differs.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter directive and
/// [`TelemetryError::Subscriber`] when a foreign subscriber is already
/// installed.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| {
            let subscriber = build_subscriber(config, io::stderr().is_terminal())?;
            tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
        })
        .map(|_| TelemetryHandle)
}

/// Parses the configured filter directive.
fn build_filter(config: &Config) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(config.log_filter()).map_err(|error| TelemetryError::Filter {
        directive: config.log_filter().to_owned(),
        message: error.to_string(),
    })
}

/// Builds, without installing, a subscriber writing to stderr.
///
/// Colour is only used when `ansi` is set, so redirected stderr captured by
/// the host stays free of escape codes.
fn build_subscriber(
    config: &Config,
    ansi: bool,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError> {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(build_filter(config)?)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    })
}
