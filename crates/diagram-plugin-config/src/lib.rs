//! Layered configuration for diagram plugins.
//!
//! Values resolve from built-in defaults, then an optional configuration
//! file, then `DIAGRAM_PLUGIN_*` environment variables. Plugins are spawned
//! by the host with no arguments of interest, so callers normally load with
//! just the program name and no command-line overrides apply.

mod defaults;
mod logging;

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, default_log_filter, default_log_filter_string, default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Ambient settings shared by every diagram plugin binary.
///
/// Every field carries a built-in default so that a host launching the
/// plugin with no configuration file and no `DIAGRAM_PLUGIN_*` variables
/// still gets a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIAGRAM_PLUGIN")]
pub struct Config {
    /// `tracing` filter directive, e.g. `debug` or `diagram_plugin_protocol=trace`.
    #[serde(default = "defaults::default_log_filter_string")]
    #[ortho_config(default = defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records written to stderr.
    #[serde(default = "defaults::default_log_format")]
    #[ortho_config(default = defaults::default_log_format())]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Resolves configuration from defaults, file and environment only.
    ///
    /// # Errors
    ///
    /// Returns the loader's error when a configuration file or environment
    /// value cannot be parsed.
    pub fn load_for_program(program: impl Into<OsString>) -> Result<Self, Arc<OrthoError>> {
        Self::load_from_iter([program.into()])
    }

    /// Filter directive used to build the log filter.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Output format for log records.
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
