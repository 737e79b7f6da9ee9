//! Built-in values used when neither a configuration file nor the
//! environment sets a field.

/// Filter applied when none is configured.
///
/// Plugins share stderr with the host's own diagnostics, so only warnings
/// and errors are emitted unless the operator asks for more.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter applied when none is configured.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned form of [`default_log_filter`] for serde and loader defaults.
pub fn default_log_filter_string() -> String {
    default_log_filter().to_owned()
}

/// Log record format applied when none is configured.
pub fn default_log_format() -> crate::logging::LogFormat {
    crate::logging::LogFormat::Compact
}
