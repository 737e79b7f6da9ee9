//! Log record formats a plugin can emit on stderr.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How log records are rendered on stderr.
///
/// Parsed case-insensitively from configuration files and the
/// `DIAGRAM_PLUGIN_LOG_FORMAT` variable.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per record, for hosts that collect plugin stderr.
    Json,
    /// Single-line text for a developer watching the host's output pane.
    #[default]
    Compact,
}

/// Error returned when a [`LogFormat`] name is not recognised.
pub type LogFormatParseError = strum::ParseError;
