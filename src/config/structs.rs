//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit linelog's own diagnostics on stderr.
    pub diagnostics: bool,
}

/// Output destination configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// One of `stdout`, `stderr`, `file`, `none`.
    pub target: String,
    /// Log file path, required when `target = "file"`.
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: None,
        }
    }
}

/// Line decoration configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FormatConfig {
    /// Wrap entries in ANSI colors.
    pub colors: bool,
    /// Text written before every line; empty disables it.
    pub prefix: String,
    /// Prepend a `YYYY-MM-DD HH:MM:SS` timestamp.
    pub timestamps: bool,
}
