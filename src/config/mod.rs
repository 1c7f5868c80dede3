//! TOML configuration for building a logger without code changes.
//!
//! ```toml
//! [output]
//! target = "file"
//! path = "~/.local/state/myapp/app.log"
//!
//! [format]
//! colors = true
//! prefix = "myapp"
//! timestamps = true
//! ```

mod error;
mod structs;

pub use error::ConfigError;
pub use structs::{FormatConfig, GeneralConfig, OutputConfig};

use crate::internal;
use crate::output::OutputTarget;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// An empty file must still produce a working logger — `#[serde(default)]` on every
/// section keeps zero-config working.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
    pub format: FormatConfig,
}

impl Config {
    /// `<config_dir>/linelog/config.toml` for the current user.
    ///
    /// # Errors
    /// `ConfigDirNotFound` when the platform has no home directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        directories::ProjectDirs::from("", "", "linelog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Loads the user config; a missing file is not an error and yields defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            internal::info("CONFIG", "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Loaded config from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns an error if `content` is not valid TOML for this schema.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves `[output]` into a concrete target.
    ///
    /// # Errors
    /// `InvalidTarget` for an unknown target name or a `file` target without `path`.
    pub fn output_target(&self) -> Result<OutputTarget, ConfigError> {
        match self.output.target.to_lowercase().as_str() {
            "stdout" => Ok(OutputTarget::Stdout),
            "stderr" => Ok(OutputTarget::Stderr),
            "none" => Ok(OutputTarget::None),
            "file" => self
                .output
                .path
                .as_deref()
                .map(|p| OutputTarget::File(PathBuf::from(p)))
                .ok_or_else(|| ConfigError::InvalidTarget("file target requires a path".into())),
            other => Err(ConfigError::InvalidTarget(other.to_string())),
        }
    }
}
