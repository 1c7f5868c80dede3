//! Logger construction from a [`Config`].

use super::Logger;
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Loads the user config and builds a logger from it, falling back to defaults when
    /// the config can't be read.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Ignoring config: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Never fails. If the configured sink can't be resolved or opened, the logger is
    /// built without one and every emission reports `InvalidOutput`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let sink = match config.output_target() {
            Ok(target) => {
                internal::info("LOGGER", &format!("Output target: {target}"));
                target.open().unwrap_or_else(|e| {
                    internal::warn("LOGGER", &format!("Cannot open {target}: {e}"));
                    None
                })
            }
            Err(e) => {
                internal::warn("LOGGER", &e.to_string());
                None
            }
        };

        Self::builder()
            .sink(sink)
            .colors(config.format.colors)
            .prefix(config.format.prefix.clone())
            .timestamps(config.format.timestamps)
            .build()
    }
}
