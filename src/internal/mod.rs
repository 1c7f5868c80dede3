//! linelog's own diagnostic logger — config loading and sink setup report through the
//! same formatting pipeline, on stderr, when `general.diagnostics` is enabled.
//!
//! Only the settings live in the process-wide `OnceLock`; each diagnostic line goes
//! through a short-lived `Logger`, so no history accumulates for the life of the process.
//! The emission path never reports here.

use crate::config::Config;
use crate::entry::Severity;
use crate::logger::Logger;
use std::io;
use std::sync::OnceLock;

static INTERNAL_SETTINGS: OnceLock<InternalSettings> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
struct InternalSettings {
    colors: bool,
}

impl InternalSettings {
    fn logger(self) -> Logger {
        Logger::builder()
            .output(io::stderr())
            .colors(self.colors)
            .prefix("linelog")
            .build()
    }
}

/// Installs the diagnostic logger if the config asks for it. Later calls are no-ops.
pub fn init_with_config(config: &Config) {
    if !config.general.diagnostics {
        return;
    }
    let was_init = INTERNAL_SETTINGS.get().is_some();
    INTERNAL_SETTINGS.get_or_init(|| InternalSettings {
        colors: config.format.colors,
    });
    if !was_init {
        info("INTERNAL", "Diagnostics enabled");
    }
}

/// Pre-init calls silently vanish rather than failing.
fn with_logger(f: impl FnOnce(&mut Logger)) {
    if let Some(settings) = INTERNAL_SETTINGS.get() {
        f(&mut settings.logger());
    }
}

/// Normal operational milestones — config loaded, file opened, etc.
pub fn info(scope: &str, msg: &str) {
    with_logger(|logger| {
        let _ = logger.info(format!("{scope}: {msg}"));
    });
}

/// Non-fatal anomalies — unreadable config, sink that could not be opened, etc.
pub fn warn(scope: &str, msg: &str) {
    with_logger(|logger| {
        let _ = logger.warn(format!("{scope}: {msg}"), Severity::Medium);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_diagnostics_leave_logger_uninstalled() {
        init_with_config(&Config::default());
        info("TEST", "nobody listens");
        warn("TEST", "still nobody");
        assert!(INTERNAL_SETTINGS.get().is_none());
    }

    #[test]
    fn each_diagnostic_starts_with_empty_history() {
        let settings = InternalSettings { colors: false };

        let mut first = settings.logger();
        first.info("INTERNAL: one").unwrap();
        assert_eq!(first.history().len(), 1);

        let second = settings.logger();
        assert!(second.history().is_empty());
        assert_eq!(second.prefix(), "linelog");
    }
}
