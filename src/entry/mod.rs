//! A single log record and how it turns into a line of text.
//!
//! The set of kinds is closed: `render` matches exhaustively, so adding a kind means
//! adding a variant here rather than special-casing it in the logger.

mod severity;

pub use severity::{ParseSeverityError, Severity};

use crate::fmt::{Color, colorize};
use std::error::Error as StdError;

/// Error values carried by [`Entry::Error`].
pub type Cause = Box<dyn StdError + Send + Sync>;

/// One immutable log record.
#[derive(Debug)]
pub enum Entry {
    Info { message: String },
    Warn { severity: Severity, message: String },
    Error { cause: Cause, code: i64 },
}

impl Entry {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warn(message: impl Into<String>, severity: Severity) -> Self {
        Self::Warn {
            severity,
            message: message.into(),
        }
    }

    /// `code` is passed through verbatim; any integer is accepted.
    #[must_use]
    pub fn error(cause: impl Into<Cause>, code: i64) -> Self {
        Self::Error {
            cause: cause.into(),
            code,
        }
    }

    /// Tag text as it appears at the start of the rendered line, e.g. `[WARN (High)]`.
    #[must_use]
    pub fn tag(&self) -> String {
        match self {
            Self::Info { .. } => "[INFO]".to_string(),
            Self::Warn { severity, .. } => format!("[WARN ({severity})]"),
            Self::Error { code, .. } => format!("[ERROR ({code})]"),
        }
    }

    /// Accent color used when rendering with colors enabled.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Info { .. } => Color::Cyan,
            Self::Warn { severity, .. } => match severity {
                Severity::Severe => Color::BrightYellow,
                Severity::Medium => Color::Yellow,
                Severity::Low => Color::BrightCyan,
            },
            Self::Error { .. } => Color::Red,
        }
    }

    /// Renders the entry as one newline-terminated line.
    ///
    /// With `colored`, everything before the newline is wrapped in the entry's accent
    /// color; the newline itself stays outside the escape sequence.
    #[must_use]
    pub fn render(&self, colored: bool) -> String {
        let body = match self {
            Self::Info { message } | Self::Warn { message, .. } => {
                format!("{}: {message}", self.tag())
            }
            Self::Error { cause, .. } => format!("{}: {cause}", self.tag()),
        };

        if colored {
            format!("{}\n", colorize(&body, self.color()))
        } else {
            format!("{body}\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_is_rejected() {
        let err = "critical".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown warning severity: 'critical'");
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::Severe);
        assert_eq!("severe".parse::<Severity>().unwrap(), Severity::Severe);
        assert_eq!("Medium".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
    }

    #[test]
    fn error_tag_carries_code_verbatim() {
        let entry = Entry::error("boom", -42);
        assert_eq!(entry.tag(), "[ERROR (-42)]");
    }
}
