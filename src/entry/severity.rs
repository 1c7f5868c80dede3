//! How urgent a warning is. Only the rendering color depends on it.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Rendered as `High`.
    Severe,
    Medium,
    Low,
}

impl Severity {
    /// Label written inside the `[WARN (...)]` tag.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Severe => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Convenience for iteration — used by CLI help and tests.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Severe, Self::Medium, Self::Low]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned by `FromStr` so callers can tell "unknown severity" apart from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown warning severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" | "severe" => Ok(Self::Severe),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
