//! Named destinations a config file or the CLI can select.

use super::{Sink, open_file};
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
    /// No sink at all; every emission reports `InvalidOutput`.
    None,
}

impl OutputTarget {
    /// Materializes the target. `OutputTarget::None` yields `Ok(None)`.
    ///
    /// # Errors
    /// I/O errors from opening a file target.
    pub fn open(&self) -> io::Result<Option<Sink>> {
        let sink: Sink = match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
            Self::File(path) => Box::new(open_file(path)?),
            Self::None => return Ok(None),
        };
        Ok(Some(sink))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::None => f.write_str("none"),
        }
    }
}
