//! Errors returned by the emission operations.

use std::io;

/// Both kinds only fail the call that returned them; the logger stays usable.
#[derive(Debug)]
pub enum Error {
    /// The logger was built without an output sink. Nothing was written or recorded.
    InvalidOutput,
    /// The sink rejected the write. The entry was still recorded in history.
    WriteFailed(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOutput => write!(f, "no output writer configured"),
            Self::WriteFailed(e) => write!(f, "cannot write log to output: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WriteFailed(e) => Some(e),
            Self::InvalidOutput => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::WriteFailed(e)
    }
}
