//! The logger decorates rendered entries with prefix and timestamp, writes them to its
//! sink, and keeps every entry it handled in an append-only history.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::clock::Clock;
use crate::entry::{Cause, Entry, Severity};
use crate::error::Error;
use crate::output::Sink;
use std::fmt;
use std::io::Write;

/// Configuration is fixed at build time; only the history changes afterwards.
///
/// Emission takes `&mut self`. Share a logger between threads by wrapping it in a `Mutex`.
pub struct Logger {
    sink: Option<Sink>,
    colors: bool,
    prefix: String,
    timestamps: bool,
    clock: Clock,
    history: Vec<Entry>,
}

impl Logger {
    /// Stdout, no colors, no prefix, no timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Writes `[INFO]: {message}`.
    ///
    /// # Errors
    /// [`Error::InvalidOutput`] without a sink, [`Error::WriteFailed`] if the sink fails.
    pub fn info(&mut self, message: impl Into<String>) -> Result<(), Error> {
        self.emit(Entry::info(message))
    }

    /// Writes `[WARN ({severity})]: {message}`.
    ///
    /// # Errors
    /// [`Error::InvalidOutput`] without a sink, [`Error::WriteFailed`] if the sink fails.
    pub fn warn(&mut self, message: impl Into<String>, severity: Severity) -> Result<(), Error> {
        self.emit(Entry::warn(message, severity))
    }

    /// Writes `[ERROR ({code})]: {cause}`.
    ///
    /// # Errors
    /// [`Error::InvalidOutput`] without a sink, [`Error::WriteFailed`] if the sink fails.
    pub fn error(&mut self, cause: impl Into<Cause>, code: i64) -> Result<(), Error> {
        self.emit(Entry::error(cause, code))
    }

    /// Shared emission path. A failed write still records the entry; a missing sink does not.
    fn emit(&mut self, entry: Entry) -> Result<(), Error> {
        if self.sink.is_none() {
            return Err(Error::InvalidOutput);
        }

        let line = self.compose(&entry);
        let written = self.write_line(&line);
        self.history.push(entry);
        written
    }

    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        let sink = self.sink.as_mut().ok_or(Error::InvalidOutput)?;
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Full output line for `entry`, decoration included.
    #[must_use]
    pub fn compose(&self, entry: &Entry) -> String {
        let decoration = match (self.prefix.is_empty(), self.timestamps) {
            (false, true) => format!("{}/{} ", self.prefix, self.clock.timestamp()),
            (false, false) => format!("{} ", self.prefix),
            (true, true) => format!("{} ", self.clock.timestamp()),
            (true, false) => String::new(),
        };
        decoration + &entry.render(self.colors)
    }

    /// Every entry that reached the write step, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    #[must_use]
    pub const fn has_output(&self) -> bool {
        self.sink.is_some()
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn timestamps_enabled(&self) -> bool {
        self.timestamps
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_output", &self.sink.is_some())
            .field("colors", &self.colors)
            .field("prefix", &self.prefix)
            .field("timestamps", &self.timestamps)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;

    #[test]
    fn compose_without_decoration_is_the_rendered_entry() {
        let logger = Logger::builder().output(MemoryOutput::new()).build();
        let entry = Entry::info("plain");
        assert_eq!(logger.compose(&entry), entry.render(false));
    }

    #[test]
    fn missing_sink_skips_history() {
        let mut logger = Logger::builder().no_output().build();
        assert!(matches!(logger.info("x"), Err(Error::InvalidOutput)));
        assert!(logger.history().is_empty());
    }
}
