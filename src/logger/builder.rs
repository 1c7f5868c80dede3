//! Stepwise construction of a [`Logger`]. Setters apply in call order, so a later call
//! overrides an earlier one for the same field.

use super::Logger;
use crate::clock::Clock;
use crate::output::Sink;
use std::io::{self, Write};

pub struct LoggerBuilder {
    sink: Option<Sink>,
    colors: bool,
    prefix: String,
    timestamps: bool,
    clock: Clock,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Stdout, no colors, no prefix, no timestamps, system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: Some(Box::new(io::stdout())),
            colors: false,
            prefix: String::new(),
            timestamps: false,
            clock: Clock::system(),
        }
    }

    /// Replaces the destination writer. The logger owns it but never closes it explicitly.
    #[must_use]
    pub fn output(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(writer));
        self
    }

    /// Sets or clears the destination; `None` builds a logger that reports `InvalidOutput`.
    #[must_use]
    pub fn sink(mut self, sink: Option<Sink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn no_output(self) -> Self {
        self.sink(None)
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Empty means no prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Substitutes the time source, mostly so tests get fixed timestamps.
    #[must_use]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            sink: self.sink,
            colors: self.colors,
            prefix: self.prefix,
            timestamps: self.timestamps,
            clock: self.clock,
            history: Vec::new(),
        }
    }
}
