#![forbid(unsafe_code)]

//! `linelog` - small line-oriented logger.
//!
//! Formats info, warning and error entries into single text lines, optionally colored,
//! prefixed and timestamped, and writes them to any `io::Write` sink:
//! - Builder pattern for programmatic configuration
//! - TOML config file support
//! - In-memory and append-mode file sinks
//! - Append-only history of emitted entries
//!
//! # Example
//!
//! ```
//! use linelog::{Logger, MemoryOutput, Severity};
//!
//! let out = MemoryOutput::new();
//! let mut logger = Logger::builder()
//!     .output(out.clone())
//!     .prefix("consensus")
//!     .build();
//!
//! logger.info("Application started").unwrap();
//! logger.warn("Connection slow", Severity::Medium).unwrap();
//! logger.error("disk full", 507).unwrap();
//!
//! assert_eq!(
//!     out.contents(),
//!     "consensus [INFO]: Application started\n\
//!      consensus [WARN (Medium)]: Connection slow\n\
//!      consensus [ERROR (507)]: disk full\n",
//! );
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `linelog` command-line binary

pub mod clock;
pub mod config;
pub mod entry;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use clock::Clock;
pub use config::{Config, ConfigError};
pub use entry::{Entry, Severity};
pub use error::Error;
pub use fmt::Color;
pub use logger::{Logger, LoggerBuilder};
pub use output::{MemoryOutput, OutputTarget, Sink};
