//! Command-line interface, built on Clap.

use crate::config::Config;
use crate::entry::Severity;
use crate::error::Error;
use crate::logger::Logger;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linelog - Write log lines from the command line.
#[derive(Parser, Debug)]
#[command(name = "linelog", version, about = "Write log lines from the command line")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Colorize output
    #[arg(long, global = true)]
    pub color: bool,

    /// Prefix every line
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Prepend a timestamp
    #[arg(long, global = true)]
    pub time: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write an info line.
    Info {
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Write a warning line.
    Warn {
        /// Warning severity: high (or severe), medium, low
        #[arg(long, short, default_value = "low")]
        severity: Severity,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Write an error line.
    Error {
        /// Error code
        #[arg(long, short, default_value_t = 1, allow_negative_numbers = true)]
        code: i64,
        /// Error message
        #[arg(required = true)]
        message: Vec<String>,
    },
}

impl Cli {
    /// Command-line flags only ever switch options on, so they layer over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.color {
            config.format.colors = true;
        }
        if let Some(prefix) = &self.prefix {
            config.format.prefix.clone_from(prefix);
        }
        if self.time {
            config.format.timestamps = true;
        }
    }

    /// Emits the selected entry through `logger`.
    ///
    /// # Errors
    /// Propagates the emission error.
    pub fn run(&self, logger: &mut Logger) -> Result<(), Error> {
        match &self.command {
            Command::Info { message } => logger.info(message.join(" ")),
            Command::Warn { severity, message } => {
                logger.warn(message.join(" "), *severity)
            }
            Command::Error { code, message } => logger.error(message.join(" "), *code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;

    #[test]
    fn warn_subcommand_parses_severity() {
        let cli = Cli::parse_from(["linelog", "warn", "--severity", "high", "disk", "low"]);
        let out = MemoryOutput::new();
        let mut logger = Logger::builder().output(out.clone()).build();

        cli.run(&mut logger).unwrap();
        assert_eq!(out.contents(), "[WARN (High)]: disk low\n");
    }

    #[test]
    fn warn_subcommand_accepts_severity_aliases() {
        let cli = Cli::parse_from(["linelog", "warn", "-s", "Severe", "overheating"]);
        let out = MemoryOutput::new();
        let mut logger = Logger::builder().output(out.clone()).build();

        cli.run(&mut logger).unwrap();
        assert_eq!(out.contents(), "[WARN (High)]: overheating\n");
    }

    #[test]
    fn warn_subcommand_defaults_to_low() {
        let cli = Cli::parse_from(["linelog", "warn", "minor"]);
        let Command::Warn { severity, .. } = cli.command else {
            panic!("expected warn subcommand");
        };
        assert_eq!(severity, Severity::Low);
    }

    #[test]
    fn warn_subcommand_rejects_unknown_severity() {
        let result = Cli::try_parse_from(["linelog", "warn", "-s", "critical", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["linelog", "--prefix", "cli", "--time", "info", "hi"]);
        let mut config = Config::default();
        config.format.prefix = "file".to_string();

        cli.apply_overrides(&mut config);
        assert_eq!(config.format.prefix, "cli");
        assert!(config.format.timestamps);
        assert!(!config.format.colors);
    }

    #[test]
    fn error_subcommand_accepts_negative_codes() {
        let cli = Cli::parse_from(["linelog", "error", "--code", "-3", "bad", "input"]);
        let out = MemoryOutput::new();
        let mut logger = Logger::builder().output(out.clone()).build();

        cli.run(&mut logger).unwrap();
        assert_eq!(out.contents(), "[ERROR (-3)]: bad input\n");
    }
}
