//! Usage:
//!   linelog [--config PATH] [--color] [--prefix P] [--time] info <msg...>
//!   linelog ... warn [--severity high|medium|low] <msg...>
//!   linelog ... error [--code N] <msg...>

use clap::Parser;
use linelog::cli::Cli;
use linelog::config::Config;
use linelog::{Logger, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);
    cli.apply_overrides(&mut config);

    let mut logger = Logger::from_config(&config);
    match cli.run(&mut logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("linelog: {e}");
            ExitCode::FAILURE
        }
    }
}
