// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! qdslrs - command-line front end for qdsl query fragments.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Config`] - user defaults loaded from `config.toml`
//! - [`Error`] - error types for all operations
//!
//! The query types themselves live in `qdsl-core`.

mod cli;
mod commands;
mod env;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputArgs};
pub use config::Config;
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Default log filter when `QDSL_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the stderr log subscriber, filtered by `QDSL_LOG`.
pub fn init_logging() {
    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Dispatches a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Prefix {
            field,
            value,
            rewrite,
            case_insensitive,
            output,
        } => {
            let config = Config::load()?;
            let pretty = output.pretty(config.output.pretty);
            commands::prefix::run(&config, field, value, rewrite, case_insensitive, pretty)
        }
        Command::Parse { file, info, output } => {
            let config = Config::load()?;
            let pretty = output.pretty(config.output.pretty);
            commands::parse::run(file.as_deref(), info, pretty)
        }
        Command::Rewrites => commands::rewrites::run(),
    }
}
