// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand};
use qdsl_core::Rewrite;
use std::path::PathBuf;

pub use args::OutputArgs;

/// Parse a rewrite mode name.
fn rewrite_mode(s: &str) -> Result<Rewrite, String> {
    s.parse::<Rewrite>().map_err(|_| {
        let valid: Vec<&str> = Rewrite::ALL.iter().map(Rewrite::as_str).collect();
        format!("valid modes are: {}", valid.join(", "))
    })
}

#[derive(Parser, Debug)]
#[command(name = "qdsl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build and check search query DSL fragments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a prefix query
    #[command(after_help = "\
Examples:
  qdsl prefix username jo                         Match usernames starting with 'jo'
  qdsl prefix username jo --case-insensitive      Ignore letter case
  qdsl prefix path /usr --rewrite constant_score  Choose a rewrite mode")]
    #[command(args_override_self = true)]
    Prefix {
        /// Field to search
        field: String,

        /// Prefix to match terms against
        value: String,

        /// Rewrite mode (see `qdsl rewrites`)
        #[arg(long, short, value_parser = rewrite_mode)]
        rewrite: Option<Rewrite>,

        /// Match regardless of letter case
        #[arg(
            long,
            short = 'i',
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            value_name = "BOOL"
        )]
        case_insensitive: Option<bool>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate a query and print it in canonical form
    #[command(after_help = "\
Examples:
  qdsl parse query.json                             Check a query stored in a file
  echo '{\"prefix\":{\"user\":\"ki\"}}' | qdsl parse    Read the query from stdin
  qdsl parse query.json --info                      Describe the query")]
    Parse {
        /// File containing the query (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Print a description instead of the query
        #[arg(long)]
        info: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the available rewrite modes
    Rewrites,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
