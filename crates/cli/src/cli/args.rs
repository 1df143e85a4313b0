// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

/// Output formatting arguments shared by commands that print JSON.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Indent the JSON output
    #[arg(long, short)]
    pub pretty: bool,
}

impl OutputArgs {
    /// Pretty output is on if either the flag or the config asks for it.
    pub fn pretty(&self, config_pretty: bool) -> bool {
        self.pretty || config_pretty
    }
}
