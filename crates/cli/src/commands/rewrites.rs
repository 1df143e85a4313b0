// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewrites command implementation.

use qdsl_core::Rewrite;

use crate::error::Result;

/// Rewrite mode names, one per line.
pub fn listing() -> String {
    Rewrite::ALL
        .iter()
        .map(Rewrite::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the rewrites command.
pub fn run() -> Result<()> {
    println!("{}", listing());
    Ok(())
}
