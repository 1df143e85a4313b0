// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod parse;
pub mod prefix;
pub mod rewrites;

use qdsl_core::Query;

use crate::error::Result;

/// Serializes a query for printing.
pub fn render(query: &dyn Query, pretty: bool) -> Result<String> {
    let json = if pretty {
        query.to_json_pretty()?
    } else {
        query.to_json()?
    };
    Ok(json)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
