// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix command implementation.

use qdsl_core::{prefix_query, PrefixOption, PrefixQuery, Query, Rewrite};

use crate::config::Config;
use crate::error::Result;

/// Builds the query: config defaults first, then command-line flags.
pub fn build(
    config: &Config,
    field: String,
    value: String,
    rewrite: Option<Rewrite>,
    case_insensitive: Option<bool>,
) -> Result<PrefixQuery> {
    let mut options = config.prefix.options()?;
    options.extend(rewrite.map(PrefixOption::Rewrite));
    options.extend(case_insensitive.map(PrefixOption::CaseInsensitive));

    let query = prefix_query(field, value, options)?;
    tracing::debug!(
        field = query.field(),
        rewrite = ?query.rewrite(),
        case_insensitive = query.case_insensitive(),
        "built {}",
        query.query_info()
    );
    Ok(query)
}

/// Run the prefix command.
pub fn run(
    config: &Config,
    field: String,
    value: String,
    rewrite: Option<Rewrite>,
    case_insensitive: Option<bool>,
    pretty: bool,
) -> Result<()> {
    let query = build(config, field, value, rewrite, case_insensitive)?;
    println!("{}", super::render(&query, pretty)?);
    Ok(())
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
