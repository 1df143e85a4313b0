// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse command implementation.
//!
//! Reads a query, validates it, and prints it back in canonical form (short
//! forms expanded, defaults omitted).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use qdsl_core::{PrefixQuery, Query};

use crate::error::{Error, Result};

/// Reads the query text from `file`, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let input = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(input)
}

/// Human-readable summary of a parsed query.
pub fn describe(query: &PrefixQuery) -> String {
    let mut lines = vec![
        query.query_info().to_string(),
        format!("  field: {}", query.field()),
        format!("  value: {:?}", query.value()),
    ];
    if let Some(rewrite) = query.rewrite() {
        lines.push(format!("  rewrite: {rewrite}"));
    }
    if query.case_insensitive() {
        lines.push("  case insensitive".to_string());
    }
    lines.join("\n")
}

/// Parses `input` and renders the requested output.
pub fn render(input: &str, info: bool, pretty: bool) -> Result<String> {
    let query = PrefixQuery::from_json(input)?;
    tracing::debug!(field = query.field(), "parsed {}", query.query_info());
    if info {
        Ok(describe(&query))
    } else {
        super::render(&query, pretty)
    }
}

/// Run the parse command.
pub fn run(file: Option<&Path>, info: bool, pretty: bool) -> Result<()> {
    let input = read_input(file)?;
    println!("{}", render(&input, info, pretty)?);
    Ok(())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
