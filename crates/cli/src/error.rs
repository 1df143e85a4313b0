// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the qdsl command-line tool.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] qdsl_core::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file not found: {0}\n  hint: unset QDSL_CONFIG or point it at an existing file")]
    ConfigNotFound(PathBuf),

    #[error("empty input\n  hint: pass a file or pipe a JSON query on stdin")]
    EmptyInput,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for qdsl command-line operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
