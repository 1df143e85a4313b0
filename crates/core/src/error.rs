// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for qdsl-core operations.

use thiserror::Error;

/// All possible errors that can occur while building or parsing query fragments.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid field: '{0}'\n  hint: a query must target a non-empty field name")]
    InvalidField(String),

    #[error("invalid rewrite mode: '{0}'\n  hint: valid modes are: constant_score, scoring_boolean, constant_score_boolean, top_terms_N, top_terms_boost_N, top_terms_blended_freqs_N")]
    InvalidRewriteMode(String),

    #[error("malformed {kind} query: {reason}")]
    MalformedQuery { kind: &'static str, reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for qdsl-core operations.
///
/// This is the value-or-error wrapper every query constructor returns.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
