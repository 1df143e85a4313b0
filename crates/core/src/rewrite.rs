// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewrite strategies for multi-term queries.
//!
//! A rewrite mode controls how a query that expands to many terms (such as a
//! prefix match) is turned into scoring primitives by the search engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How a multi-term query is rewritten before execution.
///
/// Deserialization goes through [`FromStr`], so it ignores case as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Rewrite {
    /// Rewritten to a constant score query.
    #[serde(rename = "constant_score")]
    ConstantScore,
    /// Rewritten to a scoring boolean query.
    #[serde(rename = "scoring_boolean")]
    ScoringBoolean,
    /// Rewritten to a constant score boolean query.
    #[serde(rename = "constant_score_boolean")]
    ConstantScoreBoolean,
    /// Matches the top N scoring terms.
    #[serde(rename = "top_terms_N")]
    TopTermsN,
    /// Matches the top N scoring terms, with boosting.
    #[serde(rename = "top_terms_boost_N")]
    TopTermsBoostN,
    /// Matches the top N scoring terms, with blended frequencies.
    #[serde(rename = "top_terms_blended_freqs_N")]
    TopTermsBlendedFreqsN,
}

impl Rewrite {
    /// Every rewrite mode, in documentation order.
    pub const ALL: [Rewrite; 6] = [
        Rewrite::ConstantScore,
        Rewrite::ScoringBoolean,
        Rewrite::ConstantScoreBoolean,
        Rewrite::TopTermsN,
        Rewrite::TopTermsBoostN,
        Rewrite::TopTermsBlendedFreqsN,
    ];

    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rewrite::ConstantScore => "constant_score",
            Rewrite::ScoringBoolean => "scoring_boolean",
            Rewrite::ConstantScoreBoolean => "constant_score_boolean",
            Rewrite::TopTermsN => "top_terms_N",
            Rewrite::TopTermsBoostN => "top_terms_boost_N",
            Rewrite::TopTermsBlendedFreqsN => "top_terms_blended_freqs_N",
        }
    }
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rewrite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rewrite::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidRewriteMode(s.to_string()))
    }
}

impl TryFrom<String> for Rewrite {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
