// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The contract shared by every query fragment.
//!
//! An assembler that builds a full search request holds fragments as
//! `Box<dyn Query>` and embeds each one's [`Document`] into the request body.

use serde_json::Value;

use crate::document::Document;
use crate::error::Result;

/// A self-contained, serializable search predicate.
pub trait Query: std::fmt::Debug + Send + Sync {
    /// The DSL key this fragment is written under (e.g. `"prefix"`).
    fn kind(&self) -> &'static str;

    /// A fixed, human-readable label for logging and introspection.
    fn query_info(&self) -> &'static str;

    /// Projects the fragment into its wire document.
    fn to_document(&self) -> Document;

    fn to_value(&self) -> Value {
        self.to_document().into_value()
    }

    fn to_json(&self) -> Result<String> {
        self.to_document().to_json()
    }

    fn to_json_pretty(&self) -> Result<String> {
        self.to_document().to_json_pretty()
    }
}
