// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix queries.
//!
//! A prefix query matches documents whose `field` contains a term starting
//! with `value`. It is written as:
//!
//! ```json
//! {"prefix": {"<field>": {"value": "...", "rewrite": "...", "case_insensitive": true}}}
//! ```
//!
//! `rewrite` and `case_insensitive` are left out when unset.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::document::{Document, UniqueKeys};
use crate::error::{Error, Result};
use crate::query::Query;
use crate::rewrite::Rewrite;

/// DSL key for prefix queries.
pub const PREFIX_KIND: &str = "prefix";

const VALUE_KEY: &str = "value";
const REWRITE_KEY: &str = "rewrite";
const CASE_INSENSITIVE_KEY: &str = "case_insensitive";

/// Optional settings of a prefix query, filled in by [`PrefixOption`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixParams {
    /// How the engine expands the prefix into terms.
    pub rewrite: Option<Rewrite>,
    /// Match the prefix regardless of letter case.
    pub case_insensitive: bool,
}

/// A single modifier applied to [`PrefixParams`] while building a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOption {
    Rewrite(Rewrite),
    CaseInsensitive(bool),
}

impl PrefixOption {
    /// Writes this option's attribute into the draft, replacing earlier values.
    pub fn apply(self, params: &mut PrefixParams) {
        match self {
            PrefixOption::Rewrite(rewrite) => params.rewrite = Some(rewrite),
            PrefixOption::CaseInsensitive(flag) => params.case_insensitive = flag,
        }
    }
}

/// Sets the rewrite mode.
pub fn with_rewrite(rewrite: Rewrite) -> PrefixOption {
    PrefixOption::Rewrite(rewrite)
}

/// Sets case-insensitive matching.
pub fn with_case_insensitive(case_insensitive: bool) -> PrefixOption {
    PrefixOption::CaseInsensitive(case_insensitive)
}

/// Builds a prefix query, applying `options` in order.
///
/// When two options target the same attribute, the last one wins.
///
/// ```
/// use qdsl_core::{prefix_query, with_case_insensitive, Query};
///
/// let query = prefix_query("username", "jo", [with_case_insensitive(true)]).unwrap();
/// assert_eq!(
///     query.to_json().unwrap(),
///     r#"{"prefix":{"username":{"value":"jo","case_insensitive":true}}}"#
/// );
/// ```
pub fn prefix_query<I>(
    field: impl Into<String>,
    value: impl Into<String>,
    options: I,
) -> Result<PrefixQuery>
where
    I: IntoIterator<Item = PrefixOption>,
{
    let mut query = PrefixQuery::new(field, value)?;
    for option in options {
        option.apply(&mut query.params);
    }
    Ok(query)
}

/// A query matching terms that start with a given prefix in one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixQuery {
    field: String,
    value: String,
    params: PrefixParams,
}

impl PrefixQuery {
    /// Creates a prefix query with no optional settings.
    ///
    /// Fails with [`Error::InvalidField`] when `field` is empty. `value` may be
    /// empty.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(Error::InvalidField(field));
        }
        Ok(PrefixQuery {
            field,
            value: value.into(),
            params: PrefixParams::default(),
        })
    }

    /// Sets the rewrite mode (builder pattern).
    pub fn with_rewrite(self, rewrite: Rewrite) -> Self {
        self.with_option(PrefixOption::Rewrite(rewrite))
    }

    /// Sets case-insensitive matching (builder pattern).
    pub fn with_case_insensitive(self, case_insensitive: bool) -> Self {
        self.with_option(PrefixOption::CaseInsensitive(case_insensitive))
    }

    /// Applies one option (builder pattern).
    pub fn with_option(mut self, option: PrefixOption) -> Self {
        option.apply(&mut self.params);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rewrite(&self) -> Option<Rewrite> {
        self.params.rewrite
    }

    pub fn case_insensitive(&self) -> bool {
        self.params.case_insensitive
    }

    pub fn params(&self) -> &PrefixParams {
        &self.params
    }

    /// Parses a prefix query from its JSON form.
    ///
    /// Both the full form and the short form `{"prefix": {"<field>": "<value>"}}`
    /// are accepted.
    ///
    /// A key repeated within any object is rejected rather than overwritten.
    pub fn from_json(json: &str) -> Result<Self> {
        let UniqueKeys(value) = serde_json::from_str::<UniqueKeys>(json).map_err(|err| {
            if err.is_data() {
                malformed(err.to_string())
            } else {
                Error::Json(err)
            }
        })?;
        Self::from_value(value)
    }

    /// Parses a prefix query from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let root = Document::from_value(value).ok_or_else(|| malformed("expected a JSON object"))?;
        let (kind, fields) = root
            .into_single_entry()
            .ok_or_else(|| malformed("expected exactly one top-level key"))?;
        if kind != PREFIX_KIND {
            return Err(malformed(format!("unexpected query type '{kind}'")));
        }

        let fields = Document::from_value(fields)
            .ok_or_else(|| malformed("expected an object keyed by field name"))?;
        let (field, body) = fields
            .into_single_entry()
            .ok_or_else(|| malformed("expected exactly one field"))?;

        match body {
            Value::String(value) => PrefixQuery::new(field, value),
            Value::Object(_) => Self::from_body(field, body),
            _ => Err(malformed(format!(
                "field '{field}' must map to a string or an object"
            ))),
        }
    }

    fn from_body(field: String, body: Value) -> Result<Self> {
        let mut body =
            Document::from_value(body).ok_or_else(|| malformed("expected a query body object"))?;

        let value = match body.remove(VALUE_KEY) {
            Some(Value::String(value)) => value,
            Some(_) => return Err(malformed("'value' must be a string")),
            None => return Err(malformed("missing 'value'")),
        };
        let mut query = PrefixQuery::new(field, value)?;

        match body.remove(REWRITE_KEY) {
            Some(Value::String(mode)) => query.params.rewrite = Some(mode.parse()?),
            Some(_) => return Err(malformed("'rewrite' must be a string")),
            None => {}
        }
        match body.remove(CASE_INSENSITIVE_KEY) {
            Some(Value::Bool(flag)) => query.params.case_insensitive = flag,
            Some(_) => return Err(malformed("'case_insensitive' must be a boolean")),
            None => {}
        }

        if let Some(key) = body.keys().next() {
            return Err(malformed(format!("unknown key '{key}'")));
        }
        Ok(query)
    }
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::MalformedQuery {
        kind: PREFIX_KIND,
        reason: reason.into(),
    }
}

impl Query for PrefixQuery {
    fn kind(&self) -> &'static str {
        PREFIX_KIND
    }

    fn query_info(&self) -> &'static str {
        "Prefix query"
    }

    fn to_document(&self) -> Document {
        let mut body = Document::new();
        body.insert(VALUE_KEY, self.value.as_str())
            .insert_some(REWRITE_KEY, self.params.rewrite.map(|r| r.as_str()))
            .insert_if(CASE_INSENSITIVE_KEY, self.params.case_insensitive, true);
        body.wrap(self.field.as_str()).wrap(PREFIX_KIND)
    }
}

impl Serialize for PrefixQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PrefixQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let UniqueKeys(value) = UniqueKeys::deserialize(deserializer)?;
        PrefixQuery::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;
