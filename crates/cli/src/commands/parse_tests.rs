// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn render_canonicalizes_short_form() {
    let out = render(r#"{"prefix":{"user":"ki"}}"#, false, false).unwrap();
    assert_eq!(out, r#"{"prefix":{"user":{"value":"ki"}}}"#);
}

#[test]
fn render_drops_false_flag() {
    let out = render(
        r#"{"prefix":{"user":{"case_insensitive":false,"value":"ki"}}}"#,
        false,
        false,
    )
    .unwrap();
    assert_eq!(out, r#"{"prefix":{"user":{"value":"ki"}}}"#);
}

#[test]
fn render_info() {
    let out = render(
        r#"{"prefix":{"user":{"value":"ki","rewrite":"top_terms_N","case_insensitive":true}}}"#,
        true,
        false,
    )
    .unwrap();
    assert_eq!(
        out,
        "Prefix query\n  field: user\n  value: \"ki\"\n  rewrite: top_terms_N\n  case insensitive"
    );
}

#[test]
fn render_reports_malformed_query() {
    let err = render(r#"{"term":{"user":"ki"}}"#, false, false).unwrap_err();
    assert!(matches!(
        err,
        Error::Query(qdsl_core::Error::MalformedQuery { .. })
    ));
}

#[test]
fn read_input_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("query.json");
    fs::write(&path, r#"{"prefix":{"user":"ki"}}"#).unwrap();

    let input = read_input(Some(&path)).unwrap();
    assert!(input.contains("prefix"));
}

#[test]
fn read_input_rejects_blank_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.json");
    fs::write(&path, "  \n").unwrap();

    assert!(matches!(read_input(Some(&path)), Err(Error::EmptyInput)));
}

#[test]
fn read_input_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_input(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn render_reports_invalid_json_as_query_error() {
    let err = render("{not json", false, false).unwrap_err();
    assert!(matches!(err, Error::Query(qdsl_core::Error::Json(_))));
}

#[test]
fn render_reports_duplicate_keys() {
    let err = render(r#"{"prefix":{"user":"ki","user":"jo"}}"#, false, false).unwrap_err();
    assert!(err.to_string().contains("duplicate key 'user'"));
}
