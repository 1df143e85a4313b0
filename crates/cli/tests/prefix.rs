// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;
use similar_asserts::assert_eq;

#[test]
fn prefix_minimal() {
    let env = Env::new();
    let out = stdout_of(env.qdsl().args(["prefix", "username", "jo"]));
    assert_eq!(out.as_str(), "{\"prefix\":{\"username\":{\"value\":\"jo\"}}}\n");
}

#[test]
fn prefix_case_insensitive() {
    let env = Env::new();
    let out = stdout_of(
        env.qdsl()
            .args(["prefix", "username", "jo", "--case-insensitive"]),
    );
    assert_eq!(
        out.as_str(),
        "{\"prefix\":{\"username\":{\"value\":\"jo\",\"case_insensitive\":true}}}\n"
    );
}

#[test]
fn prefix_case_insensitive_false_is_omitted() {
    let env = Env::new();
    env.qdsl()
        .args(["prefix", "username", "jo", "--case-insensitive=false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("case_insensitive").not());
}

#[test]
fn prefix_rewrite() {
    let env = Env::new();
    let out = stdout_of(
        env.qdsl()
            .args(["prefix", "path", "/usr", "--rewrite", "top_terms_N"]),
    );
    assert_eq!(
        out.as_str(),
        "{\"prefix\":{\"path\":{\"value\":\"/usr\",\"rewrite\":\"top_terms_N\"}}}\n"
    );
}

#[test]
fn prefix_output_is_stable() {
    let env = Env::new();
    let args = ["prefix", "f", "v", "-r", "scoring_boolean", "-i"];
    let first = stdout_of(env.qdsl().args(args));
    let second = stdout_of(env.qdsl().args(args));
    assert_eq!(first, second);
}

#[test]
fn prefix_pretty() {
    let env = Env::new();
    let out = stdout_of(env.qdsl().args(["prefix", "user", "ki", "--pretty"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, serde_json::json!({"prefix": {"user": {"value": "ki"}}}));
    assert!(out.contains("\n  \"prefix\""));
}

#[test]
fn prefix_uses_config_defaults() {
    let env = Env::with_config(
        "[output]\npretty = false\n\n[prefix]\nrewrite = \"constant_score\"\ncase_insensitive = true\n",
    );
    let out = stdout_of(env.qdsl().args(["prefix", "user", "ki"]));
    assert_eq!(
        out.as_str(),
        "{\"prefix\":{\"user\":{\"value\":\"ki\",\"rewrite\":\"constant_score\",\"case_insensitive\":true}}}\n"
    );
}

#[test]
fn prefix_flags_override_config() {
    let env = Env::with_config("[prefix]\nrewrite = \"constant_score\"\ncase_insensitive = true\n");
    let out = stdout_of(env.qdsl().args([
        "prefix",
        "user",
        "ki",
        "--rewrite",
        "top_terms_boost_N",
        "--case-insensitive=false",
    ]));
    assert_eq!(
        out.as_str(),
        "{\"prefix\":{\"user\":{\"value\":\"ki\",\"rewrite\":\"top_terms_boost_N\"}}}\n"
    );
}

#[test]
fn prefix_empty_field_fails() {
    let env = Env::new();
    env.qdsl()
        .args(["prefix", "", "ki"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid field"));
}

#[test]
fn prefix_unknown_rewrite_fails() {
    let env = Env::new();
    env.qdsl()
        .args(["prefix", "user", "ki", "--rewrite", "fuzzy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid modes are"));
}

#[test]
fn bad_config_rewrite_fails() {
    let env = Env::with_config("[prefix]\nrewrite = \"fuzzy\"\n");
    env.qdsl()
        .args(["prefix", "user", "ki"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid rewrite mode: 'fuzzy'"));
}

#[test]
fn missing_config_file_fails() {
    let env = Env::new();
    env.qdsl()
        .env("QDSL_CONFIG", env.dir.path().join("nope.toml"))
        .args(["prefix", "user", "ki"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn rewrites_lists_modes() {
    let env = Env::new();
    env.qdsl()
        .arg("rewrites")
        .assert()
        .success()
        .stdout(predicate::str::contains("constant_score\n"))
        .stdout(predicate::str::contains("top_terms_blended_freqs_N"));
}
