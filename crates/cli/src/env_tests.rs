// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn var_names_match_documentation() {
    assert_eq!(vars::QDSL_CONFIG, "QDSL_CONFIG");
    assert_eq!(vars::QDSL_LOG, "QDSL_LOG");
}
