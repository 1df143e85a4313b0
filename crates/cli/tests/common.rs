// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Temp directory holding the config file the command is pointed at.
pub struct Env {
    pub dir: TempDir,
}

impl Env {
    /// An environment with an empty config file.
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), content).unwrap();
        Env { dir }
    }

    pub fn qdsl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("qdsl");
        cmd.env("QDSL_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("QDSL_LOG")
            .current_dir(self.dir.path());
        cmd
    }

    /// Writes a file into the temp directory and returns its path.
    pub fn write(&self, name: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

/// Runs the command and returns stdout, asserting success.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}
