// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `$QDSL_CONFIG` when set, otherwise from
//! `<config dir>/qdsl/config.toml`. A missing default file means defaults:
//! - `[output] pretty`: indent emitted JSON
//! - `[prefix] rewrite`, `[prefix] case_insensitive`: options applied to every
//!   prefix query before command-line flags

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use qdsl_core::{PrefixOption, Rewrite};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "qdsl";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub prefix: PrefixDefaults,
}

/// Output formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent JSON output.
    pub pretty: bool,
}

/// Defaults for `qdsl prefix`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrefixDefaults {
    /// Rewrite mode name (e.g. "constant_score").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
}

impl PrefixDefaults {
    /// Converts the defaults into options, rewrite first.
    pub fn options(&self) -> Result<Vec<PrefixOption>> {
        let mut options = Vec::new();
        if let Some(rewrite) = &self.rewrite {
            options.push(PrefixOption::Rewrite(rewrite.parse::<Rewrite>()?));
        }
        if let Some(flag) = self.case_insensitive {
            options.push(PrefixOption::CaseInsensitive(flag));
        }
        Ok(options)
    }
}

impl Config {
    /// Loads the configuration from `$QDSL_CONFIG` or the default location.
    ///
    /// An explicit `$QDSL_CONFIG` path must exist; the default path may not.
    pub fn load() -> Result<Self> {
        if let Some(path) = env::config_path() {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path));
            }
            return Self::load_from(&path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Loads the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses configuration text; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        // Rewrite names are checked at load time.
        config.prefix.options()?;
        Ok(config)
    }
}

/// Returns `<config dir>/qdsl/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
