// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for the `dotenv` binary.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. dotenv.toml (cwd, optional)
//! 3. --config FILE (required)
//! 4. DOTENV_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DOTENV_FILES=a.env,b.env  → files = ["a.env", "b.env"]
//! DOTENV_OVERLOAD=true      → overload = true
//! DOTENV_LOG_LEVEL=4        → log_level = 4
//! DOTENV_PRIVATE_KEY=...    → ignored, not a setting
//! ```
//!
//! # Example `dotenv.toml`
//!
//! ```toml
//! files = [".env", ".env.local"]
//! strict = true
//! log_level = 3
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::loader::{LoadMode, Loader};
use crate::logging::LogLevel;

pub use loader::SettingsLoader;

/// Settings file looked up in the current directory.
pub const DEFAULT_SETTINGS_FILE: &str = "dotenv.toml";

/// Prefix of settings environment variables.
pub const ENV_PREFIX: &str = "DOTENV";

/// Setting names, as used in TOML and after the `DOTENV_` prefix.
pub const SETTINGS_KEYS: &[&str] = &[
    "files",
    "overload",
    "strict",
    "json",
    "log_level",
    "log_file",
    "log_json",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Env files to load, in order. Empty means `.env`.
    pub files: Vec<PathBuf>,
    /// Replace variables that are already set.
    pub overload: bool,
    /// Fail on missing env files.
    pub strict: bool,
    /// Print loaded pairs as JSON.
    pub json: bool,
    /// Console log level, 0-6.
    pub log_level: LogLevel,
    pub log_file: Option<String>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Settings {
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Loads settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, is not valid TOML, or holds
    /// an invalid combination of options.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or holds an invalid
    /// combination of options.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Rejects option combinations that have no single meaning.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` when both `strict` and `overload` are set.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.strict && self.overload {
            return Err(ConfigError::InvalidValue {
                key: "strict".to_string(),
                message: "cannot be combined with overload".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn mode(&self) -> LoadMode {
        if self.overload {
            LoadMode::Overload
        } else if self.strict {
            LoadMode::LoadStrict
        } else {
            LoadMode::Load
        }
    }

    /// Builds the library loader these settings describe.
    #[must_use]
    pub fn to_loader(&self) -> Loader {
        Loader::new()
            .add_files(&self.files)
            .with_mode(self.mode())
    }
}
