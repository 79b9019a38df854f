// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered settings loading.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file_optional("dotenv.toml")
//!   .add_toml_file(--config)
//!   .with_env_prefix("DOTENV")
//!   .set(flag, value)
//!        |
//!        v
//!    build() --> Settings (validated)
//! ```

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::{SETTINGS_KEYS, Settings};
use crate::core::env::live;
use crate::error::{ConfigError, Result};

/// Builder for loading [`Settings`] from several sources.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<config::Map<String, String>>,
    required: Vec<PathBuf>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: None,
            required: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.required.push(p.to_path_buf());
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `<PREFIX>_<SETTING>` variables; `FILES` is split on commas.
    ///
    /// Only variables naming a known setting are read. Others sharing the
    /// prefix, such as `DOTENV_PRIVATE_KEY`, are ignored.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads prefixed variables from `vars` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env_source(mut self, vars: config::Map<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Sets an override that beats every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be
    /// converted.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Merges all sources into validated [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required settings file is missing.
    /// - A settings file is not valid TOML or has unknown keys.
    /// - An environment variable cannot be parsed.
    /// - The merged settings fail [`Settings::validate`].
    pub fn build(self) -> Result<Settings> {
        if let Some(missing) = self.required.iter().find(|p| !p.exists()) {
            return Err(ConfigError::NotFound(missing.display().to_string()).into());
        }

        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self
                    .env_source
                    .unwrap_or_else(|| live::vars().into_iter().collect());
                self.builder.add_source(
                    Environment::with_prefix(prefix)
                        .prefix_separator("_")
                        .try_parsing(true)
                        .list_separator(",")
                        .with_list_parse_key("files")
                        .source(Some(settings_vars(prefix, vars))),
                )
            }
            None => self.builder,
        };
        let merged = builder.build().map_err(file_parse_error)?;
        let settings: Settings = merged.try_deserialize()?;
        settings.validate()?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

/// Keeps the `<prefix>_<SETTING>` variables that name a known setting.
fn settings_vars(
    prefix: &str,
    vars: config::Map<String, String>,
) -> config::Map<String, String> {
    vars.into_iter()
        .filter(|(key, _)| match setting_name(prefix, key) {
            Some(name) if SETTINGS_KEYS.iter().any(|s| name.eq_ignore_ascii_case(s)) => true,
            Some(_) => {
                tracing::trace!(key, "ignoring variable that is not a setting");
                false
            }
            None => false,
        })
        .collect()
}

/// Returns the part of `key` after `<prefix>_`, ignoring ASCII case.
fn setting_name<'k>(prefix: &str, key: &'k str) -> Option<&'k str> {
    let head = key.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    key[prefix.len()..].strip_prefix('_')
}

/// Turns a TOML syntax error into [`ConfigError::ParseError`].
fn file_parse_error(err: config::ConfigError) -> anyhow::Error {
    match err {
        config::ConfigError::FileParse { uri, cause } => ConfigError::ParseError {
            path: uri.unwrap_or_else(|| "<string>".to_string()),
            message: cause.to_string(),
        }
        .into(),
        other => other.into(),
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
