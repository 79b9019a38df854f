// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One env file and the two ways of applying it.
//!
//! ```text
//! EnvironmentSource::open(path)
//!   read whole file --> parse (substitution against live env)
//!        |
//!        +-- apply()          set only keys not already in the env
//!        +-- apply_override() set every key
//!        |
//!        v
//!   LoadResult (all parsed pairs + preserved keys)
//! ```

use std::path::{Path, PathBuf};

use crate::core::env::live;
use crate::error::{DotenvResult, FsError, ParseError};
use crate::loader::LoadResult;
use crate::parser::{EnvPair, LiveLookup, Parser, Precedence};

/// A parsed env file.
///
/// Lives for one load call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct EnvironmentSource {
    path: PathBuf,
    raw: Vec<u8>,
    pairs: Vec<EnvPair>,
}

impl EnvironmentSource {
    /// Reads and parses the file at `path`.
    ///
    /// `$NAME` references resolve against earlier keys of the file and the
    /// live environment, ordered by `precedence`.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the file does not exist.
    /// - [`FsError::PermissionDenied`] if it cannot be read.
    /// - [`ParseError`] if its content is malformed.
    pub fn open(path: impl Into<PathBuf>, precedence: Precedence) -> DotenvResult<Self> {
        let path = path.into();
        let raw = std::fs::read(&path).map_err(|e| FsError::from_io(&path, e))?;
        Ok(Self::from_bytes(path, raw, precedence)?)
    }

    /// Parses `raw` as if it had been read from `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying `path` if the content is malformed.
    pub fn from_bytes(
        path: impl Into<PathBuf>,
        raw: Vec<u8>,
        precedence: Precedence,
    ) -> std::result::Result<Self, ParseError> {
        let path = path.into();
        let pairs = Parser::new()
            .with_lookup(&LiveLookup)
            .with_precedence(precedence)
            .parse_bytes(&raw)
            .map_err(|e| e.with_path(&path))?;
        tracing::debug!(path = %path.display(), pairs = pairs.len(), "parsed env file");
        Ok(Self { path, raw, pairs })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File content exactly as read, BOM included.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    #[must_use]
    pub fn pairs(&self) -> &[EnvPair] {
        &self.pairs
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sets every key the environment does not already define.
    ///
    /// The result holds all of the file's pairs; keys that kept their
    /// existing value are listed in [`LoadResult::preserved`].
    #[must_use = "the result reports what the file declared"]
    pub fn apply(&self) -> LoadResult {
        let mut result = LoadResult::new();
        for EnvPair { key, value } in &self.pairs {
            if live::contains(key) {
                tracing::trace!(key, "keeping existing value");
                result.mark_preserved(key);
            } else {
                live::set(key, value);
            }
            result.insert(key.as_str(), value.as_str());
        }
        result
    }

    /// Sets every key, replacing existing values.
    #[must_use = "the result reports what the file declared"]
    pub fn apply_override(&self) -> LoadResult {
        let mut result = LoadResult::new();
        for EnvPair { key, value } in &self.pairs {
            live::set(key, value);
            result.insert(key.as_str(), value.as_str());
        }
        result
    }
}

#[cfg(test)]
mod tests;
