// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading env files into the process environment.
//!
//! # Loader Pipeline
//!
//! ```text
//! Loader::new()
//!   .add_file(a)            none given -> ".env"
//!   .add_file(b)
//!   .with_mode(mode)
//!        |
//!        v
//!    load()
//!      expand ~ / relative paths (cwd read now)
//!      ensure_original_env_saved()
//!      for each path:
//!        missing? --Load/Overload--> skip
//!                 --LoadStrict-----> FsError::NotFound (earlier files stay applied)
//!        EnvironmentSource::open
//!        instrument(event, { env }, apply | apply_override)
//!        merge into LoadResult
//! ```
//!
//! | Mode         | Missing file | Overwrites existing | Event             |
//! |--------------|--------------|---------------------|-------------------|
//! | `Load`       | skipped      | no                  | `dotenv.load`     |
//! | `LoadStrict` | error        | no                  | `dotenv.load`     |
//! | `Overload`   | skipped      | yes                 | `dotenv.overload` |
//!
//! Missing files are detected with an existence check before opening. A
//! file removed between the check and the open still counts as missing in
//! the tolerant modes; the window is not atomic.

pub mod resolve;
pub mod result;


use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DotenvResult, FsError};
use crate::instrument::{self, InstrumentationPayload, LOAD_EVENT, OVERLOAD_EVENT};
use crate::parser::Precedence;
use crate::snapshot;
use crate::source::EnvironmentSource;

pub use resolve::expand_path;
pub use result::LoadResult;

/// File loaded when no paths are given.
pub const DEFAULT_FILE: &str = ".env";

/// How a load call treats missing files and existing variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Skip missing files, keep existing variables.
    #[default]
    Load,
    /// Fail on the first missing file, keep existing variables.
    LoadStrict,
    /// Skip missing files, replace existing variables.
    Overload,
}

impl LoadMode {
    /// Instrumentation event name for this mode.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Load | Self::LoadStrict => LOAD_EVENT,
            Self::Overload => OVERLOAD_EVENT,
        }
    }

    #[must_use]
    pub const fn tolerates_missing(self) -> bool {
        !matches!(self, Self::LoadStrict)
    }

    #[must_use]
    pub const fn overwrites(self) -> bool {
        matches!(self, Self::Overload)
    }

    /// Substitution order matching what ends up in the environment.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        if self.overwrites() {
            Precedence::FileFirst
        } else {
            Precedence::EnvironmentFirst
        }
    }
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::LoadStrict => write!(f, "load!"),
            Self::Overload => write!(f, "overload"),
        }
    }
}

/// Builder for a single load call.
#[derive(Debug, Clone)]
pub struct Loader {
    files: Vec<PathBuf>,
    mode: LoadMode,
    default_file: PathBuf,
    base_dir: Option<PathBuf>,
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            mode: LoadMode::default(),
            default_file: PathBuf::from(DEFAULT_FILE),
            base_dir: None,
        }
    }

    /// Adds an env file. Files are processed in the order added.
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn add_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: LoadMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces `.env` as the file used when none were added.
    #[must_use]
    pub fn with_default_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.default_file = path.as_ref().to_path_buf();
        self
    }

    /// Resolves relative paths against `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_base_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.base_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub const fn mode(&self) -> LoadMode {
        self.mode
    }

    /// Returns the absolute paths `load` would process, in order.
    ///
    /// # Errors
    ///
    /// Fails if a `~` cannot be expanded or the current directory is
    /// unavailable.
    pub fn resolved_paths(&self) -> DotenvResult<Vec<PathBuf>> {
        let requested = if self.files.is_empty() {
            std::slice::from_ref(&self.default_file)
        } else {
            self.files.as_slice()
        };
        requested
            .iter()
            .map(|p| expand_path(p, self.base_dir.as_deref()))
            .collect()
    }

    /// Loads every file into the process environment.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] for a missing file in [`LoadMode::LoadStrict`];
    ///   files before it remain applied.
    /// - Permission and parse errors in every mode.
    pub fn load(&self) -> DotenvResult<LoadResult> {
        let paths = self.resolved_paths()?;
        snapshot::ensure_original_env_saved();

        let mut result = LoadResult::new();
        for path in paths {
            match self.load_file(&path) {
                Ok(file_result) => {
                    result.merge(file_result);
                    result.record_loaded(&path);
                }
                Err(e) if e.is_not_found() && self.mode.tolerates_missing() => {
                    tracing::debug!(path = %path.display(), mode = %self.mode, "env file not found, skipping");
                    result.record_missing(&path);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(result)
    }

    fn load_file(&self, path: &Path) -> DotenvResult<LoadResult> {
        if self.mode.tolerates_missing() {
            let exists = path.try_exists().map_err(|e| FsError::from_io(path, e))?;
            if !exists {
                return Err(FsError::NotFound(path.display().to_string()).into());
            }
        }

        tracing::debug!(path = %path.display(), mode = %self.mode, "loading env file");
        let source = EnvironmentSource::open(path, self.mode.precedence())?;
        let payload = InstrumentationPayload { env: &source };
        let overwrite = self.mode.overwrites();
        let mut apply = || -> DotenvResult<LoadResult> {
            Ok(if overwrite {
                source.apply_override()
            } else {
                source.apply()
            })
        };
        instrument::instrument(self.mode.event_name(), &payload, &mut apply)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads `paths` (or `.env` when empty) without replacing existing
/// variables; missing files are skipped.
///
/// # Errors
///
/// Permission and parse errors.
pub fn load<I, P>(paths: I) -> DotenvResult<LoadResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new().add_files(paths).with_mode(LoadMode::Load).load()
}

/// Like [`load`], but the first missing file is an error.
///
/// # Errors
///
/// [`FsError::NotFound`] for a missing file, plus permission and parse
/// errors.
pub fn load_strict<I, P>(paths: I) -> DotenvResult<LoadResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new()
        .add_files(paths)
        .with_mode(LoadMode::LoadStrict)
        .load()
}

/// Loads `paths` (or `.env` when empty), replacing existing variables;
/// missing files are skipped.
///
/// # Errors
///
/// Permission and parse errors.
pub fn overload<I, P>(paths: I) -> DotenvResult<LoadResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new()
        .add_files(paths)
        .with_mode(LoadMode::Overload)
        .load()
}

/// Loads `.env` from the current directory, if present.
///
/// # Errors
///
/// Permission and parse errors.
pub fn dotenv() -> DotenvResult<LoadResult> {
    Loader::new().load()
}
