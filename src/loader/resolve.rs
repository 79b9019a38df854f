// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path expansion for env file arguments.
//!
//! ```text
//! "~/x.env"   -> $HOME/x.env
//! "a/../b"    -> <base>/b        (lexical, no symlink resolution)
//! "/abs.env"  -> /abs.env
//! ```

use std::path::{Component, Path, PathBuf};

use crate::error::{DotenvError, DotenvResult, FsError};

/// Expands a leading `~` and anchors relative paths at `base`.
///
/// `base` defaults to the current directory, read when this is called.
///
/// # Errors
///
/// Fails if `~` is used and the home directory is unknown, or if the
/// current directory cannot be determined.
pub fn expand_path(path: &Path, base: Option<&Path>) -> DotenvResult<PathBuf> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        return Ok(normalize(&expanded));
    }

    let base = match base {
        Some(base) => base.to_path_buf(),
        None => std::env::current_dir().map_err(|e| FsError::from_io(Path::new("."), e))?,
    };
    Ok(normalize(&base.join(expanded)))
}

fn expand_tilde(path: &Path) -> DotenvResult<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().ok_or_else(|| {
        DotenvError::Other(format!("cannot expand '{}': home directory unknown", path.display()).into())
    })?;
    Ok(home.join(rest))
}

/// Removes `.` and folds `..` without touching the filesystem.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
