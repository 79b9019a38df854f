// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          DotenvError (~24 bytes)
//!                  |
//!   +------+-------+-------+---------+
//!   |      |       |       |         |
//!   v      v       v       v         v
//!   Fs   Parse   Config  Process   Other
//!  Box    Box     Box     Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Fs       NotFound, PermissionDenied, Io
//!   Parse    path + line + ParseErrorKind
//!   Config   ParseError, InvalidValue, NotFound
//!   Process  ExecutableNotFound, SpawnFailed
//!
//! All variants boxed => DotenvError fits in 24 bytes.
//! ```

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DotenvError`].
pub type DotenvResult<T> = std::result::Result<T, DotenvError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DotenvError {
    /// Reading an env file failed.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// An env file has malformed syntax.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Child process error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl DotenvError {
    /// Returns `true` if this error reports a missing env file.
    ///
    /// This is the only failure that the tolerant load modes absorb.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(fs) if matches!(**fs, FsError::NotFound(_)))
    }

    /// Returns `true` if this error reports an unreadable env file.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Fs(fs) if matches!(**fs, FsError::PermissionDenied(_)))
    }

    /// Returns the parse error, if this is one.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DotenvError {
                fn from(err: $error) -> Self {
                    DotenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    FsError => Fs,
    ParseError => Parse,
    ConfigError => Config,
    ProcessError => Process,
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source },
        }
    }
}

// --- Parse Errors ---

/// Malformed env file content.
///
/// The parser itself knows nothing about files; [`ParseError::with_path`]
/// attaches the location once the error reaches the source that read it.
#[derive(Debug, Error)]
#[error("{}:{line}: {kind}", .path.as_deref().unwrap_or("<input>"))]
pub struct ParseError {
    path: Option<String>,
    line: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    #[must_use]
    pub const fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self {
            path: None,
            line,
            kind,
        }
    }

    /// Attaches the file path the error was found in.
    #[must_use]
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.display().to_string());
        self
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// 1-based line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// What went wrong on a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Line is neither blank, a comment, nor an assignment.
    #[error("expected KEY=VALUE, got '{0}'")]
    InvalidLine(String),

    /// Key contains characters outside `[A-Za-z0-9_.-]` or starts with a digit.
    #[error("invalid variable name '{0}'")]
    InvalidKey(String),

    /// A quoted value never closes.
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),

    /// Something other than a comment follows a closing quote.
    #[error("unexpected characters after closing quote: '{0}'")]
    TrailingCharacters(String),

    /// `export KEY` names a key not assigned earlier in the file.
    #[error("'export {0}' refers to a variable that is not defined in this file")]
    UndefinedExport(String),

    /// Values cannot carry NUL into the process environment.
    #[error("value contains a NUL byte")]
    NulByte,

    /// File content is not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

// --- Config Errors ---

/// Settings-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse the settings file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Settings file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Errors from the command run after loading.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated by a signal.
    #[error("process '{command}' was terminated by a signal")]
    Terminated { command: String },
}

#[cfg(test)]
mod tests;
