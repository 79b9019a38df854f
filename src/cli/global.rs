// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings and logging options.
//!
//! ```text
//! --config FILE       ← settings file on top of ./dotenv.toml
//! --log-level N       ← console verbosity (0-6)
//! --file-log-level N  ← file verbosity (defaults to trace)
//! --log-file FILE     ← also log to FILE
//! --log-json          ← write FILE as JSON lines
//!
//! Precedence: CLI flags > DOTENV_* > --config > dotenv.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Settings file read after ./dotenv.toml.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=trace with targets).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Write the log file as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,
}
