// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line of the `dotenv` binary.
//!
//! ```text
//! dotenv [OPTIONS]                    print loaded pairs
//! dotenv [OPTIONS] COMMAND [ARGS]...  run COMMAND with them
//! ```

pub mod global;


use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::global::GlobalOptions;
use crate::config::SettingsLoader;
use crate::error::Result;

/// Loads `.env` files, then runs a command or prints the variables.
#[derive(Debug, Parser)]
#[command(
    name = "dotenv",
    author,
    version,
    about = "Loads .env files into the environment",
    long_about = "dotenv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Loads variables from .env files, then runs COMMAND with them.\n\
                  Without a command, prints the loaded variables.",
    after_help = "SETTINGS:\n\n\
                  Defaults are read from ./dotenv.toml when present, then from\n\
                  --config, then from DOTENV_* environment variables (for example\n\
                  DOTENV_FILES=.env,.env.local). Command-line flags win."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Env file to load; repeat or separate with commas. Defaults to .env.
    #[arg(short = 'f', long = "file", value_name = "FILE", value_delimiter = ',', action = clap::ArgAction::Append)]
    pub files: Vec<PathBuf>,

    /// Replace variables that are already set.
    #[arg(short = 'o', long, conflicts_with = "strict")]
    pub overload: bool,

    /// Fail if an env file is missing.
    #[arg(short = 's', long)]
    pub strict: bool,

    /// Print loaded variables as a JSON object.
    #[arg(long)]
    pub json: bool,

    /// Command to run with the loaded environment.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Adds the flags that were given as highest-priority overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be stored.
    pub fn apply_overrides(&self, mut loader: SettingsLoader) -> Result<SettingsLoader> {
        if !self.files.is_empty() {
            let files: Vec<String> = self
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            loader = loader.set("files", files)?;
        }
        if self.overload {
            loader = loader.set("overload", true)?;
        }
        if self.strict {
            loader = loader.set("strict", true)?;
        }
        if self.json {
            loader = loader.set("json", true)?;
        }
        if let Some(level) = self.global.log_level {
            loader = loader.set("log_level", i64::from(level))?;
        }
        if let Some(path) = &self.global.log_file {
            loader = loader.set("log_file", path.display().to_string())?;
        }
        if self.global.log_json {
            loader = loader.set("log_json", true)?;
        }
        Ok(loader)
    }
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> std::result::Result<Cli, clap::Error> {
    Cli::try_parse()
}
