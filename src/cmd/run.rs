// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `dotenv` command: load, then exec or print.

use std::ffi::OsString;
use std::io::Write;
use std::process::Command;

use anyhow::Context;

use crate::config::Settings;
use crate::error::{ProcessError, Result};
use crate::loader::LoadResult;

/// Loads the configured files, then runs `command` or prints the pairs.
///
/// Returns the exit code to report.
///
/// # Errors
///
/// Returns an error if loading fails, the command cannot be found or
/// started, or stdout cannot be written.
pub fn run(settings: &Settings, command: &[OsString]) -> Result<u8> {
    let result = settings.to_loader().load()?;
    tracing::info!(
        variables = result.len(),
        preserved = result.preserved().len(),
        files = result.loaded_files().len(),
        missing = result.missing_files().len(),
        mode = %settings.mode(),
        "environment loaded"
    );

    if command.is_empty() {
        let stdout = std::io::stdout();
        write_pairs(&mut stdout.lock(), &result, settings.json)
            .context("failed to write variables to stdout")?;
        return Ok(0);
    }

    run_command(command)
}

/// Writes `KEY=VALUE` lines, or one pretty JSON object.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_pairs<W: Write>(out: &mut W, result: &LoadResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
    } else {
        for (key, value) in result.iter() {
            writeln!(out, "{key}={value}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Runs `command` with the current environment and returns its exit code.
///
/// # Errors
///
/// `ProcessError` if the program is not on `PATH`, cannot be spawned, or
/// is killed by a signal.
pub fn run_command(command: &[OsString]) -> Result<u8> {
    let Some((program, args)) = command.split_first() else {
        return Ok(0);
    };
    let name = program.to_string_lossy().into_owned();
    let path = which::which(program)
        .map_err(|_| ProcessError::ExecutableNotFound { name: name.clone() })?;

    tracing::debug!(program = %path.display(), args = args.len(), "running command");
    let status = Command::new(&path)
        .args(args)
        .status()
        .map_err(|source| ProcessError::SpawnFailed {
            command: name.clone(),
            source,
        })?;

    let code = status
        .code()
        .ok_or(ProcessError::Terminated { command: name })?;
    tracing::debug!(code, "command exited");
    Ok(u8::try_from(code).unwrap_or(1))
}
