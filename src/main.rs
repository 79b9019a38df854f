// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> cmd::run
//!                                             |
//!                            exit code of COMMAND, or 0
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use dotenv_rs::cli::{self, Cli};
use dotenv_rs::cmd::run::run;
use dotenv_rs::config::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, Settings, SettingsLoader};
use dotenv_rs::instrument::{TracingInstrumenter, set_instrumenter};
use dotenv_rs::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli, &settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    set_instrumenter(Arc::new(TracingInstrumenter));

    match run(&settings, &cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_settings_loader(cli: &Cli) -> SettingsLoader {
    let mut loader = SettingsLoader::new().add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    if let Some(path) = &cli.global.config {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_settings(cli: &Cli) -> dotenv_rs::error::Result<Settings> {
    cli.apply_overrides(build_settings_loader(cli))?.build()
}

fn build_log_config(cli: &Cli, settings: &Settings) -> LogConfig {
    let file_level = cli
        .global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::TRACE);

    LogConfig::builder()
        .with_console_level(settings.log_level)
        .with_file_level(file_level)
        .maybe_with_log_file(settings.log_file.clone())
        .with_json_file(settings.log_json)
        .build()
}
