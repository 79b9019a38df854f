// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use tempfile::TempDir;

use super::{ENV_PREFIX, Settings, SettingsLoader};
use crate::error::ConfigError;
use crate::loader::LoadMode;
use crate::logging::LogLevel;

fn env_vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_default_settings() {
    let settings = SettingsLoader::new().build().unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.mode(), LoadMode::Load);
    assert_eq!(settings.log_level, LogLevel::WARN);
}

#[test]
fn test_from_toml_str() {
    let settings = Settings::from_toml_str(
        r#"
files = [".env", "~/.env.shared"]
strict = true
json = true
log_level = 4
log_file = "logs/dotenv.log"
"#,
    )
    .unwrap();

    assert_eq!(
        settings.files,
        vec![PathBuf::from(".env"), PathBuf::from("~/.env.shared")]
    );
    assert_eq!(settings.mode(), LoadMode::LoadStrict);
    assert!(settings.json);
    assert_eq!(settings.log_level, LogLevel::DEBUG);
    assert_eq!(settings.log_file.as_deref(), Some("logs/dotenv.log"));
}

#[test]
fn test_unknown_key_rejected() {
    let err = Settings::from_toml_str("verbose = true").unwrap_err();
    assert!(err.to_string().contains("verbose"), "{err}");
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Settings::from_toml_str("log_level = 9").is_err());
}

#[test]
fn test_strict_with_overload_rejected() {
    let err = Settings::from_toml_str("strict = true\noverload = true").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    insta::assert_snapshot!(config_err.to_string(), @"invalid value for 'strict': cannot be combined with overload");
}

#[test]
fn test_missing_required_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Settings::from_file(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(p)) if *p == path.display().to_string()
    ));
}

#[test]
fn test_optional_files() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("dotenv.toml");
    std::fs::write(&present, "json = true\n").unwrap();

    let settings = SettingsLoader::new()
        .add_toml_file_optional(&present)
        .add_toml_file_optional(dir.path().join("nope.toml"))
        .build()
        .unwrap();
    assert!(settings.json);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = Settings::from_toml_str("files = [").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ParseError { path, .. }) if path == "<string>"
    ));
}

#[test]
fn test_invalid_toml_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "strict = \n").unwrap();

    let err = Settings::from_file(&path).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::ParseError { path: reported, .. }) => {
            assert!(reported.contains("broken.toml"), "{reported}");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_unrelated_prefixed_env_vars_ignored() {
    let settings = SettingsLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env_vars(&[
            ("DOTENV_PRIVATE_KEY", "abc"),
            ("DOTENV_KEY", "dotenv://:key_123@dotenv.org/vault/.env.vault"),
            ("DOTENV", "true"),
            ("DOTENVX_OTHER", "1"),
            ("DOTENV_JSON", "true"),
        ]))
        .build()
        .unwrap();
    assert_eq!(
        settings,
        Settings {
            json: true,
            ..Settings::default()
        }
    );
}

#[test]
fn test_env_log_json() {
    let settings = SettingsLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env_vars(&[("DOTENV_LOG_JSON", "true")]))
        .build()
        .unwrap();
    assert!(settings.log_json);
}

#[test]
fn test_precedence_file_env_override() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("dotenv.toml");
    let extra = dir.path().join("extra.toml");
    std::fs::write(&base, "files = [\"base.env\"]\nlog_level = 1\njson = true\n").unwrap();
    std::fs::write(&extra, "log_level = 2\n").unwrap();

    let settings = SettingsLoader::new()
        .add_toml_file_optional(&base)
        .add_toml_file(&extra)
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env_vars(&[
            ("DOTENV_FILES", "a.env,b.env"),
            ("DOTENV_LOG_LEVEL", "3"),
        ]))
        .set("log_level", 5_i64)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        settings.files,
        vec![PathBuf::from("a.env"), PathBuf::from("b.env")]
    );
    assert_eq!(settings.log_level, LogLevel::TRACE);
    assert!(settings.json);
}

#[test]
fn test_env_flags_parse_as_bools() {
    let settings = SettingsLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env_vars(&[("DOTENV_OVERLOAD", "true")]))
        .build()
        .unwrap();
    assert_eq!(settings.mode(), LoadMode::Overload);
}

#[test]
fn test_to_loader_carries_files_and_mode() {
    let settings = Settings {
        files: vec![PathBuf::from("a.env")],
        overload: true,
        ..Settings::default()
    };
    let loader = settings.to_loader().with_base_dir("/app");
    assert_eq!(loader.mode(), LoadMode::Overload);
    assert_eq!(
        loader.resolved_paths().unwrap(),
        vec![PathBuf::from("/app/a.env")]
    );
}
