// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings loading.
//!
//! Tests the config module with realistic `dotenv.toml` files.

use std::path::PathBuf;

use dotenv_rs::LoadMode;
use dotenv_rs::config::{ENV_PREFIX, Settings, SettingsLoader};
use dotenv_rs::error::ConfigError;
use dotenv_rs::logging::LogLevel;
use tempfile::TempDir;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let settings = Settings::from_toml_str("files = [\".env.production\"]").unwrap();
    assert_eq!(
        settings,
        Settings {
            files: vec![PathBuf::from(".env.production")],
            ..Settings::default()
        }
    );
    assert_eq!(settings.mode(), LoadMode::Load);
}

#[test]
fn config_parse_everything() {
    let toml = r#"
files = ["a.env", "b.env"]
overload = true
json = true
log_level = 6
log_file = "dotenv.log"
"#;
    let settings = Settings::from_toml_str(toml).unwrap();
    assert_eq!(settings.mode(), LoadMode::Overload);
    assert_eq!(settings.log_level, LogLevel::VERBOSE);
    assert_eq!(settings.log_file.as_deref(), Some("dotenv.log"));
}

#[test]
fn config_wrong_type_rejected() {
    assert!(Settings::from_toml_str("files = \"a.env\"").is_err());
    assert!(Settings::from_toml_str("strict = \"yes please\"").is_err());
}

#[test]
fn config_invalid_toml_rejected() {
    assert!(Settings::from_toml_str("files = [").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_layers_in_order() {
    let dir = TempDir::new().unwrap();
    let default_file = dir.path().join("dotenv.toml");
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&default_file, "files = [\"default.env\"]\njson = true\n").unwrap();
    std::fs::write(&explicit, "files = [\"explicit.env\"]\n").unwrap();

    let env = [("DOTENV_STRICT".to_string(), "true".to_string())]
        .into_iter()
        .collect();
    let settings = SettingsLoader::new()
        .add_toml_file_optional(&default_file)
        .add_toml_file(&explicit)
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap();
    assert_eq!(settings.files, vec![PathBuf::from("explicit.env")]);
    assert!(settings.json);
    assert!(settings.strict);
}

#[test]
fn config_env_combination_validated() {
    let env = [
        ("DOTENV_STRICT".to_string(), "true".to_string()),
        ("DOTENV_OVERLOAD".to_string(), "true".to_string()),
    ]
    .into_iter()
    .collect();
    let err = SettingsLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { key, .. }) if key == "strict"
    ));
}

#[test]
fn config_ignores_foreign_dotenv_variables() {
    let env = [
        ("DOTENV_PRIVATE_KEY".to_string(), "abc".to_string()),
        ("DOTENV_PUBLIC_KEY".to_string(), "def".to_string()),
        ("DOTENV_FILES".to_string(), ".env.vault".to_string()),
    ]
    .into_iter()
    .collect();
    let settings = SettingsLoader::new()
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(env)
        .build()
        .unwrap();
    assert_eq!(settings.files, vec![PathBuf::from(".env.vault")]);
}

#[test]
fn config_unknown_toml_key_still_rejected() {
    assert!(Settings::from_toml_str("private_key = \"abc\"").is_err());
}
