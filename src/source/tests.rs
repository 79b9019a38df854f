// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;

use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};

use super::EnvironmentSource;
use crate::core::env::live;
use crate::error::{DotenvError, FsError};
use crate::parser::Precedence;

fn env_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content).expect("failed to write");
    file
}

#[test]
fn test_open_reads_pairs_and_raw_bytes() {
    let file = env_file(b"\xEF\xBB\xBFSRC_BOM=UTF-8\n");
    let source = EnvironmentSource::open(file.path(), Precedence::EnvironmentFirst).unwrap();

    assert_eq!(source.path(), file.path());
    assert!(source.raw().starts_with(b"\xEF\xBB\xBF"));
    assert_eq!(source.len(), 1);
    assert_eq!(source.get("SRC_BOM"), Some("UTF-8"));
}

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = EnvironmentSource::open(dir.path().join("absent.env"), Precedence::default())
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[test]
fn test_open_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = EnvironmentSource::open(dir.path(), Precedence::default()).unwrap_err();
    assert!(matches!(err, DotenvError::Fs(ref fs) if matches!(**fs, FsError::Io { .. })));
}

#[test]
fn test_parse_error_names_the_file() {
    let file = env_file(b"OK=1\nnot valid\n");
    let err = EnvironmentSource::open(file.path(), Precedence::default()).unwrap_err();
    let parse = err.as_parse_error().expect("expected a parse error");
    assert_eq!(parse.line(), 2);
    assert_eq!(parse.path(), Some(file.path().display().to_string().as_str()));
}

#[test]
#[serial]
fn test_apply_keeps_existing_values() {
    live::set("SRC_APPLY_EXISTING", "original");
    live::remove("SRC_APPLY_NEW");

    let source = EnvironmentSource::from_bytes(
        "test.env",
        b"SRC_APPLY_EXISTING=from-file\nSRC_APPLY_NEW=added\n".to_vec(),
        Precedence::EnvironmentFirst,
    )
    .unwrap();
    let result = source.apply();

    assert_eq!(live::get("SRC_APPLY_EXISTING").as_deref(), Some("original"));
    assert_eq!(live::get("SRC_APPLY_NEW").as_deref(), Some("added"));
    assert_eq!(result.get("SRC_APPLY_EXISTING"), Some("from-file"));
    assert_eq!(result.get("SRC_APPLY_NEW"), Some("added"));
    assert_eq!(result.preserved(), ["SRC_APPLY_EXISTING".to_string()]);

    live::remove("SRC_APPLY_EXISTING");
    live::remove("SRC_APPLY_NEW");
}

#[test]
#[serial]
fn test_apply_override_replaces_values() {
    live::set("SRC_OVERRIDE", "original");

    let source = EnvironmentSource::from_bytes(
        "test.env",
        b"SRC_OVERRIDE=from-file\n".to_vec(),
        Precedence::FileFirst,
    )
    .unwrap();
    let result = source.apply_override();

    assert_eq!(live::get("SRC_OVERRIDE").as_deref(), Some("from-file"));
    assert_eq!(result.get("SRC_OVERRIDE"), Some("from-file"));
    assert!(result.preserved().is_empty());

    live::remove("SRC_OVERRIDE");
}

#[test]
#[serial]
fn test_substitution_sees_live_environment() {
    live::set("SRC_SUB_HOST", "live-host");

    let text = b"SRC_SUB_HOST=file-host\nSRC_SUB_URL=\"http://$SRC_SUB_HOST\"\n".to_vec();
    let load = EnvironmentSource::from_bytes("a.env", text.clone(), Precedence::EnvironmentFirst)
        .unwrap();
    let overload = EnvironmentSource::from_bytes("a.env", text, Precedence::FileFirst).unwrap();

    assert_eq!(load.get("SRC_SUB_URL"), Some("http://live-host"));
    assert_eq!(overload.get("SRC_SUB_URL"), Some("http://file-host"));

    live::remove("SRC_SUB_HOST");
}
