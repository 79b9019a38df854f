// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{DotenvError, DotenvResult, FsError, ParseError, ParseErrorKind};

#[test]
fn test_parse_error_display_without_path() {
    let err = ParseError::new(3, ParseErrorKind::UnterminatedQuote('"'));
    insta::assert_snapshot!(err.to_string(), @r#"<input>:3: unterminated " quote"#);
}

#[test]
fn test_parse_error_display_with_path() {
    let err = ParseError::new(7, ParseErrorKind::InvalidKey("1ABC".to_string()))
        .with_path(Path::new("conf/app.env"));
    insta::assert_snapshot!(err.to_string(), @"conf/app.env:7: invalid variable name '1ABC'");
    assert_eq!(err.path(), Some("conf/app.env"));
    assert_eq!(err.line(), 7);
}

#[test]
fn test_fs_error_from_io_classifies_kind() {
    let path = Path::new("/nowhere/.env");

    let not_found = FsError::from_io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(matches!(not_found, FsError::NotFound(ref p) if p == "/nowhere/.env"));

    let denied = FsError::from_io(
        path,
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    assert!(matches!(denied, FsError::PermissionDenied(_)));

    let other = FsError::from_io(path, std::io::Error::other("disk on fire"));
    assert!(matches!(other, FsError::Io { .. }));
}

#[test]
fn test_is_not_found() {
    let err: DotenvError = FsError::NotFound(".env".to_string()).into();
    assert!(err.is_not_found());
    assert!(!err.is_permission_denied());

    let err: DotenvError = FsError::PermissionDenied(".env".to_string()).into();
    assert!(!err.is_not_found());
    assert!(err.is_permission_denied());

    let err: DotenvError = ParseError::new(1, ParseErrorKind::NulByte).into();
    assert!(!err.is_not_found());
    assert!(err.as_parse_error().is_some());
}

#[test]
fn test_dotenv_error_size() {
    // Box<str> variant is a fat pointer (16 bytes) plus discriminant.
    let size = std::mem::size_of::<DotenvError>();
    assert!(size <= 24, "DotenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_dotenv_result_size() {
    let size = std::mem::size_of::<DotenvResult<()>>();
    assert!(size <= 24, "DotenvResult<()> is {size} bytes, expected <= 24");
}
