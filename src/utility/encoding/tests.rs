// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Encoding, InvalidUtf8, decode_to_utf8, detect};
use std::borrow::Cow;

#[test]
fn test_utf8_passthrough_borrows() {
    let input = "GREETING=Hello, 世界!";
    let result = decode_to_utf8(input.as_bytes()).unwrap();
    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result, input);
}

#[test]
fn test_utf8_bom_stripped() {
    let result = decode_to_utf8(b"\xEF\xBB\xBFBOM=UTF-8").unwrap();
    insta::assert_snapshot!(result, @"BOM=UTF-8");
}

#[test]
fn test_utf16_le_bom() {
    // "A=1" in UTF-16 LE behind FF FE
    let input = b"\xFF\xFEA\x00=\x001\x00";
    assert_eq!(detect(input), (Encoding::Utf16Le, 2));
    assert_eq!(decode_to_utf8(input).unwrap(), "A=1");
}

#[test]
fn test_utf16_be_bom() {
    let input = b"\xFE\xFF\x00A\x00=\x001";
    assert_eq!(detect(input), (Encoding::Utf16Be, 2));
    assert_eq!(decode_to_utf8(input).unwrap(), "A=1");
}

#[test]
fn test_detect_without_bom() {
    assert_eq!(detect(b"KEY=value"), (Encoding::Utf8, 0));
    assert_eq!(detect(b""), (Encoding::Utf8, 0));
    assert_eq!(detect(b"\xEF\xBB\xBF"), (Encoding::Utf8, 3));
}

#[test]
fn test_invalid_utf8_reports_offset() {
    let err = decode_to_utf8(b"\xEF\xBB\xBFAB\xFF").unwrap_err();
    assert_eq!(err, InvalidUtf8 { valid_up_to: 2 });
}
