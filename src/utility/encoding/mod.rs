// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Byte-order-mark handling for env files.
//!
//! ```text
//! raw bytes --(detect BOM)--> Encoding --(decode)--> UTF-8 str
//!   EF BB BF  -> Utf8     (BOM stripped, strict UTF-8)
//!   FF FE     -> Utf16Le  (encoding_rs, invalid -> U+FFFD)
//!   FE FF     -> Utf16Be  (encoding_rs, invalid -> U+FFFD)
//!   otherwise -> Utf8     (strict UTF-8)
//! ```
//!
//! Uses `encoding_rs` for BOM sniffing and UTF-16 decoding.

use encoding_rs::{UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;

/// Encodings an env file may declare through its BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, with or without BOM
    #[default]
    Utf8,
    /// UTF-16 Little Endian (BOM `FF FE`)
    Utf16Le,
    /// UTF-16 Big Endian (BOM `FE FF`)
    Utf16Be,
}

/// Invalid UTF-8 in a file without a UTF-16 BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidUtf8 {
    /// Byte offset of the first invalid sequence, BOM excluded.
    pub valid_up_to: usize,
}

/// Sniffs the BOM at the start of `bytes`.
///
/// Returns the encoding and the length of the BOM (0 when absent).
#[must_use]
pub fn detect(bytes: &[u8]) -> (Encoding, usize) {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((enc, len)) if enc == UTF_16LE => (Encoding::Utf16Le, len),
        Some((enc, len)) if enc == UTF_16BE => (Encoding::Utf16Be, len),
        Some((enc, len)) if enc == UTF_8 => (Encoding::Utf8, len),
        _ => (Encoding::Utf8, 0),
    }
}

/// Decodes env file bytes to UTF-8 with any BOM removed.
///
/// # Errors
///
/// Returns [`InvalidUtf8`] if the content has no UTF-16 BOM and is not
/// valid UTF-8.
///
/// # Example
/// ```
/// use dotenv_rs::utility::encoding::decode_to_utf8;
///
/// let text = decode_to_utf8(b"\xEF\xBB\xBFBOM=UTF-8\n").unwrap();
/// assert_eq!(text, "BOM=UTF-8\n");
/// ```
pub fn decode_to_utf8(bytes: &[u8]) -> Result<Cow<'_, str>, InvalidUtf8> {
    let (encoding, bom_len) = detect(bytes);
    let body = &bytes[bom_len..];

    match encoding {
        Encoding::Utf8 => std::str::from_utf8(body)
            .map(Cow::Borrowed)
            .map_err(|e| InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }),
        Encoding::Utf16Le => {
            let (text, _had_errors) = UTF_16LE.decode_without_bom_handling(body);
            Ok(text)
        }
        Encoding::Utf16Be => {
            let (text, _had_errors) = UTF_16BE.decode_without_bom_handling(body);
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests;
