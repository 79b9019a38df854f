// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access to the live process environment.
//!
//! Every read and write of the process environment in this crate goes
//! through here, so the `unsafe` surface of `set_var`/`remove_var` lives in
//! one place.
//!
//! Loading is meant to run at process start, before other threads exist.
//! Nothing here locks: a thread reading the environment while a load is in
//! progress can observe a partially applied file.

use std::ffi::OsStr;

/// Returns the value of `key` if it is set and valid Unicode.
#[must_use]
pub fn get(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Returns `true` if `key` is set, whatever its encoding.
#[must_use]
pub fn contains(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

/// Returns `true` if the platform accepts `key=value` as an entry.
///
/// Keys must be non-empty and free of `=` and NUL; values free of NUL.
#[must_use]
pub fn is_settable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}

/// Sets `key` to `value` in the process environment.
///
/// Callers must pass an entry accepted by [`is_settable`].
pub fn set(key: &str, value: &str) {
    // SAFETY: env mutation is confined to single-threaded start-up use (see
    // module docs). Parsed keys are validated by the parser, parsed values
    // are checked for NUL, and snapshot entries are filtered through
    // `is_settable` before they get here.
    unsafe {
        std::env::set_var(key, value);
    }
}

/// Removes `key` from the process environment.
pub fn remove(key: impl AsRef<OsStr>) {
    // SAFETY: same single-threaded start-up contract as `set`.
    unsafe {
        std::env::remove_var(key);
    }
}

/// Returns all Unicode entries of the process environment.
///
/// Entries whose key or value is not valid Unicode are skipped with a
/// warning.
#[must_use]
pub fn vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                tracing::warn!(
                    key = %key.as_ref().map_or_else(|k| k.to_string_lossy().into_owned(), Clone::clone),
                    "skipping environment entry that is not valid Unicode"
                );
                None
            }
        })
        .collect()
}
