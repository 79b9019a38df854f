// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment as it was before the first load.
//!
//! ```text
//! ORIGINAL_ENV: Mutex<Option<Env>>
//!
//!   None --ensure_original_env_saved()--> Some(copy of live env)
//!   Some --ensure_original_env_saved()--> unchanged
//!   any  --set_original_env(x)----------> x   (None clears)
//!
//! restore_original_env(): live env := snapshot (set all, remove extras)
//! ```
//!
//! Callers get clones of the held [`Env`]; mutating a clone copies it, so
//! the snapshot itself never changes after capture.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::env::container::Env;
use crate::core::env::{current_env, live};

static ORIGINAL_ENV: Mutex<Option<Env>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<Env>> {
    ORIGINAL_ENV.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the held snapshot, capturing the live environment first if
/// none is held.
fn saved() -> Env {
    let mut slot = slot();
    slot.get_or_insert_with(|| {
        let env = current_env();
        tracing::debug!(vars = env.len(), "saved original environment");
        env
    })
    .clone()
}

/// Captures the live environment unless a snapshot is already held.
pub fn ensure_original_env_saved() {
    let _ = saved();
}

/// Returns the held snapshot, or `None` if none was captured or it was
/// cleared.
#[must_use]
pub fn original_env() -> Option<Env> {
    slot().clone()
}

/// Replaces the held snapshot. `None` clears it so the next
/// [`ensure_original_env_saved`] captures again.
pub fn set_original_env(env: Option<Env>) {
    *slot() = env;
}

/// Makes the live environment exactly equal to the snapshot.
///
/// Captures first if nothing is held, which makes this a no-op. Keys that
/// are not valid Unicode are not part of any snapshot and are left alone.
/// Snapshot entries the platform rejects (empty key, `=` or NUL in the
/// key, NUL in the value) are skipped with a warning.
pub fn restore_original_env() {
    let original = saved();

    let mut removed = 0usize;
    for (key, _) in live::vars() {
        if !original.contains_key(&key) {
            live::remove(&key);
            removed += 1;
        }
    }

    let mut restored = 0usize;
    let mut skipped = 0usize;
    for (key, value) in original.iter() {
        if !live::is_settable(key, value) {
            tracing::warn!(key = %key.escape_debug(), "skipping snapshot entry the environment cannot hold");
            skipped += 1;
            continue;
        }
        if live::get(key).as_deref() != Some(value) {
            live::set(key, value);
            restored += 1;
        }
    }

    tracing::debug!(removed, restored, skipped, "restored original environment");
}
