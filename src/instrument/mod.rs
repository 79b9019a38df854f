// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Observer hook around each file load.
//!
//! ```text
//! Loader, per existing file
//!   instrument("dotenv.load" | "dotenv.overload", { env: &source }, load)
//!        |
//!        v
//!   registered Instrumenter  (or NoopInstrumenter: just calls load)
//!        |
//!        v
//!   its return value is the file's result
//! ```
//!
//! The hook is process-wide. It is never called for a file that does not
//! exist.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::DotenvResult;
use crate::loader::LoadResult;
use crate::source::EnvironmentSource;

/// Event name for non-destructive loads (`load`, `load_strict`).
pub const LOAD_EVENT: &str = "dotenv.load";

/// Event name for destructive loads (`overload`).
pub const OVERLOAD_EVENT: &str = "dotenv.overload";

/// What the hook gets to see about the file being loaded.
#[derive(Debug, Clone, Copy)]
pub struct InstrumentationPayload<'a> {
    pub env: &'a EnvironmentSource,
}

/// Wraps the loading of a single env file.
///
/// Implementations must call `load` to apply the file; whatever they
/// return is what the loader merges into its result.
pub trait Instrumenter: Send + Sync {
    /// # Errors
    ///
    /// Should return the error produced by `load`, if any.
    fn instrument(
        &self,
        name: &str,
        payload: &InstrumentationPayload<'_>,
        load: &mut dyn FnMut() -> DotenvResult<LoadResult>,
    ) -> DotenvResult<LoadResult>;
}

/// Pass-through used when nothing is registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstrumenter;

impl Instrumenter for NoopInstrumenter {
    fn instrument(
        &self,
        _name: &str,
        _payload: &InstrumentationPayload<'_>,
        load: &mut dyn FnMut() -> DotenvResult<LoadResult>,
    ) -> DotenvResult<LoadResult> {
        load()
    }
}

/// Emits a `tracing` span per file and logs how many keys it declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInstrumenter;

impl Instrumenter for TracingInstrumenter {
    fn instrument(
        &self,
        name: &str,
        payload: &InstrumentationPayload<'_>,
        load: &mut dyn FnMut() -> DotenvResult<LoadResult>,
    ) -> DotenvResult<LoadResult> {
        let span = tracing::info_span!(
            "env_file",
            event = name,
            path = %payload.env.path().display()
        );
        let _enter = span.enter();

        let result = load();
        match &result {
            Ok(loaded) => tracing::info!(
                keys = loaded.len(),
                preserved = loaded.preserved().len(),
                "loaded env file"
            ),
            Err(e) => tracing::warn!(error = %e, "failed to load env file"),
        }
        result
    }
}

static INSTRUMENTER: RwLock<Option<Arc<dyn Instrumenter>>> = RwLock::new(None);

/// Registers the process-wide instrumenter, replacing any previous one.
pub fn set_instrumenter(instrumenter: Arc<dyn Instrumenter>) {
    *INSTRUMENTER.write().unwrap_or_else(PoisonError::into_inner) = Some(instrumenter);
}

/// Removes the process-wide instrumenter.
pub fn clear_instrumenter() {
    *INSTRUMENTER.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns the registered instrumenter, if any.
#[must_use]
pub fn instrumenter() -> Option<Arc<dyn Instrumenter>> {
    INSTRUMENTER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Runs `load` through the registered instrumenter.
///
/// The lock is released before the hook runs, so a hook may itself
/// register or clear instrumenters.
pub(crate) fn instrument(
    name: &str,
    payload: &InstrumentationPayload<'_>,
    load: &mut dyn FnMut() -> DotenvResult<LoadResult>,
) -> DotenvResult<LoadResult> {
    match instrumenter() {
        Some(hook) => hook.instrument(name, payload, load),
        None => NoopInstrumenter.instrument(name, payload, load),
    }
}

#[cfg(test)]
mod tests;
