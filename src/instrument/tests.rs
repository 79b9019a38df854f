// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::{Arc, Mutex};

use serial_test::serial;

use super::{
    InstrumentationPayload, Instrumenter, NoopInstrumenter, TracingInstrumenter,
    clear_instrumenter, instrument, instrumenter, set_instrumenter,
};
use crate::error::DotenvResult;
use crate::loader::LoadResult;
use crate::parser::Precedence;
use crate::source::EnvironmentSource;

/// Records every call and replaces the result with a fixed one.
#[derive(Default)]
struct Replacing {
    calls: Mutex<Vec<(String, usize)>>,
}

impl Instrumenter for Replacing {
    fn instrument(
        &self,
        name: &str,
        payload: &InstrumentationPayload<'_>,
        load: &mut dyn FnMut() -> DotenvResult<LoadResult>,
    ) -> DotenvResult<LoadResult> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), payload.env.len()));
        load()?;
        Ok([("REPLACED", "yes")].into_iter().collect())
    }
}

fn source() -> EnvironmentSource {
    EnvironmentSource::from_bytes("hook.env", b"A=1\nB=2\n".to_vec(), Precedence::default())
        .unwrap()
}

fn counting_load(count: &mut usize) -> impl FnMut() -> DotenvResult<LoadResult> + '_ {
    move || {
        *count += 1;
        Ok([("A", "1")].into_iter().collect())
    }
}

#[test]
fn test_noop_passes_result_through() {
    let source = source();
    let mut calls = 0;
    let result = NoopInstrumenter
        .instrument(
            "dotenv.load",
            &InstrumentationPayload { env: &source },
            &mut counting_load(&mut calls),
        )
        .unwrap();
    assert_eq!(calls, 1);
    assert_eq!(result.get("A"), Some("1"));
}

#[test]
fn test_tracing_instrumenter_passes_result_through() {
    let source = source();
    let mut calls = 0;
    let result = TracingInstrumenter
        .instrument(
            "dotenv.overload",
            &InstrumentationPayload { env: &source },
            &mut counting_load(&mut calls),
        )
        .unwrap();
    assert_eq!(calls, 1);
    assert_eq!(result.len(), 1);
}

#[test]
#[serial]
fn test_registered_instrumenter_wraps_and_replaces() {
    let hook = Arc::new(Replacing::default());
    set_instrumenter(hook.clone());

    let source = source();
    let mut calls = 0;
    let result = instrument(
        "dotenv.load",
        &InstrumentationPayload { env: &source },
        &mut counting_load(&mut calls),
    );
    clear_instrumenter();

    let result = result.unwrap();
    assert_eq!(calls, 1);
    assert_eq!(result.get("REPLACED"), Some("yes"));
    assert!(!result.contains_key("A"));
    assert_eq!(
        *hook.calls.lock().unwrap(),
        vec![("dotenv.load".to_string(), 2)]
    );
}

#[test]
#[serial]
fn test_clear_falls_back_to_noop() {
    set_instrumenter(Arc::new(Replacing::default()));
    assert!(instrumenter().is_some());
    clear_instrumenter();
    assert!(instrumenter().is_none());

    let source = source();
    let mut calls = 0;
    let result = instrument(
        "dotenv.load",
        &InstrumentationPayload { env: &source },
        &mut counting_load(&mut calls),
    )
    .unwrap();
    assert_eq!(calls, 1);
    assert_eq!(result.get("A"), Some("1"));
}
