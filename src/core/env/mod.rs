// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! live: get/contains/set/remove/vars on the process environment
//! ```
//!
//! - **Case-insensitive keys on Windows**, case-sensitive elsewhere
//! - **Copy-on-write**: Clones share data until modified
//! - **UTF-8 internal**: non-Unicode entries are not represented

pub mod container;
pub mod live;
pub mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    live::vars().into_iter().collect()
}
