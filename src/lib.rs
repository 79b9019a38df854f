// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd (load + exec)
//!                |                     |
//!                v                     |
//!         config (Settings)            |
//!                                      v
//!              ,---------------------------,
//!              |          loader           |
//!              |  paths, modes, LoadResult |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              source    instrument  snapshot
//!           file + apply    hook     original env
//!                 |
//!                 v
//!              parser
//!         quotes, escapes, ${VAR}
//!
//!   +-----------------------------------------+
//!   |  core   env (live table, Env snapshot)  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! // Values already in the environment win; a missing .env is fine.
//! let loaded = dotenv_rs::load([".env", ".env.local"])?;
//! for (key, value) in loaded.iter() {
//!     println!("{key}={value}");
//! }
//!
//! // Undo everything loaded so far.
//! dotenv_rs::restore_original_env();
//! # Ok::<(), dotenv_rs::DotenvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod instrument;
pub mod loader;
pub mod logging;
pub mod parser;
pub mod snapshot;
pub mod source;
pub mod utility;

pub use crate::core::env::container::Env;
pub use error::{DotenvError, DotenvResult};
pub use instrument::{Instrumenter, clear_instrumenter, set_instrumenter};
pub use loader::{LoadMode, LoadResult, Loader, dotenv, load, load_strict, overload};
pub use snapshot::{
    ensure_original_env_saved, original_env, restore_original_env, set_original_env,
};
