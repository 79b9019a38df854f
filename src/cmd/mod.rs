// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! Settings + trailing COMMAND --> cmd::run
//!   COMMAND given  -> which + spawn, forward exit code
//!   no COMMAND     -> print KEY=VALUE or JSON
//! ```

pub mod run;
