// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core environment plumbing.
//!
//! ```text
//!        core
//!         |
//!        env
//!      /     \
//!    Env     live
//!   (COW)   (process env I/O)
//! ```

pub mod env;
