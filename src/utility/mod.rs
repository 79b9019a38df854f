// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   detect()          BOM sniffing --> Encoding + BOM length
//!   decode_to_utf8()  UTF-8 / UTF-16 LE / UTF-16 BE --> str (BOM stripped)
//! ```

pub mod encoding;
