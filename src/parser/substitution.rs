// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable references inside values.
//!
//! ```text
//! "$NAME" / "${NAME}"  in bare and double-quoted values
//!        |
//!        v
//!   Resolver::resolve(name, earlier value in file)
//!     EnvironmentFirst: lookup(name) -> file -> ""
//!     FileFirst:        file -> lookup(name) -> ""
//! ```
//!
//! `\$` escapes a literal dollar. A `$` that does not start a valid
//! reference (e.g. `$1`, `${unclosed`) is kept as-is.

use std::collections::BTreeMap;

use crate::core::env::container::Env;
use crate::core::env::live;

/// Where a referenced variable is looked up outside the file being parsed.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Resolves nothing; references only see earlier keys of the same file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl Lookup for NoLookup {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Resolves against the live process environment at parse time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveLookup;

impl Lookup for LiveLookup {
    fn lookup(&self, key: &str) -> Option<String> {
        live::get(key)
    }
}

impl Lookup for Env {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Which side wins when a referenced name is defined both earlier in the
/// file and in the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// The lookup wins. Matches non-destructive loading, where an already
    /// set variable keeps its value.
    #[default]
    EnvironmentFirst,
    /// The file wins. Matches overloading.
    FileFirst,
}

pub(super) struct Resolver<'a> {
    lookup: &'a dyn Lookup,
    precedence: Precedence,
}

impl<'a> Resolver<'a> {
    pub(super) fn new(lookup: &'a dyn Lookup, precedence: Precedence) -> Self {
        Self { lookup, precedence }
    }

    /// Resolves `name`; unknown names expand to the empty string.
    pub(super) fn resolve(&self, name: &str, from_file: Option<&str>) -> String {
        let resolved = match self.precedence {
            Precedence::EnvironmentFirst => self
                .lookup
                .lookup(name)
                .or_else(|| from_file.map(str::to_owned)),
            Precedence::FileFirst => from_file
                .map(str::to_owned)
                .or_else(|| self.lookup.lookup(name)),
        };
        resolved.unwrap_or_default()
    }
}

/// First character of a referenced name.
pub(super) const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(super) const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
