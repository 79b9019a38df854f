// dotenv-rs: `.env` Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered result of a load call.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::parser::EnvPair;

/// Everything one load call processed, in file order then in-file order.
///
/// Inserting a key that is already present replaces its value and keeps
/// its original position, so a key defined by several files reports the
/// last file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    entries: Vec<EnvPair>,
    /// Position of each key in `entries`.
    index: HashMap<String, usize>,
    /// Keys left alone because the environment already defined them.
    preserved: Vec<String>,
    preserved_set: HashSet<String>,
    loaded_files: Vec<PathBuf>,
    missing_files: Vec<PathBuf>,
}

impl LoadResult {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            preserved: Vec::new(),
            preserved_set: HashSet::new(),
            loaded_files: Vec::new(),
            missing_files: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].value = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push(EnvPair { key, value });
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.key.as_str())
    }

    #[must_use]
    pub fn pairs(&self) -> &[EnvPair] {
        &self.entries
    }

    /// Keys whose existing environment value was kept.
    #[must_use]
    pub fn preserved(&self) -> &[String] {
        &self.preserved
    }

    /// Files that were read and applied, in order.
    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    /// Files skipped because they did not exist.
    #[must_use]
    pub fn missing_files(&self) -> &[PathBuf] {
        &self.missing_files
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    pub(crate) fn mark_preserved(&mut self, key: &str) {
        if self.preserved_set.insert(key.to_owned()) {
            self.preserved.push(key.to_owned());
        }
    }

    pub(crate) fn record_loaded(&mut self, path: &Path) {
        self.loaded_files.push(path.to_path_buf());
    }

    pub(crate) fn record_missing(&mut self, path: &Path) {
        self.missing_files.push(path.to_path_buf());
    }

    /// Folds a later result into this one.
    pub fn merge(&mut self, other: Self) {
        for EnvPair { key, value } in other.entries {
            self.insert(key, value);
        }
        for key in other.preserved {
            self.mark_preserved(&key);
        }
        self.loaded_files.extend(other.loaded_files);
        self.missing_files.extend(other.missing_files);
    }
}

impl<K, V> FromIterator<(K, V)> for LoadResult
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut result = Self::new();
        for (key, value) in iter {
            result.insert(key, value);
        }
        result
    }
}

/// Serializes as an ordered `{ "KEY": "VALUE" }` map.
impl Serialize for LoadResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
