//! The raw key/value environment the validator works on.
//!
//! Responsibilities:
//! - Hold a snapshot of ambient process variables and/or env file entries.
//! - Merge env file entries underneath ambient variables.
//! - Provide lookups that filter empty and whitespace-only values.
//!
//! Does NOT handle:
//! - Reading env files from disk (see `file.rs`).
//! - Interpreting or validating values (see `validate.rs`).
//!
//! Invariants:
//! - Keys are case-sensitive.
//! - On merge, a key already present in the ambient environment is never overwritten,
//!   even if its value is empty.
//! - `Debug` output lists keys only; values may be secrets.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

/// A string-to-string mapping of environment variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawEnvironment {
    vars: BTreeMap<String, String>,
}

impl RawEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Read a variable, returning None if unset, empty, or whitespace-only.
    /// Returns the trimmed value (leading/trailing whitespace removed) if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
    }

    /// Read a variable exactly as stored. A present but empty value is `Some("")`.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Debug for RawEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawEnvironment")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for RawEnvironment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for RawEnvironment {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

/// Combine ambient variables with env file entries.
///
/// Ambient values take precedence; file entries only fill keys the ambient
/// environment does not define.
pub fn merge_environment(ambient: RawEnvironment, file_values: RawEnvironment) -> RawEnvironment {
    let mut merged = ambient;
    for (key, value) in file_values {
        if let Entry::Vacant(slot) = merged.vars.entry(key) {
            slot.insert(value);
        }
    }
    merged
}
