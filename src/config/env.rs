//! Environment access
//!
//! The resolver never touches `std::env` directly so it can be driven from a map in tests.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Read-only view of named configuration values.
pub trait Environment {
    /// Raw value of `key`, or `None` when unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).and_then(|value| value.into_string().ok())
    }

    /// Value of `key`, falling back to `default` when unset, empty or not unicode.
    fn var_or(&self, key: &str, default: &str) -> String {
        match self.var(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    /// Path-valued `key`, kept byte for byte. Empty counts as unset.
    fn path_var(&self, key: &str) -> Option<PathBuf> {
        self.var_os(key).filter(|value| !value.is_empty()).map(PathBuf::from)
    }
}

/// The process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEnvironment;

impl Environment for OsEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MapEnvironment {
    vars: HashMap<String, OsString>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { vars }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
