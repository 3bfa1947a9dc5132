// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment table adapters.
//!
//! [`ProcessEnvironment`] reads and writes the real process environment.
//! [`InMemoryEnvironment`] keeps a private table, which is what tests and
//! embedders that must not touch global state want.

use crate::domain::{ConfigError, Result};
use crate::ports::Environment;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Serializes access to the process environment from this crate.
static PROCESS_ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Environment adapter backed by the process environment.
///
/// Reads and writes go through a process-wide lock, so two resolvers running on
/// different threads never interleave a write with a read. Values that are not
/// valid Unicode are decoded lossily, so they still count as set and are never
/// replaced by a file or default value.
///
/// # Examples
///
/// ```rust
/// use envresolve::adapters::ProcessEnvironment;
/// use envresolve::ports::Environment;
///
/// let env = ProcessEnvironment::new();
/// assert_eq!(env.get("ENVRESOLVE_DOC_SURELY_UNSET"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a handle to the process environment.
    pub fn new() -> Self {
        ProcessEnvironment
    }
}

impl Environment for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = PROCESS_ENV_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // std::env::set_var panics on these instead of returning an error
        if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
            return Err(ConfigError::SourceError {
                source_name: "env".to_string(),
                message: format!("Cannot bind {} in the process environment", key),
                source: None,
            });
        }

        let _guard = PROCESS_ENV_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        env::set_var(key, value);
        tracing::debug!("Bound {} in the process environment", key);
        Ok(())
    }
}

/// Environment adapter backed by a private in-memory table.
///
/// Clones share the same table, so a test can hand one clone to a resolver and
/// inspect the bindings through another.
///
/// # Examples
///
/// ```rust
/// use envresolve::adapters::InMemoryEnvironment;
/// use envresolve::ports::Environment;
///
/// let env = InMemoryEnvironment::from_pairs([("CLIENT_ID", "abc123")]);
/// let mut handle = env.clone();
/// handle.set("ISSUER", "https://default-issuer.com").unwrap();
///
/// assert_eq!(env.get("CLIENT_ID").as_deref(), Some("abc123"));
/// assert_eq!(env.get("ISSUER").as_deref(), Some("https://default-issuer.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    vars: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryEnvironment {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table pre-populated with `pairs`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Returns a copy of every binding.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.vars.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Environment for InMemoryEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn track(&mut self, key: &str) {
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_process_env_set_then_get() {
        let mut guard = EnvGuard::new();
        guard.track("ENVRESOLVE_UNIT_SET_GET");

        let mut adapter = ProcessEnvironment::new();
        adapter.set("ENVRESOLVE_UNIT_SET_GET", "value").unwrap();

        assert_eq!(
            adapter.get("ENVRESOLVE_UNIT_SET_GET").as_deref(),
            Some("value")
        );
        assert_eq!(
            env::var("ENVRESOLVE_UNIT_SET_GET").as_deref(),
            Ok("value")
        );
    }

    #[test]
    fn test_process_env_missing_key() {
        let adapter = ProcessEnvironment::new();
        assert_eq!(adapter.get("ENVRESOLVE_UNIT_NONEXISTENT_12345"), None);
    }

    #[test]
    fn test_process_env_is_case_sensitive() {
        let mut guard = EnvGuard::new();
        guard.track("ENVRESOLVE_UNIT_CASE");

        let mut adapter = ProcessEnvironment::new();
        adapter.set("ENVRESOLVE_UNIT_CASE", "upper").unwrap();

        assert_eq!(adapter.get("envresolve_unit_case"), None);
    }

    #[test]
    fn test_process_env_rejects_unbindable_pairs() {
        let mut adapter = ProcessEnvironment::new();
        assert!(adapter.set("", "value").is_err());
        assert!(adapter.set("A=B", "value").is_err());
        assert!(adapter.set("ENVRESOLVE_UNIT_NUL", "a\0b").is_err());
        assert_eq!(adapter.get("ENVRESOLVE_UNIT_NUL"), None);
    }

    #[test]
    fn test_process_env_get_non_empty() {
        let mut guard = EnvGuard::new();
        guard.track("ENVRESOLVE_UNIT_EMPTY");

        let mut adapter = ProcessEnvironment::new();
        adapter.set("ENVRESOLVE_UNIT_EMPTY", "").unwrap();

        assert_eq!(adapter.get("ENVRESOLVE_UNIT_EMPTY"), Some(String::new()));
        assert_eq!(adapter.get_non_empty("ENVRESOLVE_UNIT_EMPTY"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_non_unicode_value_reads_as_set() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut guard = EnvGuard::new();
        guard.track("ENVRESOLVE_UNIT_NON_UNICODE");
        env::set_var(
            "ENVRESOLVE_UNIT_NON_UNICODE",
            OsStr::from_bytes(b"op\xffval"),
        );

        let adapter = ProcessEnvironment::new();
        assert_eq!(
            adapter.get_non_empty("ENVRESOLVE_UNIT_NON_UNICODE").as_deref(),
            Some("op\u{FFFD}val")
        );
    }

    #[test]
    fn test_in_memory_env_clones_share_table() {
        let env = InMemoryEnvironment::new();
        let mut handle = env.clone();
        assert!(env.is_empty());

        handle.set("KEY", "value").unwrap();

        assert_eq!(env.get("KEY").as_deref(), Some("value"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_in_memory_env_from_pairs_and_snapshot() {
        let env = InMemoryEnvironment::from_pairs([("A", "1"), ("B", "")]);
        let snapshot = env.snapshot();

        assert_eq!(snapshot.get("A").map(String::as_str), Some("1"));
        assert_eq!(env.get_non_empty("B"), None);
        assert_eq!(env.get("C"), None);
    }
}
