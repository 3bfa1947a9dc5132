// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment store trait definition.
//!
//! The resolver reads its primary values from, and writes its results to, an
//! [`Environment`]. In production that is the process environment; tests and
//! embedders can swap in an in-memory table.

use crate::domain::Result;

/// A per-key read/write view of an environment table.
///
/// Keys are matched exactly (case-sensitively). An empty value is treated the
/// same as an unset one by everything in this crate.
///
/// # Examples
///
/// ```rust
/// use envresolve::ports::Environment;
/// use envresolve::domain::Result;
/// use std::collections::HashMap;
///
/// #[derive(Default)]
/// struct MapEnv(HashMap<String, String>);
///
/// impl Environment for MapEnv {
///     fn get(&self, key: &str) -> Option<String> {
///         self.0.get(key).cloned()
///     }
///
///     fn set(&mut self, key: &str, value: &str) -> Result<()> {
///         self.0.insert(key.to_string(), value.to_string());
///         Ok(())
///     }
/// }
///
/// let mut env = MapEnv::default();
/// env.set("EMPTY", "").unwrap();
/// assert_eq!(env.get("EMPTY"), Some(String::new()));
/// assert_eq!(env.get_non_empty("EMPTY"), None);
/// ```
pub trait Environment: Send + Sync {
    /// Returns the value bound to `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Binds `value` to `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot hold the pair.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns the value bound to `key` unless it is missing or empty.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}
