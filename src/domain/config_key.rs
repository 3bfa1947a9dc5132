// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable key newtype.
//!
//! A [`ConfigKey`] names one environment variable. The environment is looked up
//! with the exact key, while file sources compare keys case-insensitively; both
//! comparisons live here so adapters don't each reinvent them.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;

/// A type-safe wrapper for environment variable names.
///
/// # Examples
///
/// ```
/// use envresolve::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("CLIENT_SECRET");
///
/// assert_eq!(key.as_str(), "CLIENT_SECRET");
/// assert!(key.matches_ignore_case("client_secret"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    ///
    /// The key is not checked here; use [`ConfigKey::validate`] before handing
    /// it to a source.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the key is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that the key can name a variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] for an empty key or one containing
    /// `=` or NUL, which no process environment can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use envresolve::domain::config_key::ConfigKey;
    ///
    /// assert!(ConfigKey::from("ISSUER").validate().is_ok());
    /// assert!(ConfigKey::from("").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() || self.0.contains(['=', '\0']) {
            return Err(ConfigError::InvalidKey {
                key: self.0.clone(),
            });
        }
        Ok(())
    }

    /// Compares this key against `other` ignoring case.
    ///
    /// Uses Unicode lowercase folding, so `"straße"` and `"STRAßE"` match but
    /// no locale-specific rules apply.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        if self.0.len() == other.len() && self.0.eq_ignore_ascii_case(other) {
            return true;
        }
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
