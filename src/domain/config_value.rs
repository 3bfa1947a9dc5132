// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved variable values.
//!
//! The resolver deals only in strings, because that is what the environment
//! holds. [`ConfigValue`] wraps a resolved string and offers typed accessors so
//! callers can turn `PORT=8080` into a `u16` once resolution has succeeded.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A resolved environment value.
///
/// # Examples
///
/// ```
/// use envresolve::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("8080");
/// assert_eq!(value.as_str(), "8080");
/// assert_eq!(value.as_u16("PORT").unwrap(), 8080);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the value is empty, which the resolver treats as unset.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the value to a `u16`, the usual type of a port number.
    pub fn as_u16(&self, key: &str) -> Result<u16> {
        self.0
            .parse::<u16>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Parses the value into any type implementing `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envresolve::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let addr: IpAddr = value.parse("BIND_ADDR").unwrap();
    /// assert!(addr.is_loopback());
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
