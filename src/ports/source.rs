// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback value source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port the resolver consults
//! when the environment has no value for a variable. The shipped implementation
//! reads a `key=value` file, but anything that can answer "what is the value of
//! this key" can stand in for it.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A source of fallback values consulted after the environment.
///
/// # Availability
///
/// A source may be absent (a file that does not exist, for instance). Absence
/// is never an error: `is_available` reports it so the resolver can say so,
/// and `lookup` on an absent source returns `Ok(None)`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Examples
///
/// ```rust
/// use envresolve::ports::ConfigSource;
/// use envresolve::domain::{ConfigKey, ConfigValue, Result};
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn is_available(&self) -> bool {
///         true
///     }
///
///     fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok(key
///             .matches_ignore_case("region")
///             .then(|| ConfigValue::from("eu-west-1")))
///     }
/// }
///
/// let source = Fixed;
/// assert_eq!(
///     source.lookup(&ConfigKey::from("REGION")).unwrap(),
///     Some(ConfigValue::from("eu-west-1"))
/// );
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source, used in diagnostics.
    fn name(&self) -> &str;

    /// Describes where the source reads from, used in diagnostics.
    ///
    /// Defaults to the source name.
    fn location(&self) -> String {
        self.name().to_string()
    }

    /// Returns `true` if the source currently exists.
    fn is_available(&self) -> bool;

    /// Looks up the value for `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The source holds a value for the key
    /// * `Ok(None)` - The source has no value, or is unavailable
    /// * `Err(ConfigError)` - The source failed in a way worth reporting; the
    ///   resolver logs it and carries on as if there were no value
    fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;
}
