// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution reports.
//!
//! Resolving binds every variable into the environment. The report returned
//! alongside records where each value came from, so callers can tell a value
//! that was set by the operator from one that fell back to a default.

use crate::domain::{ConfigKey, ConfigValue};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// The precedence tier that produced a resolved value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueOrigin {
    /// The variable was already set in the environment.
    Environment,
    /// The variable was read from the key=value file.
    File,
    /// The variable fell back to its specification's default.
    Default,
}

impl fmt::Display for ValueOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueOrigin::Environment => "environment",
            ValueOrigin::File => "file",
            ValueOrigin::Default => "default",
        };
        f.write_str(name)
    }
}

/// One successfully resolved variable.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    key: ConfigKey,
    value: ConfigValue,
    origin: ValueOrigin,
    secret: bool,
}

impl ResolvedVariable {
    /// Creates a resolved variable record.
    pub fn new(key: ConfigKey, value: ConfigValue, origin: ValueOrigin, secret: bool) -> Self {
        Self {
            key,
            value,
            origin,
            secret,
        }
    }

    /// Returns the variable key.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Returns the resolved value.
    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    /// Returns the tier the value came from.
    pub fn origin(&self) -> ValueOrigin {
        self.origin
    }

    /// Returns `true` if the value fell back to the default.
    pub fn used_default(&self) -> bool {
        self.origin == ValueOrigin::Default
    }

    /// Returns `true` if the value must not appear in diagnostics.
    pub fn is_secret(&self) -> bool {
        self.secret
    }

    /// Returns the value as it may be shown in logs.
    pub fn display_value(&self) -> &str {
        if self.secret {
            "<redacted>"
        } else {
            self.value.as_str()
        }
    }
}

impl fmt::Debug for ResolvedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedVariable")
            .field("key", &self.key)
            .field("value", &self.display_value())
            .field("origin", &self.origin)
            .finish()
    }
}

impl Serialize for ResolvedVariable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolvedVariable", 3)?;
        state.serialize_field("key", self.key.as_str())?;
        state.serialize_field("value", self.display_value())?;
        state.serialize_field("origin", &self.origin)?;
        state.end()
    }
}

/// The ordered outcome of a resolution run.
///
/// Variables appear in the order their specifications were given.
///
/// # Examples
///
/// ```
/// use envresolve::domain::{ConfigKey, ConfigValue, Resolution, ResolvedVariable, ValueOrigin};
///
/// let resolution = Resolution::new(vec![ResolvedVariable::new(
///     ConfigKey::from("ISSUER"),
///     ConfigValue::from("https://default-issuer.com"),
///     ValueOrigin::Default,
///     false,
/// )]);
///
/// assert_eq!(resolution.len(), 1);
/// assert_eq!(resolution.value("ISSUER"), Some("https://default-issuer.com"));
/// assert_eq!(resolution.defaults_used().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Resolution {
    variables: Vec<ResolvedVariable>,
}

impl Resolution {
    /// Creates a report from resolved variables in specification order.
    pub fn new(variables: Vec<ResolvedVariable>) -> Self {
        Self { variables }
    }

    /// Looks up a resolved variable by its exact key.
    pub fn get(&self, key: &str) -> Option<&ResolvedVariable> {
        self.variables.iter().find(|v| v.key.as_str() == key)
    }

    /// Looks up a resolved value by its exact key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.value.as_str())
    }

    /// Iterates over resolved variables in specification order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedVariable> {
        self.variables.iter()
    }

    /// Returns the keys that fell back to their defaults.
    pub fn defaults_used(&self) -> impl Iterator<Item = &ConfigKey> {
        self.variables
            .iter()
            .filter(|v| v.used_default())
            .map(|v| &v.key)
    }

    /// Returns the number of resolved variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Consumes the report, returning the resolved variables.
    pub fn into_vec(self) -> Vec<ResolvedVariable> {
        self.variables
    }
}

impl<'a> IntoIterator for &'a Resolution {
    type Item = &'a ResolvedVariable;
    type IntoIter = std::slice::Iter<'a, ResolvedVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl IntoIterator for Resolution {
    type Item = ResolvedVariable;
    type IntoIter = std::vec::IntoIter<ResolvedVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.into_iter()
    }
}
