// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable specifications.
//!
//! A [`VariableSpec`] tells the resolver which variable to resolve, what to
//! fall back to when no source has it, and how to check the final value.

use crate::domain::config_key::ConfigKey;
use std::fmt;
use std::sync::Arc;

/// A predicate over a resolved value.
///
/// Any `Fn(&str) -> bool + Send + Sync` closure is a validator. Implement the
/// trait directly when the check carries state worth naming.
///
/// # Examples
///
/// ```
/// use envresolve::domain::Validator;
///
/// struct AllowedHosts(Vec<String>);
///
/// impl Validator for AllowedHosts {
///     fn validate(&self, value: &str) -> bool {
///         self.0.iter().any(|h| h == value)
///     }
/// }
///
/// let hosts = AllowedHosts(vec!["localhost".to_string()]);
/// assert!(hosts.validate("localhost"));
/// assert!(!hosts.validate("example.com"));
/// ```
pub trait Validator: Send + Sync {
    /// Returns `true` if `value` is acceptable.
    fn validate(&self, value: &str) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: &str) -> bool {
        self(value)
    }
}

/// Describes one environment variable to resolve.
///
/// # Examples
///
/// ```
/// use envresolve::domain::VariableSpec;
/// use envresolve::domain::variable_spec::validators;
///
/// let spec = VariableSpec::new("ISSUER")
///     .with_default("https://default-issuer.com")
///     .with_validator(validators::has_prefix("https://"));
///
/// assert_eq!(spec.key().as_str(), "ISSUER");
/// assert_eq!(spec.default_value(), Some("https://default-issuer.com"));
/// assert!(spec.validator().is_some());
/// ```
#[derive(Clone)]
pub struct VariableSpec {
    key: ConfigKey,
    default_value: Option<String>,
    validator: Option<Arc<dyn Validator>>,
    secret: bool,
}

impl VariableSpec {
    /// Creates a required variable with no default and no validator.
    pub fn new(key: impl Into<ConfigKey>) -> Self {
        Self {
            key: key.into(),
            default_value: None,
            validator: None,
            secret: false,
        }
    }

    /// Sets the value bound when neither the environment nor the file has one.
    ///
    /// An empty default means "no default".
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        self.default_value = if default_value.is_empty() {
            None
        } else {
            Some(default_value)
        };
        self
    }

    /// Attaches a closure validator.
    pub fn with_validator<F>(self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.with_custom_validator(validator)
    }

    /// Attaches any [`Validator`] implementation.
    pub fn with_custom_validator<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Keeps the value out of diagnostics and error messages.
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Returns the variable key.
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Returns the default value, if one was set.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Returns the validator, if one was set.
    pub fn validator(&self) -> Option<&dyn Validator> {
        self.validator.as_deref()
    }

    /// Returns `true` if the value must not appear in diagnostics.
    pub fn is_secret(&self) -> bool {
        self.secret
    }
}

impl fmt::Debug for VariableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default_value = match (&self.default_value, self.secret) {
            (Some(_), true) => Some("<redacted>"),
            (value, _) => value.as_deref(),
        };
        f.debug_struct("VariableSpec")
            .field("key", &self.key)
            .field("default_value", &default_value)
            .field("has_validator", &self.validator.is_some())
            .field("secret", &self.secret)
            .finish()
    }
}

/// Ready-made validators for common checks.
///
/// Combine them by writing a closure:
///
/// ```
/// use envresolve::domain::Validator;
/// use envresolve::domain::variable_spec::validators;
///
/// let https = validators::has_prefix("https://");
/// let long = validators::min_len(12);
/// let both = move |v: &str| https(v) && long(v);
///
/// assert!(both.validate("https://a.example"));
/// assert!(!both.validate("https://a"));
/// ```
pub mod validators {
    use std::str::FromStr;

    /// Accepts any non-empty value.
    pub fn non_empty() -> impl Fn(&str) -> bool + Send + Sync + 'static {
        |value: &str| !value.is_empty()
    }

    /// Accepts values with at least `min` characters.
    pub fn min_len(min: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
        move |value: &str| value.chars().count() >= min
    }

    /// Accepts values starting with `prefix`.
    pub fn has_prefix(prefix: impl Into<String>) -> impl Fn(&str) -> bool + Send + Sync + 'static {
        let prefix = prefix.into();
        move |value: &str| value.starts_with(prefix.as_str())
    }

    /// Accepts values equal to one of `allowed`.
    pub fn one_of<I, S>(allowed: I) -> impl Fn(&str) -> bool + Send + Sync + 'static
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        move |value: &str| allowed.iter().any(|a| a == value)
    }

    /// Accepts values that parse as `T`.
    pub fn parses_as<T: FromStr + 'static>() -> impl Fn(&str) -> bool + Send + Sync + 'static {
        |value: &str| value.parse::<T>().is_ok()
    }
}
