// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for environment resolution.
//!
//! Every failure the resolver can report is a variant of [`ConfigError`]. The
//! resolver itself never terminates the process; callers that want the classic
//! "exit on first bad variable" behavior hand the error to
//! [`exit_on_failure`](crate::service::exit_on_failure).

use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for resolution operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envresolve::domain::errors::ConfigError;
///
/// let error = ConfigError::MissingRequiredValue {
///     key: "CLIENT_ID".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Could not resolve a CLIENT_ID environment variable"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The validator attached to a variable rejected its resolved value.
    #[error("Validation failed for {key} with value '{value}'")]
    ValidationFailed {
        /// The variable that failed validation
        key: String,
        /// The rejected value, or `<redacted>` for secret variables
        value: String,
    },

    /// No source produced a non-empty value for a variable.
    #[error("Could not resolve a {key} environment variable")]
    MissingRequiredValue {
        /// The variable that stayed empty
        key: String,
    },

    /// A variable specification carried an unusable key.
    #[error("Invalid variable key '{key}': keys must be non-empty and contain no '=' or NUL")]
    InvalidKey {
        /// The offending key
        key: String,
    },

    /// Failed to convert a resolved value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value source could not be set up.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Returns the variable key this error is about, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use envresolve::domain::errors::ConfigError;
    ///
    /// let error = ConfigError::InvalidKey { key: String::new() };
    /// assert_eq!(error.key(), Some(""));
    /// ```
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::ValidationFailed { key, .. }
            | ConfigError::MissingRequiredValue { key }
            | ConfigError::InvalidKey { key }
            | ConfigError::TypeConversionError { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
