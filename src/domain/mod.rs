// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the variable specifications, resolved values and errors
//! that the rest of the crate passes around. It knows nothing about where
//! values come from.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod resolution;
pub mod service;
pub mod variable_spec;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use resolution::{Resolution, ResolvedVariable, ValueOrigin};
pub use service::VariableResolver;
pub use variable_spec::{Validator, VariableSpec};
