// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup-time resolution of required environment variables.
//!
//! A program lists the variables it needs as [`VariableSpec`](domain::VariableSpec)s.
//! Each one is resolved by precedence:
//!
//! 1. the process environment, if it holds a non-empty value;
//! 2. otherwise a `key=value` file (`.env` by default), matching keys
//!    case-insensitively, last matching line wins;
//! 3. otherwise the specification's default.
//!
//! The winning value is bound into the environment, checked by the optional
//! validator, and must be non-empty. The first variable that fails stops the
//! run.
//!
//! # Architecture
//!
//! - **Domain Layer**: `VariableSpec`, `ConfigKey`, `ConfigValue`, `Resolution`, errors
//! - **Ports**: `Environment` (the table read and written) and `ConfigSource` (the fallback)
//! - **Adapters**: process and in-memory environments, the key=value file, CLI arguments
//! - **Service**: `EnvResolver` and the process-exiting `parse_environment`
//!
//! # Feature Flags
//!
//! - `cli`: `clap` arguments for choosing the file (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envresolve::prelude::*;
//!
//! let resolution = parse_environment(
//!     &[
//!         VariableSpec::new("CLIENT_ID").with_validator(validators::non_empty()),
//!         VariableSpec::new("CLIENT_SECRET")
//!             .with_validator(validators::min_len(8))
//!             .secret(),
//!         VariableSpec::new("ISSUER")
//!             .with_default("https://default-issuer.com")
//!             .with_validator(validators::has_prefix("https://")),
//!     ],
//!     ".env",
//! );
//!
//! for key in resolution.defaults_used() {
//!     println!("{} fell back to its default", key);
//! }
//! ```
//!
//! To handle failures instead of exiting, build an [`EnvResolver`](service::EnvResolver)
//! and call [`resolve`](domain::VariableResolver::resolve).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::variable_spec::validators;
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, Resolution, ResolvedVariable, Result, Validator,
        ValueOrigin, VariableResolver, VariableSpec,
    };
    pub use crate::ports::{ConfigSource, Environment};
    pub use crate::service::{exit_on_failure, parse_environment, EnvResolver, EnvResolverBuilder};

    #[cfg(feature = "cli")]
    pub use crate::adapters::EnvFileArgs;
    pub use crate::adapters::{InMemoryEnvironment, KeyValueFileAdapter, ProcessEnvironment};
}
