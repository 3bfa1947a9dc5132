// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the resolver implementation.
//!
//! This module contains the concrete implementation of the `VariableResolver`
//! trait and the process-exiting entry points built on it.

pub mod resolver;

// Re-export commonly used types
pub use resolver::{exit_on_failure, parse_environment, EnvResolver, EnvResolverBuilder};
