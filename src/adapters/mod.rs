// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! Each adapter implements one of the traits in the ports layer: the
//! environment tables implement `Environment`, the key=value file implements
//! `ConfigSource`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod env_var;
pub mod key_value_file;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::EnvFileArgs;
pub use env_var::{InMemoryEnvironment, ProcessEnvironment};
pub use key_value_file::{KeyValueFileAdapter, DEFAULT_ENV_FILE};
