// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the resolver and the outside world: the
//! environment table it reads and writes, and the fallback source it consults.
//! Adapters implement them.

pub mod environment;
pub mod source;

// Re-export commonly used types
pub use environment::Environment;
pub use source::ConfigSource;
