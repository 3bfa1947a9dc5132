// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolver trait definition.
//!
//! [`VariableResolver`] is the primary interface of the crate: hand it the
//! variables a program needs and it either binds all of them or reports the
//! first one it could not resolve.

use crate::domain::{Resolution, Result, VariableSpec};

/// Resolves variable specifications against an environment and its fallbacks.
///
/// Implementations process `specs` strictly in order and stop at the first
/// failure; variables after the failing one are left untouched.
///
/// # Examples
///
/// ```rust
/// use envresolve::domain::{ConfigError, Resolution, Result, VariableResolver, VariableSpec};
///
/// struct RejectAll;
///
/// impl VariableResolver for RejectAll {
///     fn resolve(&mut self, specs: &[VariableSpec]) -> Result<Resolution> {
///         match specs.first() {
///             Some(spec) => Err(ConfigError::MissingRequiredValue {
///                 key: spec.key().to_string(),
///             }),
///             None => Ok(Resolution::default()),
///         }
///     }
/// }
///
/// let mut resolver = RejectAll;
/// assert!(resolver.resolve(&[]).unwrap().is_empty());
/// assert!(resolver.resolve(&[VariableSpec::new("ISSUER")]).is_err());
/// ```
pub trait VariableResolver {
    /// Resolves every specification in order.
    ///
    /// # Returns
    ///
    /// * `Ok(Resolution)` - Every variable holds a non-empty value in the environment
    /// * `Err(ConfigError)` - The first variable that failed validation or stayed empty
    fn resolve(&mut self, specs: &[VariableSpec]) -> Result<Resolution>;
}
