// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default resolver implementation.
//!
//! [`EnvResolver`] resolves each variable by precedence: the environment first,
//! then the key=value file, then the specification's default. Whatever wins is
//! bound back into the environment, validated, and checked for presence.

use crate::adapters::{KeyValueFileAdapter, ProcessEnvironment};
use crate::domain::{
    ConfigError, ConfigValue, Resolution, ResolvedVariable, Result, ValueOrigin, VariableResolver,
    VariableSpec,
};
use crate::ports::{ConfigSource, Environment};
use std::path::Path;

/// Resolves variable specifications against an environment and a fallback source.
///
/// # Examples
///
/// ```rust
/// use envresolve::adapters::InMemoryEnvironment;
/// use envresolve::domain::{ValueOrigin, VariableResolver, VariableSpec};
/// use envresolve::service::EnvResolver;
///
/// # fn main() -> envresolve::domain::Result<()> {
/// let env = InMemoryEnvironment::from_pairs([("CLIENT_ID", "abc123")]);
/// let mut resolver = EnvResolver::builder()
///     .with_environment(env.clone())
///     .with_env_file("/nonexistent/.env")
///     .build();
///
/// let resolution = resolver.resolve(&[
///     VariableSpec::new("CLIENT_ID").with_default("default_id"),
///     VariableSpec::new("LOG_LEVEL").with_default("info"),
/// ])?;
///
/// assert_eq!(resolution.value("CLIENT_ID"), Some("abc123"));
/// assert_eq!(resolution.get("LOG_LEVEL").unwrap().origin(), ValueOrigin::Default);
/// # Ok(())
/// # }
/// ```
pub struct EnvResolver {
    /// Table read first and written with every resolved value
    environment: Box<dyn Environment>,
    /// Fallback consulted when the environment has nothing
    source: Box<dyn ConfigSource>,
}

impl EnvResolver {
    /// Creates a resolver over `environment` and `source`.
    pub fn new(environment: Box<dyn Environment>, source: Box<dyn ConfigSource>) -> Self {
        Self {
            environment,
            source,
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> EnvResolverBuilder {
        EnvResolverBuilder::new()
    }

    /// Returns the environment the resolver reads and writes.
    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    /// Returns the fallback source.
    pub fn source(&self) -> &dyn ConfigSource {
        self.source.as_ref()
    }

    /// Resolves a single specification.
    ///
    /// This is one step of [`VariableResolver::resolve`]; it does not report a
    /// missing file.
    pub fn resolve_one(&mut self, spec: &VariableSpec) -> Result<ResolvedVariable> {
        spec.key().validate()?;
        let key = spec.key().as_str();

        let mut origin = ValueOrigin::Environment;
        let mut value = self.environment.get_non_empty(key);

        if value.is_none() {
            if let Some(found) = self.lookup_source(spec) {
                match self.environment.set(key, found.as_str()) {
                    Ok(()) => origin = ValueOrigin::File,
                    Err(e) => tracing::debug!(
                        "Could not bind {} from source '{}': {}",
                        key,
                        self.source.name(),
                        e
                    ),
                }
            }
            value = self.environment.get_non_empty(key);
        }

        if value.is_none() {
            if let Some(default_value) = spec.default_value() {
                self.environment.set(key, default_value)?;
                origin = ValueOrigin::Default;
                value = Some(default_value.to_string());
                tracing::info!("Using default value for {}", key);
            }
        }

        if let Some(validator) = spec.validator() {
            let candidate = value.as_deref().unwrap_or_default();
            if !validator.validate(candidate) {
                let shown = if spec.is_secret() {
                    "<redacted>".to_string()
                } else {
                    candidate.to_string()
                };
                return Err(ConfigError::ValidationFailed {
                    key: key.to_string(),
                    value: shown,
                });
            }
        }

        let Some(value) = self.environment.get_non_empty(key) else {
            return Err(ConfigError::MissingRequiredValue {
                key: key.to_string(),
            });
        };

        tracing::info!("Successfully loaded {}", key);
        Ok(ResolvedVariable::new(
            spec.key().clone(),
            ConfigValue::from(value),
            origin,
            spec.is_secret(),
        ))
    }

    /// Asks the fallback source for a non-empty value.
    fn lookup_source(&self, spec: &VariableSpec) -> Option<ConfigValue> {
        match self.source.lookup(spec.key()) {
            Ok(found) => found.filter(|value| !value.is_empty()),
            Err(e) => {
                tracing::debug!(
                    "Error querying source '{}' for key '{}': {}",
                    self.source.name(),
                    spec.key(),
                    e
                );
                None
            }
        }
    }
}

impl Default for EnvResolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl VariableResolver for EnvResolver {
    fn resolve(&mut self, specs: &[VariableSpec]) -> Result<Resolution> {
        if !self.source.is_available() {
            tracing::info!(
                "{} not found at {}. Relying on environment variables and defaults.",
                self.source.name(),
                self.source.location()
            );
        }

        specs
            .iter()
            .map(|spec| self.resolve_one(spec))
            .collect::<Result<Vec<_>>>()
            .map(Resolution::new)
    }
}

/// Builder for constructing an `EnvResolver`.
///
/// Defaults to the process environment and a `.env` file in the working
/// directory.
///
/// # Examples
///
/// ```rust
/// use envresolve::ports::ConfigSource;
/// use envresolve::service::EnvResolverBuilder;
///
/// let resolver = EnvResolverBuilder::new()
///     .with_env_file("config/app.env")
///     .build();
/// assert_eq!(resolver.source().location(), "config/app.env");
/// ```
#[derive(Default)]
pub struct EnvResolverBuilder {
    environment: Option<Box<dyn Environment>>,
    source: Option<Box<dyn ConfigSource>>,
}

impl EnvResolverBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `environment` instead of the process environment.
    pub fn with_environment<E>(mut self, environment: E) -> Self
    where
        E: Environment + 'static,
    {
        self.environment = Some(Box::new(environment));
        self
    }

    /// Uses the process environment (the default).
    pub fn with_process_environment(self) -> Self {
        self.with_environment(ProcessEnvironment::new())
    }

    /// Consults the key=value file at `path` after the environment.
    pub fn with_env_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(Box::new(KeyValueFileAdapter::new(path)))
    }

    /// Consults an arbitrary source after the environment.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds the resolver.
    pub fn build(self) -> EnvResolver {
        let environment = self
            .environment
            .unwrap_or_else(|| Box::new(ProcessEnvironment::new()));
        let source = self
            .source
            .unwrap_or_else(|| Box::new(KeyValueFileAdapter::default()));
        EnvResolver::new(environment, source)
    }
}

/// Unwraps a resolution result, terminating the process on failure.
///
/// The error is logged at `error` level immediately before the process exits
/// with status 1.
pub fn exit_on_failure<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("{}. Exiting.", e);
            std::process::exit(1)
        }
    }
}

/// Resolves `specs` against the process environment and the file at `file_path`.
///
/// Every resolved value is bound in the process environment. On the first
/// variable that fails validation or stays empty the process exits with status
/// 1; use [`EnvResolver`] directly to handle failures instead.
///
/// # Examples
///
/// ```rust,no_run
/// use envresolve::domain::VariableSpec;
/// use envresolve::domain::variable_spec::validators;
/// use envresolve::service::parse_environment;
///
/// let resolution = parse_environment(
///     &[
///         VariableSpec::new("CLIENT_ID").with_validator(validators::non_empty()),
///         VariableSpec::new("ISSUER")
///             .with_default("https://default-issuer.com")
///             .with_validator(validators::has_prefix("https://")),
///     ],
///     ".env",
/// );
/// println!("resolved {} variables", resolution.len());
/// ```
pub fn parse_environment(specs: &[VariableSpec], file_path: impl AsRef<Path>) -> Resolution {
    let mut resolver = EnvResolver::builder()
        .with_process_environment()
        .with_env_file(file_path)
        .build();
    exit_on_failure(resolver.resolve(specs))
}
