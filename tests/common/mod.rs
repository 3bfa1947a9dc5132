// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use envresolve::adapters::InMemoryEnvironment;
use envresolve::domain::{ConfigKey, ConfigValue, Result};
use envresolve::ports::ConfigSource;
use envresolve::service::EnvResolver;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// A mock fallback source with predefined values.
///
/// Keys are matched exactly, unlike the key=value file.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct MockConfigSource {
    values: HashMap<String, String>,
    available: bool,
}

#[allow(dead_code)]
impl MockConfigSource {
    /// Creates an available mock source with no values.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Marks the source as missing.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        if !self.available {
            return Ok(None);
        }
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str())))
    }
}

/// Creates a temporary key=value file with the given content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
#[allow(dead_code)]
pub fn create_env_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Returns a path inside a fresh temporary directory that does not exist.
///
/// The directory is returned too so it outlives the test body.
#[allow(dead_code)]
pub fn missing_env_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.env");
    (dir, path)
}

/// Builds a resolver over an in-memory environment and the file at `path`.
#[allow(dead_code)]
pub fn file_resolver(env: &InMemoryEnvironment, path: &Path) -> EnvResolver {
    EnvResolver::builder()
        .with_environment(env.clone())
        .with_env_file(path)
        .build()
}
