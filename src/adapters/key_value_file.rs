// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key=value file source adapter.
//!
//! This module reads fallback values from a plain text file of `key=value`
//! lines, the format usually kept in a `.env` file. The format is deliberately
//! minimal: there are no comments, quotes, escapes or continuation lines, and a
//! line without `=` is simply ignored.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use directories::ProjectDirs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name used when no explicit path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Splits one line into a trimmed key and value.
///
/// The line is split at its first `=`; everything after it, including further
/// `=` characters, belongs to the value. Returns `None` for lines without `=`.
///
/// # Examples
///
/// ```rust
/// use envresolve::adapters::key_value_file::parse_line;
///
/// assert_eq!(parse_line("client_secret = s3cr3t12"), Some(("client_secret", "s3cr3t12")));
/// assert_eq!(parse_line("TOKEN=a=b"), Some(("TOKEN", "a=b")));
/// assert_eq!(parse_line("# just a note"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Configuration source adapter for key=value files.
///
/// The file is opened afresh on every lookup and scanned to the end; when
/// several lines name the same key (compared case-insensitively) the last one
/// wins. A file that is missing or cannot be opened yields no values.
///
/// # Examples
///
/// ```rust,no_run
/// use envresolve::adapters::KeyValueFileAdapter;
/// use envresolve::domain::ConfigKey;
/// use envresolve::ports::ConfigSource;
///
/// let adapter = KeyValueFileAdapter::new("/etc/myapp/.env");
/// let value = adapter.lookup(&ConfigKey::from("CLIENT_ID")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct KeyValueFileAdapter {
    /// Path to the key=value file
    file_path: PathBuf,
}

impl KeyValueFileAdapter {
    /// Creates an adapter for the file at `path`.
    ///
    /// The file does not need to exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates an adapter for `.env` in the OS-appropriate config directory.
    ///
    /// Uses the `directories` crate, so on Linux this is
    /// `$XDG_CONFIG_HOME/<app_name>/.env`.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceError`] if no home directory can be determined.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "key-value-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::new(proj_dirs.config_dir().join(DEFAULT_ENV_FILE)))
    }

    /// Returns the path to the file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns `true` if the file exists.
    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    /// Scans the whole file for `key`, returning the value of the last match.
    ///
    /// Lines are split on `\n` as raw bytes and decoded lossily, so a line that
    /// is not valid UTF-8 never hides the lines after it. Only a read error ends
    /// the scan early.
    fn scan(&self, reader: impl BufRead, key: &ConfigKey) -> Option<String> {
        let mut found = None;
        for (index, line) in reader.split(b'\n').enumerate() {
            let mut line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::debug!(
                        "Stopped reading {} at line {}: {}",
                        self.file_path.display(),
                        index + 1,
                        e
                    );
                    break;
                }
            };
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let line = String::from_utf8_lossy(&line);
            let Some((line_key, value)) = parse_line(&line) else {
                continue;
            };
            if key.matches_ignore_case(line_key) {
                found = Some(value.to_string());
            }
        }
        found
    }
}

impl Default for KeyValueFileAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_FILE)
    }
}

impl ConfigSource for KeyValueFileAdapter {
    fn name(&self) -> &str {
        "key-value-file"
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }

    fn is_available(&self) -> bool {
        self.exists()
    }

    fn lookup(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!("Error opening {}: {}", self.file_path.display(), e);
                return Ok(None);
            }
        };

        Ok(self.scan(BufReader::new(file), key).map(ConfigValue::from))
    }
}
