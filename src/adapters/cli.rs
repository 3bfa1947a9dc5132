// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line arguments for choosing the key=value file.
//!
//! Binaries flatten [`EnvFileArgs`] into their own `clap` parser so operators
//! can point the resolver at a different file without rebuilding.

use crate::adapters::key_value_file::{KeyValueFileAdapter, DEFAULT_ENV_FILE};
use crate::service::{EnvResolver, EnvResolverBuilder};
use clap::Args;
use std::path::PathBuf;

/// Arguments selecting the key=value file consulted after the environment.
///
/// The path comes from `--env-file`, then the `ENV_FILE` variable, then `.env`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use envresolve::adapters::EnvFileArgs;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     env: EnvFileArgs,
/// }
///
/// let cli = Cli::parse_from(["app", "--env-file", "/etc/app/.env"]);
/// assert_eq!(cli.env.env_file.to_str(), Some("/etc/app/.env"));
/// ```
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EnvFileArgs {
    /// Key=value file consulted when a variable is not set in the environment
    #[arg(
        long = "env-file",
        env = "ENV_FILE",
        value_name = "PATH",
        default_value = DEFAULT_ENV_FILE
    )]
    pub env_file: PathBuf,
}

impl EnvFileArgs {
    /// Returns a file source for the selected path.
    pub fn source(&self) -> KeyValueFileAdapter {
        KeyValueFileAdapter::new(&self.env_file)
    }

    /// Returns a resolver builder reading the selected file.
    pub fn resolver(&self) -> EnvResolverBuilder {
        EnvResolver::builder().with_env_file(&self.env_file)
    }
}

impl Default for EnvFileArgs {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryEnvironment;
    use crate::domain::{VariableResolver, VariableSpec};
    use crate::ports::{ConfigSource, Environment};
    use clap::Parser;
    use std::io::Write;
    use std::path::Path;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        env: EnvFileArgs,
    }

    #[test]
    fn test_explicit_path() {
        let cli = TestCli::try_parse_from(["app", "--env-file", "config/dev.env"]).unwrap();
        assert_eq!(cli.env.env_file, PathBuf::from("config/dev.env"));
    }

    #[test]
    fn test_equals_form() {
        let cli = TestCli::try_parse_from(["app", "--env-file=prod.env"]).unwrap();
        assert_eq!(cli.env.env_file, PathBuf::from("prod.env"));
    }

    #[test]
    fn test_missing_value_is_rejected() {
        assert!(TestCli::try_parse_from(["app", "--env-file"]).is_err());
    }

    #[test]
    fn test_default_args() {
        let args = EnvFileArgs::default();
        assert_eq!(args.env_file, Path::new(".env"));
        assert_eq!(args.source().file_path(), Path::new(".env"));
    }

    #[test]
    fn test_resolver_reads_selected_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "REGION=eu-west-1").unwrap();

        let args = EnvFileArgs {
            env_file: file.path().to_path_buf(),
        };
        assert!(args.source().is_available());

        let env = InMemoryEnvironment::new();
        let mut resolver = args.resolver().with_environment(env.clone()).build();
        resolver.resolve(&[VariableSpec::new("REGION")]).unwrap();

        assert_eq!(env.get("REGION").as_deref(), Some("eu-west-1"));
    }
}
