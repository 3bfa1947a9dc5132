// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for value precedence.
//!
//! Environment beats the fallback source, which beats the default.

mod common;

use common::{create_env_file, file_resolver, MockConfigSource};
use envresolve::prelude::*;

fn mock_resolver(env: &InMemoryEnvironment, source: MockConfigSource) -> EnvResolver {
    EnvResolver::builder()
        .with_environment(env.clone())
        .with_source(Box::new(source))
        .build()
}

#[test]
fn test_precedence_env_over_source() {
    let env = InMemoryEnvironment::from_pairs([("TEST_KEY", "env_value")]);
    let source = MockConfigSource::new().with_value("TEST_KEY", "source_value");
    let mut resolver = mock_resolver(&env, source);

    let resolution = resolver
        .resolve(&[VariableSpec::new("TEST_KEY").with_default("default_value")])
        .unwrap();

    assert_eq!(resolution.value("TEST_KEY"), Some("env_value"));
}

#[test]
fn test_precedence_source_over_default() {
    let env = InMemoryEnvironment::new();
    let source = MockConfigSource::new().with_value("TEST_KEY", "source_value");
    let mut resolver = mock_resolver(&env, source);

    let resolution = resolver
        .resolve(&[VariableSpec::new("TEST_KEY").with_default("default_value")])
        .unwrap();

    assert_eq!(resolution.value("TEST_KEY"), Some("source_value"));
    assert_eq!(
        resolution.get("TEST_KEY").unwrap().origin(),
        ValueOrigin::File
    );
}

#[test]
fn test_precedence_default_when_nothing_else() {
    let env = InMemoryEnvironment::new();
    let mut resolver = mock_resolver(&env, MockConfigSource::new().unavailable());

    let resolution = resolver
        .resolve(&[VariableSpec::new("TEST_KEY").with_default("default_value")])
        .unwrap();

    assert_eq!(resolution.value("TEST_KEY"), Some("default_value"));
}

#[test]
fn test_precedence_env_over_file() {
    let env = InMemoryEnvironment::from_pairs([("DATABASE_URL", "postgres://env")]);
    let file = create_env_file("DATABASE_URL=postgres://file\n");
    let mut resolver = file_resolver(&env, file.path());

    let resolution = resolver
        .resolve(&[VariableSpec::new("DATABASE_URL")])
        .unwrap();

    assert_eq!(resolution.value("DATABASE_URL"), Some("postgres://env"));
}

#[test]
fn test_environment_lookup_is_case_sensitive() {
    // a lowercase environment entry does not satisfy an uppercase key
    let env = InMemoryEnvironment::from_pairs([("database_url", "postgres://lower")]);
    let file = create_env_file("DATABASE_URL=postgres://file\n");
    let mut resolver = file_resolver(&env, file.path());

    let resolution = resolver
        .resolve(&[VariableSpec::new("DATABASE_URL")])
        .unwrap();

    assert_eq!(resolution.value("DATABASE_URL"), Some("postgres://file"));
}

#[test]
fn test_empty_env_value_falls_through_to_file() {
    let env = InMemoryEnvironment::from_pairs([("API_URL", "")]);
    let file = create_env_file("api_url=https://api.example\n");
    let mut resolver = file_resolver(&env, file.path());

    let resolution = resolver.resolve(&[VariableSpec::new("API_URL")]).unwrap();

    assert_eq!(resolution.value("API_URL"), Some("https://api.example"));
    assert_eq!(env.get("API_URL").as_deref(), Some("https://api.example"));
}

#[test]
fn test_empty_file_value_falls_through_to_default() {
    let env = InMemoryEnvironment::new();
    let file = create_env_file("API_URL=\n");
    let mut resolver = file_resolver(&env, file.path());

    let resolution = resolver
        .resolve(&[VariableSpec::new("API_URL").with_default("https://fallback.example")])
        .unwrap();

    assert!(resolution.get("API_URL").unwrap().used_default());
}

#[test]
fn test_later_empty_line_overrides_earlier_value() {
    // last match wins even when the last match is empty
    let env = InMemoryEnvironment::new();
    let file = create_env_file("API_URL=https://api.example\nAPI_URL=\n");
    let mut resolver = file_resolver(&env, file.path());

    let err = resolver.resolve(&[VariableSpec::new("API_URL")]).unwrap_err();

    assert!(matches!(err, ConfigError::MissingRequiredValue { .. }));
}
