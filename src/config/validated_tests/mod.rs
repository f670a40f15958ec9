//! Tests for validated configuration.

use std::path::PathBuf;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["dnsbl-scanner"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

/// Helper to render targets back to text
fn targets(config: &ValidatedConfig) -> Vec<String> {
    config.targets.iter().map(ToString::to_string).collect()
}

mod precedence_tests;
