//! Configuration layer for dnsbl-scanner.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Configuration file discovery ([`search_paths`], [`find_config`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Config File Discovery
//!
//! The first existing file wins:
//!
//! 1. `--config <PATH>` (must be readable, otherwise an error)
//! 2. `./config.toml`
//! 3. `~/.config/dnsbl-scanner/config.toml`
//! 4. `/etc/dnsbl-scanner/config.toml`
//!
//! Without any config file, CLI arguments alone are used.
//!
//! # Priority
//!
//! For list options (`dnsbl_files`, `ip_addresses`), non-empty CLI lists
//! **replace** the TOML lists entirely (not merged).
//!
//! The `verbose` flag uses OR semantics: set in either source, it is on.

mod cli;
pub mod defaults;
mod discover;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use discover::{expand_tilde, find_config, search_paths};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
