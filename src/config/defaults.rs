//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Application name, used for directory names and CLI output.
pub const APP_NAME: &str = "dnsbl-scanner";

/// File name of the configuration file in every search location.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// System-wide configuration directory.
pub const SYSTEM_CONFIG_DIR: &str = "/etc/dnsbl-scanner";
