//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// DNSBL files to scan
    #[serde(default)]
    pub dnsbl_files: Vec<String>,

    /// IP addresses or CIDR blocks to find
    #[serde(default)]
    pub ip_addresses: Vec<String>,

    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# dnsbl-scanner Configuration File
#
# Searched in order: --config, ./config.toml,
# ~/.config/dnsbl-scanner/config.toml, /etc/dnsbl-scanner/config.toml

# DNSBL files to scan (required)
# Note: --dnsbl-files on the command line REPLACES this list
# A leading "~/" is expanded to the home directory
dnsbl_files = [
    # "/var/lib/rbldnsd/drop.txt",
    # "~/lists/local-block.txt",
]

# IP addresses or CIDR blocks to find (required)
# Note: --ip-addresses on the command line REPLACES this list
ip_addresses = [
    # "203.0.113.7",
    # "198.51.100.0/24",
    # "2001:db8::/48",
]

# Enable verbose logging
# verbose = false
"#
    .to_string()
}
