//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::address::ParseError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// A configured target address could not be parsed.
    #[error("Unable to parse provided IP address '{value}': {source}")]
    InvalidAddress {
        /// The rejected value
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseError,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The DNSBL files field.
    pub const DNSBL_FILES: &str = "dnsbl_files";
    /// The target IP addresses field.
    pub const IP_ADDRESSES: &str = "ip_addresses";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
