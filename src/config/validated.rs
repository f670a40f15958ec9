//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::address::NetworkAddress;

use super::cli::Cli;
use super::discover::{expand_tilde, find_config, search_paths};
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Built once at startup and passed by reference to the scanner.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to discover the config file and merge it with
/// CLI arguments, or [`ValidatedConfig::from_raw`] when the TOML is already at hand.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Target addresses and ranges to find (non-empty)
    pub targets: Vec<NetworkAddress>,

    /// DNSBL files to scan, in order (non-empty)
    pub dnsbl_files: Vec<PathBuf>,

    /// Config file the values came from, if any
    pub config_file: Option<PathBuf>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_file_str = self
            .config_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());
        let targets = self
            .targets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Config {{ targets: [{}], dnsbl_files: {}, config_file: {}, verbose: {} }}",
            targets,
            self.dnsbl_files.len(),
            config_file_str,
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// Non-empty CLI lists replace the TOML lists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No DNSBL files are configured
    /// - No IP addresses are configured
    /// - An IP address cannot be parsed
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let dnsbl_files = Self::resolve_dnsbl_files(cli, toml)?;
        let targets = Self::resolve_targets(cli, toml)?;

        // Flags only enable
        let verbose = cli.verbose || toml.is_some_and(|t| t.verbose);

        Ok(Self {
            targets,
            dnsbl_files,
            config_file: None,
            verbose,
        })
    }

    /// Loads and merges configuration from CLI and the discovered config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_from(cli, &search_paths())
    }

    /// Like [`load`](Self::load), but searching `candidates` instead of the
    /// default locations when `--config` is not given.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_from(cli: &Cli, candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        let config_file = cli
            .config
            .clone()
            .or_else(|| find_config(candidates));

        let toml = match config_file {
            Some(ref path) => Some(TomlConfig::load(path)?),
            None => None,
        };

        let mut config = Self::from_raw(cli, toml.as_ref())?;
        config.config_file = config_file;
        Ok(config)
    }

    fn resolve_dnsbl_files(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<PathBuf>, ConfigError> {
        let files: Vec<PathBuf> = if cli.dnsbl_files.is_empty() {
            toml.map(|t| t.dnsbl_files.iter().map(PathBuf::from).collect())
                .unwrap_or_default()
        } else {
            cli.dnsbl_files.clone()
        };

        if files.is_empty() {
            return Err(ConfigError::missing(
                field::DNSBL_FILES,
                "Use --dnsbl-files or set dnsbl_files in config file",
            ));
        }

        Ok(files.iter().map(|p| expand_tilde(p)).collect())
    }

    fn resolve_targets(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<NetworkAddress>, ConfigError> {
        let values: &[String] = match toml {
            _ if !cli.ip_addresses.is_empty() => &cli.ip_addresses,
            Some(toml) => &toml.ip_addresses,
            None => &[],
        };

        if values.is_empty() {
            return Err(ConfigError::missing(
                field::IP_ADDRESSES,
                "Use --ip-addresses or set ip_addresses in config file",
            ));
        }

        values.iter().map(|value| parse_target(value)).collect()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_target(value: &str) -> Result<NetworkAddress, ConfigError> {
    NetworkAddress::parse(value.trim()).map_err(|e| ConfigError::InvalidAddress {
        value: value.to_string(),
        source: e,
    })
}
