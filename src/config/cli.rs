//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// dnsbl-scanner: DNSBL range interception scanner
///
/// Scans DNSBL formatted files for IP addresses and ranges that overlap
/// the given target addresses, and prints every match as CSV.
#[derive(Debug, Parser)]
#[command(name = "dnsbl-scanner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// IP addresses or CIDR blocks to find (comma separated or repeated)
    #[arg(
        long = "ip-addresses",
        visible_alias = "ip-address",
        value_name = "ADDR",
        value_delimiter = ','
    )]
    pub ip_addresses: Vec<String>,

    /// DNSBL files to scan (comma separated or repeated)
    #[arg(
        long = "dnsbl-files",
        visible_alias = "dnsbl-file",
        value_name = "PATH",
        value_delimiter = ','
    )]
    pub dnsbl_files: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for dnsbl-scanner
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
