//! Application execution logic.
//!
//! This module scans the configured DNSBL files and writes every
//! interception as a CSV row.

use std::io::Write;

use thiserror::Error;

use dnsbl_scanner::config::ValidatedConfig;
use dnsbl_scanner::report::{CsvReport, ReportError};
use dnsbl_scanner::scan::{ScanTotals, Scanner};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Writing the CSV report failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Scans every configured DNSBL file and writes the CSV report to `output`.
///
/// The header row is written before any file is opened. Unreadable files
/// are logged and skipped.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn execute<W: Write>(config: &ValidatedConfig, output: W) -> Result<ScanTotals, RunError> {
    let mut report = CsvReport::new(output)?;

    let scanner = Scanner::new(&config.targets);
    let totals = scanner.scan_files(&config.dnsbl_files, &mut report)?;
    report.finish()?;

    if totals.files_skipped > 0 {
        tracing::warn!(
            "{} of {} DNSBL file(s) could not be read",
            totals.files_skipped,
            config.dnsbl_files.len()
        );
    }
    tracing::info!(
        "Scan complete: {} file(s), {} entries, {} interception(s)",
        totals.files_scanned,
        totals.stats.entries,
        totals.stats.hits,
    );

    Ok(totals)
}
