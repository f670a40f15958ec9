//! Interception reporting.
//!
//! The scanner pushes every [`Interception`] it finds into a [`ReportSink`].
//! [`CsvReport`] is the sink used by the binary; `Vec<Interception>` is a
//! collecting sink for library callers and tests.

use std::io::Write;

use thiserror::Error;

use crate::address::NetworkAddress;

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Header fields written once before any data rows.
pub const CSV_HEADER: [&str; 3] = ["IP Address", "Network", "DNSBL File"];

/// A blocklist entry that intercepts one of the configured targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interception {
    /// The entry parsed from the blocklist file.
    pub entry: NetworkAddress,
    /// The configured target it intercepts.
    pub target: NetworkAddress,
    /// Name of the blocklist file the entry came from.
    pub source: String,
}

/// Error type for report output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the underlying output failed.
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    /// Encoding a CSV record failed.
    #[error("Failed to write report: {0}")]
    Csv(#[from] csv::Error),
}

/// Destination for interceptions found while scanning.
pub trait ReportSink {
    /// Records one interception.
    ///
    /// # Errors
    ///
    /// Returns an error if the interception cannot be written out.
    fn record(&mut self, hit: &Interception) -> Result<(), ReportError>;
}

impl ReportSink for Vec<Interception> {
    fn record(&mut self, hit: &Interception) -> Result<(), ReportError> {
        self.push(hit.clone());
        Ok(())
    }
}

/// CSV writer producing `entry,target,file` rows.
///
/// The header is written and flushed by [`CsvReport::new`], so it appears
/// exactly once and before any row even when nothing is found. Fields are
/// quoted by [`csv::Writer`] whenever they hold a delimiter, quote or line
/// break.
#[derive(Debug)]
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvReport<W> {
    /// Creates the report and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(output: W) -> Result<Self, ReportError> {
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    /// Number of data rows written so far.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes the output and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<W, ReportError> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Write(e.into_error()))
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    fn record(&mut self, hit: &Interception) -> Result<(), ReportError> {
        let entry = hit.entry.to_string();
        let target = hit.target.to_string();
        self.writer
            .write_record([entry.as_str(), target.as_str(), hit.source.as_str()])?;
        self.rows += 1;
        Ok(())
    }
}
