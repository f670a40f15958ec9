//! Error types for scanning.

use std::path::PathBuf;

use thiserror::Error;

use crate::report::ReportError;

/// Error type for scanning a single DNSBL source.
///
/// `Open` and `Read` only affect the file in question; `Report` means the
/// output itself is broken and scanning cannot continue.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The DNSBL file could not be opened.
    #[error("Unable to open DNSBL file '{}': {source}", path.display())]
    Open {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from the DNSBL source failed part way.
    #[error("Unable to read '{name}' at line {line}: {source}")]
    Read {
        /// Name of the source being read
        name: String,
        /// Line number (1-based) where reading failed
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing an interception to the report failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}
