//! DNSBL file scanning.
//!
//! This module provides:
//! - Line cleaning for the DNSBL text format ([`parse_line`], [`LineEntry`])
//! - The per-file scanning loop ([`Scanner`])
//! - Scan counters ([`ScanStats`], [`ScanTotals`])
//!
//! # Line Format
//!
//! - Text after `#` is a comment.
//! - Lines starting with `$` (variables) or `:` (descriptions) are ignored.
//! - Only the first whitespace-separated field of a line is used.
//! - A leading `!` marks an exclusion entry.
//!
//! # Exclusions
//!
//! Exclusions apply to the whole file they appear in: a blocklist entry is
//! dropped when any exclusion of the same file contains it, wherever the
//! exclusion line sits relative to the entry. Entries are matched as they
//! are read; only those intercepting a target wait for the end of the file.

mod error;
mod line;
mod scanner;


pub use error::ScanError;
pub use line::{LineEntry, parse_line};
pub use scanner::{ScanStats, ScanTotals, Scanner};
