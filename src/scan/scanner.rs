//! The DNSBL scanning loop.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::address::NetworkAddress;
use crate::report::{Interception, ReportError, ReportSink};

use super::error::ScanError;
use super::line::{LineEntry, parse_line};

/// Counters for one scanned source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read.
    pub lines: usize,
    /// Blocklist entries that parsed successfully.
    pub entries: usize,
    /// Exclusion entries that parsed successfully.
    pub exclusions: usize,
    /// Entry or exclusion tokens that failed to parse.
    pub malformed: usize,
    /// Intercepting entries dropped because an exclusion in the same source
    /// contains them. Exclusions apply regardless of line order, so one
    /// listed after the entry still counts. Entries that intercept no target
    /// are never held back and are not counted here.
    pub excluded: usize,
    /// Interceptions reported.
    pub hits: usize,
}

impl ScanStats {
    fn add(&mut self, other: &Self) {
        self.lines += other.lines;
        self.entries += other.entries;
        self.exclusions += other.exclusions;
        self.malformed += other.malformed;
        self.excluded += other.excluded;
        self.hits += other.hits;
    }
}

/// Counters across all scanned files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanTotals {
    /// Files scanned to the end.
    pub files_scanned: usize,
    /// Files skipped because they could not be opened or read.
    pub files_skipped: usize,
    /// Summed per-file counters.
    pub stats: ScanStats,
}

/// Scans DNSBL sources for entries intercepting a set of targets.
///
/// # Examples
///
/// ```
/// use dnsbl_scanner::address::NetworkAddress;
/// use dnsbl_scanner::report::Interception;
/// use dnsbl_scanner::scan::Scanner;
///
/// let targets: Vec<NetworkAddress> = vec!["192.0.2.7".parse().unwrap()];
/// let scanner = Scanner::new(&targets);
///
/// let list = "# test list\n192.0.2.0/24\n198.51.100.1\n";
/// let mut hits: Vec<Interception> = Vec::new();
/// let stats = scanner.scan_reader(list.as_bytes(), "test.txt", &mut hits).unwrap();
///
/// assert_eq!(stats.entries, 2);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].entry.to_string(), "192.0.2.0/24");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    targets: &'a [NetworkAddress],
}

impl<'a> Scanner<'a> {
    /// Creates a scanner for the given targets.
    #[must_use]
    pub const fn new(targets: &'a [NetworkAddress]) -> Self {
        Self { targets }
    }

    /// Scans every file in order.
    ///
    /// Files that cannot be opened or read are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the sink fails.
    pub fn scan_files<S>(
        &self,
        paths: &[PathBuf],
        sink: &mut S,
    ) -> Result<ScanTotals, ReportError>
    where
        S: ReportSink + ?Sized,
    {
        let mut totals = ScanTotals::default();

        for path in paths {
            match self.scan_file(path, sink) {
                Ok(stats) => {
                    tracing::info!(
                        "Scanned {}: {} entries, {} exclusions, {} malformed, {} excluded, {} hits",
                        path.display(),
                        stats.entries,
                        stats.exclusions,
                        stats.malformed,
                        stats.excluded,
                        stats.hits,
                    );
                    totals.files_scanned += 1;
                    totals.stats.add(&stats);
                }
                Err(ScanError::Report(e)) => return Err(e),
                Err(e) => {
                    tracing::warn!("{e}");
                    totals.files_skipped += 1;
                }
            }
        }

        Ok(totals)
    }

    /// Scans a single DNSBL file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read, or if the sink fails.
    pub fn scan_file<S>(&self, path: &Path, sink: &mut S) -> Result<ScanStats, ScanError>
    where
        S: ReportSink + ?Sized,
    {
        let file = File::open(path).map_err(|e| ScanError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.scan_reader(BufReader::new(file), &path.display().to_string(), sink)
    }

    /// Scans DNSBL text from any buffered reader.
    ///
    /// `name` identifies the source in reported interceptions. Invalid UTF-8
    /// is replaced rather than rejected.
    ///
    /// Each entry is matched against the targets as its line is read, and
    /// only intercepting entries are held until the end of the source, where
    /// the source's exclusions are applied to them.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the sink fails. Nothing is
    /// recorded for a source that fails to read.
    pub fn scan_reader<R, S>(
        &self,
        mut reader: R,
        name: &str,
        sink: &mut S,
    ) -> Result<ScanStats, ScanError>
    where
        R: BufRead,
        S: ReportSink + ?Sized,
    {
        let mut stats = ScanStats::default();
        let mut pending: Vec<(NetworkAddress, Vec<NetworkAddress>)> = Vec::new();
        let mut exclusions = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| ScanError::Read {
                name: name.to_string(),
                line: stats.lines + 1,
                source: e,
            })?;
            if read == 0 {
                break;
            }
            stats.lines += 1;

            let line = String::from_utf8_lossy(&buf);
            let Some(entry) = parse_line(&line) else {
                continue;
            };

            let address = match NetworkAddress::parse(entry.token()) {
                Ok(address) => address,
                Err(e) => {
                    tracing::debug!("{name}:{}: skipping entry: {e}", stats.lines);
                    stats.malformed += 1;
                    continue;
                }
            };

            match entry {
                LineEntry::Block(_) => {
                    stats.entries += 1;
                    let matched = self.intercepted_by(&address);
                    if !matched.is_empty() {
                        pending.push((address, matched));
                    }
                }
                LineEntry::Exclude(_) => exclusions.push(address),
            }
        }

        stats.exclusions = exclusions.len();

        for (entry, matched) in pending {
            if let Some(exclusion) = exclusions.iter().find(|x| x.contains(&entry)) {
                tracing::debug!("{name}: {entry} excluded by !{exclusion}");
                stats.excluded += 1;
                continue;
            }

            for target in matched {
                sink.record(&Interception {
                    entry,
                    target,
                    source: name.to_string(),
                })?;
                stats.hits += 1;
            }
        }

        Ok(stats)
    }

    /// Targets intercepted by `entry`, in configured order.
    fn intercepted_by(&self, entry: &NetworkAddress) -> Vec<NetworkAddress> {
        self.targets
            .iter()
            .filter(|t| t.intercepts(entry))
            .copied()
            .collect()
    }
}
