//! dnsbl-scanner: DNSBL range interception scanner
//!
//! A library for parsing IP addresses and CIDR blocks, testing whether
//! they contain or overlap each other, and scanning DNSBL formatted
//! blocklist files for entries that intercept a set of target networks.

pub mod address;
pub mod config;
pub mod report;
pub mod scan;
