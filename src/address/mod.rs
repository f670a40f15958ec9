//! IP address and CIDR block representation.
//!
//! This module provides:
//! - Parsing and normalization of address / CIDR text ([`NetworkAddress`])
//! - Range containment and interception tests
//! - Address family classification ([`AddressFamily`])
//! - Error types for parsing and strict comparison ([`ParseError`], [`FamilyMismatch`])
//!
//! # Normalization
//!
//! Values are always stored in the most specific family that can represent
//! them: an IPv4-mapped IPv6 literal such as `::ffff:10.0.0.1` becomes the
//! IPv4 address `10.0.0.1`. The base, mask and broadcast of a network always
//! share the width of the stored address.

mod error;
mod family;
mod network;


pub use error::{FamilyMismatch, ParseError};
pub use family::AddressFamily;
pub use network::{Network, NetworkAddress};
