//! Error types for address parsing and comparison.

use thiserror::Error;

use super::AddressFamily;

/// Error type for parsing address or CIDR text.
///
/// Both variants are recoverable: a scanner skips the offending entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is neither an IPv4 nor an IPv6 literal.
    #[error("Malformed address '{input}'")]
    MalformedAddress {
        /// The rejected input
        input: String,
    },

    /// Input contains `/` but is not valid CIDR notation.
    #[error("Malformed CIDR '{input}': {reason}")]
    MalformedCidr {
        /// The rejected input
        input: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl ParseError {
    pub(super) fn malformed_address(input: &str) -> Self {
        Self::MalformedAddress {
            input: input.to_string(),
        }
    }

    pub(super) fn malformed_cidr(input: &str, reason: &'static str) -> Self {
        Self::MalformedCidr {
            input: input.to_string(),
            reason,
        }
    }
}

/// Two values of different address families were compared strictly.
///
/// Returned by [`NetworkAddress::try_contains`](super::NetworkAddress::try_contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot compare {left} value with {right} value")]
pub struct FamilyMismatch {
    /// Family of the containing operand
    pub left: AddressFamily,
    /// Family of the contained operand
    pub right: AddressFamily,
}
