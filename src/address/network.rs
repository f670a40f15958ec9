//! Normalized address / CIDR values and their range comparisons.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::{AddressFamily, FamilyMismatch, ParseError};

/// Prefix length of the IPv4-mapped block `::ffff:0:0/96`.
const MAPPED_PREFIX_LEN: u8 = 96;

/// A CIDR network: masked base, mask, broadcast and prefix length.
///
/// All four addresses share one family. Only obtainable through
/// [`NetworkAddress::network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    base: IpAddr,
    mask: IpAddr,
    broadcast: IpAddr,
    prefix_len: u8,
}

impl Network {
    /// Builds the network of `address` with `prefix_len` leading mask bits.
    ///
    /// `prefix_len` must already be validated against the family of `address`.
    fn new(address: IpAddr, prefix_len: u8) -> Self {
        match address {
            IpAddr::V4(v4) => {
                let mask = prefix_mask::<4>(prefix_len);
                Self::from_octets(v4.octets(), mask, prefix_len)
            }
            IpAddr::V6(v6) => {
                let mask = prefix_mask::<16>(prefix_len);
                Self::from_octets(v6.octets(), mask, prefix_len)
            }
        }
    }

    fn from_octets<const N: usize>(address: [u8; N], mask: [u8; N], prefix_len: u8) -> Self
    where
        IpAddr: From<[u8; N]>,
    {
        let base: [u8; N] = std::array::from_fn(|i| address[i] & mask[i]);
        let broadcast: [u8; N] = std::array::from_fn(|i| base[i] | !mask[i]);

        Self {
            base: IpAddr::from(base),
            mask: IpAddr::from(mask),
            broadcast: IpAddr::from(broadcast),
            prefix_len,
        }
    }

    /// Reduces an IPv4-mapped IPv6 network to its IPv4 form.
    ///
    /// Returns `None` unless the masked base still carries the `::ffff`
    /// marker, which requires a prefix of at least 96 bits.
    fn to_ipv4(self) -> Option<Self> {
        let (IpAddr::V6(base), IpAddr::V6(mask)) = (self.base, self.mask) else {
            return None;
        };
        if self.prefix_len < MAPPED_PREFIX_LEN {
            return None;
        }
        let base = base.to_ipv4_mapped()?;

        // The high 12 mask bytes are all ones here; only the low 4 matter.
        let mask = mask.octets();
        let low_mask = [mask[12], mask[13], mask[14], mask[15]];

        Some(Self::from_octets(
            base.octets(),
            low_mask,
            self.prefix_len - MAPPED_PREFIX_LEN,
        ))
    }

    /// Re-expresses an IPv4 network inside `::ffff:0:0/96`.
    fn to_ipv6_mapped(self) -> Self {
        match self.base {
            IpAddr::V4(base) => Self::new(
                IpAddr::V6(base.to_ipv6_mapped()),
                self.prefix_len + MAPPED_PREFIX_LEN,
            ),
            IpAddr::V6(_) => self,
        }
    }

    /// Inclusive range check. Both sides must be the same family.
    fn includes(&self, address: IpAddr) -> bool {
        self.base <= address && address <= self.broadcast
    }

    /// Masked base address (lowest address in the range).
    #[must_use]
    pub const fn base(&self) -> IpAddr {
        self.base
    }

    /// Network mask.
    #[must_use]
    pub const fn mask(&self) -> IpAddr {
        self.mask
    }

    /// Broadcast address (highest address in the range).
    #[must_use]
    pub const fn broadcast(&self) -> IpAddr {
        self.broadcast
    }

    /// Prefix length in the stored family.
    #[must_use]
    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }
}

/// A single IP address or a CIDR range, normalized at parse time.
///
/// Construction goes through parsing only ([`NetworkAddress::parse`] or
/// [`str::parse`]); values are immutable afterwards.
///
/// # Examples
///
/// ```
/// use dnsbl_scanner::address::NetworkAddress;
///
/// let block: NetworkAddress = "10.0.0.0/8".parse().unwrap();
/// let host: NetworkAddress = "::ffff:10.1.2.3".parse().unwrap();
///
/// assert_eq!(host.to_string(), "10.1.2.3");
/// assert!(block.contains(&host));
/// assert!(!host.contains(&block));
/// assert!(host.intercepts(&block));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    address: IpAddr,
    network: Option<Network>,
}

impl NetworkAddress {
    /// Parses a bare address or `address/prefix` CIDR text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedAddress`] for an invalid bare address,
    /// and [`ParseError::MalformedCidr`] when the address part, or the prefix
    /// length, of CIDR text is invalid.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        match text.split_once('/') {
            None => Self::parse_address(text),
            Some((address, prefix)) => Self::parse_cidr(text, address, prefix),
        }
    }

    fn parse_address(text: &str) -> Result<Self, ParseError> {
        let address = text
            .parse::<IpAddr>()
            .map_err(|_| ParseError::malformed_address(text))?;

        Ok(Self {
            address: address.to_canonical(),
            network: None,
        })
    }

    fn parse_cidr(text: &str, address: &str, prefix: &str) -> Result<Self, ParseError> {
        let literal = address
            .parse::<IpAddr>()
            .map_err(|_| ParseError::malformed_cidr(text, "invalid address"))?;
        let prefix_len = parse_prefix_len(text, prefix, AddressFamily::of(literal))?;

        let network = Network::new(literal, prefix_len);
        Ok(match network.to_ipv4() {
            Some(network) => Self {
                address: literal.to_canonical(),
                network: Some(network),
            },
            None => Self {
                address: literal,
                network: Some(network),
            },
        })
    }

    /// The parsed address (for CIDR input, the unmasked address part).
    #[must_use]
    pub const fn address(&self) -> IpAddr {
        self.address
    }

    /// Family of the stored value.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        AddressFamily::of(self.address)
    }

    /// Network details, present only for CIDR input.
    #[must_use]
    pub const fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    /// Returns true if this value is a range rather than a single address.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        self.network.is_some()
    }

    /// Strict containment test between values of the same family.
    ///
    /// | `self` | `other` | result |
    /// |---|---|---|
    /// | address | address | addresses are equal |
    /// | network | address | address lies in `[base, broadcast]` |
    /// | address | network | `false` |
    /// | network | network | both ends of `other` lie in `[base, broadcast]` |
    ///
    /// # Errors
    ///
    /// Returns [`FamilyMismatch`] when the operands have different families.
    pub fn try_contains(&self, other: &Self) -> Result<bool, FamilyMismatch> {
        if self.family() != other.family() {
            return Err(FamilyMismatch {
                left: self.family(),
                right: other.family(),
            });
        }
        Ok(self.contains_same_family(other))
    }

    /// Containment test across families.
    ///
    /// Same-family operands follow [`try_contains`](Self::try_contains).
    /// Otherwise the IPv4 operand is compared in its IPv4-mapped IPv6 form,
    /// so `::/0` contains `10.0.0.1` but `2001:db8::/32` does not.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        match self.try_contains(other) {
            Ok(contained) => contained,
            Err(_) => self
                .to_ipv6_mapped()
                .contains_same_family(&other.to_ipv6_mapped()),
        }
    }

    /// Returns true if either value contains the other.
    #[must_use]
    pub fn intercepts(&self, other: &Self) -> bool {
        self.contains(other) || other.contains(self)
    }

    fn contains_same_family(&self, other: &Self) -> bool {
        match (&self.network, &other.network) {
            (None, None) => self.address == other.address,
            (Some(network), None) => network.includes(other.address),
            (None, Some(_)) => false,
            (Some(network), Some(inner)) => {
                network.includes(inner.base) && network.includes(inner.broadcast)
            }
        }
    }

    fn to_ipv6_mapped(self) -> Self {
        match self.address {
            IpAddr::V4(v4) => Self {
                address: IpAddr::V6(v4.to_ipv6_mapped()),
                network: self.network.map(Network::to_ipv6_mapped),
            },
            IpAddr::V6(_) => self,
        }
    }
}

impl FromStr for NetworkAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.network {
            None => write!(f, "{}", self.address),
            Some(network) => write!(f, "{}/{}", network.base, network.prefix_len),
        }
    }
}

impl From<Ipv4Addr> for NetworkAddress {
    fn from(address: Ipv4Addr) -> Self {
        Self {
            address: IpAddr::V4(address),
            network: None,
        }
    }
}

impl From<Ipv6Addr> for NetworkAddress {
    fn from(address: Ipv6Addr) -> Self {
        Self {
            address: IpAddr::V6(address).to_canonical(),
            network: None,
        }
    }
}

fn parse_prefix_len(text: &str, prefix: &str, family: AddressFamily) -> Result<u8, ParseError> {
    if prefix.is_empty() {
        return Err(ParseError::malformed_cidr(text, "missing prefix length"));
    }
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed_cidr(
            text,
            "prefix length is not a number",
        ));
    }

    // All digits, so a parse failure can only be overflow.
    match prefix.parse::<u8>() {
        Ok(len) if len <= family.max_prefix_len() => Ok(len),
        _ => Err(ParseError::malformed_cidr(
            text,
            match family {
                AddressFamily::V4 => "prefix length must be 0-32 for IPv4",
                AddressFamily::V6 => "prefix length must be 0-128 for IPv6",
            },
        )),
    }
}

/// Mask with the top `prefix_len` bits set.
fn prefix_mask<const N: usize>(prefix_len: u8) -> [u8; N] {
    let mut remaining = u32::from(prefix_len);
    std::array::from_fn(|_| {
        let bits = remaining.min(8);
        remaining -= bits;
        if bits == 0 { 0 } else { u8::MAX << (8 - bits) }
    })
}
