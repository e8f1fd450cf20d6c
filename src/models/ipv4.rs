//! IPv4 CIDR parsing and mask arithmetic.
//!
//! Provides [`Ipv4Cidr`] plus the bit helpers used to turn a prefix length into
//! a netmask and an address into its network address.

use crate::error::CidrError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use goog_routes::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// IPv4 address with a prefix length, as written in CIDR notation.
///
/// The address keeps whatever host bits the input carried; use
/// [`Ipv4Cidr::network`] for the base address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Cidr {
    /// The address as written.
    pub addr: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix_len: u8,
}

impl Ipv4Cidr {
    /// Parse a CIDR string such as "10.0.0.0/24". No whitespace is trimmed.
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr, CidrError> {
        let (addr, len) = addr_cidr.split_once('/').ok_or(CidrError::MissingSlash)?;

        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr.to_string()))?;

        // u8::from_str accepts a leading '+', a prefix length is digits only
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::InvalidPrefixLength(len.to_string()));
        }
        let prefix_len: u8 = len
            .parse()
            .map_err(|_| CidrError::InvalidPrefixLength(len.to_string()))?;
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::PrefixTooLong(prefix_len));
        }

        Ok(Ipv4Cidr { addr, prefix_len })
    }

    /// Base address of the network, host bits cleared.
    pub fn network(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.prefix_len).unwrap_or(self.addr)
    }

    /// Dotted-decimal netmask implied by the prefix length.
    pub fn netmask(&self) -> Ipv4Addr {
        // over-long lengths only come from building the struct by hand
        Ipv4Addr::from(get_cidr_mask(self.prefix_len).unwrap_or(u32::MAX))
    }
}

impl FromStr for Ipv4Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Cidr::new(s)
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}
