//! IPv4 address and CIDR block utilities.
//!
//! Provides [`NetworkBlock`] for a validated base address plus prefix
//! length, and the octet packing helpers the subnet planner relies on.

use crate::error::{InvalidInput, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Pack four octets into a u32, most significant octet first.
///
/// # Examples
/// ```
/// use netlab_calc::models::pack_octets;
/// assert_eq!(pack_octets([192, 168, 1, 0]), 0xC0A80100);
/// ```
pub fn pack_octets(octets: [u8; 4]) -> u32 {
    ((octets[0] as u32) << 24)
        | ((octets[1] as u32) << 16)
        | ((octets[2] as u32) << 8)
        | octets[3] as u32
}

/// Split a u32 back into four octets with shift and mask.
pub fn unpack_u32(bits: u32) -> [u8; 4] {
    [
        ((bits >> 24) & 0xFF) as u8,
        ((bits >> 16) & 0xFF) as u8,
        ((bits >> 8) & 0xFF) as u8,
        (bits & 0xFF) as u8,
    ]
}

/// Render a packed address in dotted quad form.
pub fn to_addr(bits: u32) -> Ipv4Addr {
    let [a, b, c, d] = unpack_u32(bits);
    Ipv4Addr::new(a, b, c, d)
}

/// Parse a dotted quad into its octets.
///
/// Exactly four tokens are required and each must be an integer in 0-255.
pub fn parse_octets(address: &str) -> Result<[u8; 4]> {
    let parts: Vec<&str> = address.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(InvalidInput::MalformedAddress(address.to_string()));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = part
            .trim()
            .parse()
            .map_err(|_| InvalidInput::MalformedAddress(address.to_string()))?;
    }
    Ok(octets)
}

/// Parse a decimal prefix length in [0,32].
pub fn parse_prefix(prefix: &str) -> Result<u8> {
    match prefix.trim().parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(InvalidInput::PrefixOutOfRange(prefix.to_string())),
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netlab_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(InvalidInput::PrefixOutOfRange(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// A base address plus prefix length.
///
/// The base is kept exactly as entered; host bits are not cleared.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    /// Packed base address.
    pub base: u32,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::from_str(&s).map_err(de::Error::custom)
    }
}

impl NetworkBlock {
    /// Validate an address and prefix pair entered as text.
    pub fn validate(address: &str, prefix: &str) -> Result<NetworkBlock> {
        let octets = parse_octets(address)?;
        let prefix = parse_prefix(prefix)?;
        let block = NetworkBlock {
            base: pack_octets(octets),
            prefix,
        };
        log::debug!("validate({address}, {prefix}) -> {block}");
        Ok(block)
    }

    /// The base address as entered.
    pub fn addr(&self) -> Ipv4Addr {
        to_addr(self.base)
    }

    /// Number of addresses covered, 2^(32 - prefix).
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Dotted subnet mask for this prefix.
    pub fn mask(&self) -> Ipv4Addr {
        // prefix is bounded by construction
        to_addr(get_cidr_mask(self.prefix).unwrap_or(u32::MAX))
    }
}

impl FromStr for NetworkBlock {
    type Err = InvalidInput;

    /// Parse "a.b.c.d/p".
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 2 {
            return Err(InvalidInput::MalformedAddress(s.to_string()));
        }
        NetworkBlock::validate(parts[0], parts[1])
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix)
    }
}

impl PartialEq for NetworkBlock {
    fn eq(&self, other: &NetworkBlock) -> bool {
        self.base == other.base && self.prefix == other.prefix
    }
}

impl PartialOrd for NetworkBlock {
    fn partial_cmp(&self, other: &NetworkBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
