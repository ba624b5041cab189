//! IPv4 CIDR block and address arithmetic.
//!
//! Provides [`CidrBlock`], a canonical (network address, prefix length) pair,
//! along with the bit-level helpers used to split and merge address ranges.

use crate::error::AddressFormatError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are treated as /32.
///
/// # Examples
/// ```
/// use scan_gap_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast (highest) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
///
/// This is the largest block `ip` can be the network address of.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// Minimal set of CIDR blocks exactly covering the inclusive interval
/// `[start, end]`, in ascending order. Empty when `start > end`.
pub fn range_to_cidrs(start: Ipv4Addr, end: Ipv4Addr) -> Vec<CidrBlock> {
    let mut blocks = Vec::new();
    let end = u32::from(end) as u64;
    let mut next = u32::from(start) as u64;

    while next <= end {
        let addr = Ipv4Addr::from(next as u32);
        // Biggest aligned block at `next`, shrunk until it stops past `end`.
        let mut mask = lo_mask(addr);
        while next + block_size(mask) - 1 > end {
            mask += 1;
        }
        blocks.push(CidrBlock { addr, mask });
        next += block_size(mask);
    }
    blocks
}

fn block_size(mask: u8) -> u64 {
    1u64 << (MAX_LENGTH - mask.min(MAX_LENGTH))
}

/// IPv4 network in CIDR notation.
///
/// Always canonical: host bits of `addr` are zero for the prefix `mask`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    addr: Ipv4Addr,
    mask: u8,
}

impl CidrBlock {
    /// Create a block, zeroing any host bits of `addr`.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<CidrBlock, AddressFormatError> {
        if mask > MAX_LENGTH {
            return Err(AddressFormatError::new(
                &format!("{addr}/{mask}"),
                "prefix length is too long",
            ));
        }
        Ok(CidrBlock {
            addr: cut_addr(addr, mask),
            mask,
        })
    }

    /// Single-address block (/32).
    pub fn host(addr: Ipv4Addr) -> CidrBlock {
        CidrBlock {
            addr,
            mask: MAX_LENGTH,
        }
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        block_size(self.mask)
    }

    pub fn is_host(&self) -> bool {
        self.mask == MAX_LENGTH
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        cut_addr(ip, self.mask) == self.addr
    }

    /// Every address of the block in ascending order.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        (u32::from(self.lo())..=u32::from(self.hi())).map(Ipv4Addr::from)
    }

    /// Split into sub-blocks of prefix `len`. Blocks already at or below
    /// that size are returned unchanged.
    pub fn split(&self, len: u8) -> Vec<CidrBlock> {
        if len <= self.mask || len > MAX_LENGTH {
            return vec![*self];
        }
        let step = block_size(len);
        let first = u32::from(self.addr) as u64;
        (0..self.size() / step)
            .map(|i| CidrBlock {
                addr: Ipv4Addr::from((first + i * step) as u32),
                mask: len,
            })
            .collect()
    }

    /// CIDR string with single-host blocks rendered as the bare address.
    pub fn display_compact(&self) -> String {
        if self.is_host() {
            self.addr.to_string()
        } else {
            self.to_string()
        }
    }
}

impl FromStr for CidrBlock {
    type Err = AddressFormatError;

    /// Parse "A.B.C.D/N" or a bare address (taken as /32).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (addr_part, mask_part) = match token.split_once('/') {
            Some((addr, mask)) => (addr, Some(mask)),
            None => (token, None),
        };
        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| AddressFormatError::new(token, format!("invalid address {addr_part}")))?;
        let mask = match mask_part {
            Some(mask) => mask
                .parse::<u8>()
                .map_err(|_| AddressFormatError::new(token, format!("invalid prefix {mask}")))?,
            None => MAX_LENGTH,
        };
        if mask > MAX_LENGTH {
            return Err(AddressFormatError::new(token, "prefix length is too long"));
        }
        CidrBlock::new(addr, mask)
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
