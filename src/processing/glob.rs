//! Glob resolver: route each token of a mixed target field to CIDR text.

use super::normalize::ip_range_to_cidr;
use crate::error::AddressFormatError;
use crate::models::{split_tokens, CidrBlock, RangeToken};
use itertools::Itertools;

/// Convert a string of globs, CIDR blocks and dash ranges into one CIDR
/// string joined by ", ".
///
/// Plain CIDR blocks are rendered at wildcard-octet granularity: a prefix
/// that is not a multiple of 8 (and no longer than /24) is split at the next
/// octet boundary, the way a glob would spell it.
///
/// # Examples
/// ```
/// use scan_gap_summary::glob_to_ip_range;
/// assert_eq!(glob_to_ip_range("10.0.0.0/23").unwrap(), "10.0.0.0/24, 10.0.1.0/24");
/// assert_eq!(glob_to_ip_range("10.108.0.0/16").unwrap(), "10.108.0.0/16");
/// assert_eq!(glob_to_ip_range("10.0.*.*").unwrap(), "10.0.0.0/16");
/// ```
pub fn glob_to_ip_range(globs: &str) -> Result<String, AddressFormatError> {
    let mut ip_ranges: Vec<String> = Vec::new();
    for token in split_tokens(globs) {
        match RangeToken::classify(token)? {
            RangeToken::Glob(glob) => {
                ip_ranges.extend(glob.to_cidrs().iter().map(CidrBlock::to_string));
            }
            RangeToken::DashRange { .. } => {
                ip_ranges.extend(ip_range_to_cidr(token)?.iter().map(CidrBlock::to_string));
            }
            RangeToken::Cidr(block) => {
                ip_ranges.extend(octet_aligned(block).iter().map(CidrBlock::to_string));
            }
            // Not a glob, passed through for the normalizer to resolve.
            RangeToken::Literal(addr) => ip_ranges.push(addr.to_string()),
        }
    }
    Ok(ip_ranges.iter().join(", "))
}

fn octet_aligned(block: CidrBlock) -> Vec<CidrBlock> {
    let mask = block.mask();
    if mask % 8 == 0 || mask > 24 {
        return vec![block];
    }
    block.split((mask / 8 + 1) * 8)
}
