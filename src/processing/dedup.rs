//! Range expander: CIDR blocks to individual, de-duplicated addresses.

use crate::models::{AddressSet, CidrBlock};

/// Return every address of `ip_range`, in block order then ascending
/// within each block. Addresses covered by more than one block are kept at
/// their first occurrence.
///
/// Performs full enumeration, so memory grows with the number of addresses
/// covered. A /8 is already 16M entries.
///
/// # Examples
/// ```
/// use scan_gap_summary::{ip_range_expand, CidrBlock};
/// let blocks: Vec<CidrBlock> = vec!["10.0.0.0/31".parse().unwrap(), "10.0.0.3/32".parse().unwrap()];
/// let ips: Vec<String> = ip_range_expand(&blocks).iter().map(|ip| ip.to_string()).collect();
/// assert_eq!(ips, ["10.0.0.0", "10.0.0.1", "10.0.0.3"]);
/// ```
pub fn ip_range_expand(ip_range: &[CidrBlock]) -> AddressSet {
    ip_range.iter().flat_map(CidrBlock::hosts).collect()
}
