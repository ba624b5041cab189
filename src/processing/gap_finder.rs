//! Gap finding between a target range and the hosts actually scanned.
//!
//! Identifies the addresses of a source range that a remove range does not
//! cover, re-compacted into as few CIDR blocks as alignment allows.

use super::dedup::ip_range_expand;
use super::normalize::ip_range_to_cidr;
use crate::error::AddressFormatError;
use crate::models::CidrBlock;

/// Return `source_ip_range` after excluding `remove_ip_range`, as CIDR
/// blocks in ascending order.
///
/// Addresses in `remove_ip_range` outside the source are ignored.
pub fn ip_range_diff_blocks(
    source_ip_range: &str,
    remove_ip_range: &str,
) -> Result<Vec<CidrBlock>, AddressFormatError> {
    let source_cidrs = ip_range_to_cidr(source_ip_range)?;
    let remove_cidrs = ip_range_to_cidr(remove_ip_range)?;

    let mut remaining = ip_range_expand(&source_cidrs);
    remaining.subtract(&ip_range_expand(&remove_cidrs));

    Ok(remaining.to_cidrs())
}

/// Return `source_ip_range` after excluding `remove_ip_range`, rendered as
/// a comma-joined CIDR string.
///
/// Single-host blocks are rendered as bare addresses. An empty result is
/// the empty string.
///
/// # Examples
/// ```
/// use scan_gap_summary::ip_range_diff;
/// assert_eq!(ip_range_diff("10.0.0.0/30", "10.0.0.1,10.0.0.2").unwrap(), "10.0.0.0,10.0.0.3");
/// assert_eq!(ip_range_diff("10.0.0.0/24", "10.0.0.0/24").unwrap(), "");
/// ```
pub fn ip_range_diff(
    source_ip_range: &str,
    remove_ip_range: &str,
) -> Result<String, AddressFormatError> {
    let blocks = ip_range_diff_blocks(source_ip_range, remove_ip_range)?;
    Ok(format_cidrs(&blocks))
}

/// Format CIDR blocks as a comma-separated string, hosts without "/32".
pub fn format_cidrs(cidrs: &[CidrBlock]) -> String {
    cidrs
        .iter()
        .map(CidrBlock::display_compact)
        .collect::<Vec<String>>()
        .join(",")
}
