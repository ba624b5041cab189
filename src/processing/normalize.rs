//! Notation normalizer: range specification to canonical CIDR blocks.

use crate::error::AddressFormatError;
use crate::models::{split_tokens, CidrBlock, RangeToken};

/// Convert a comma-separated range specification into CIDR blocks.
///
/// Tokens may be CIDR blocks, dash ranges, globs or bare addresses. Dash
/// ranges that are not CIDR-aligned yield several blocks, e.g.
/// "10.182.71.0-10.182.75.255" gives 10.182.71.0/24 and 10.182.72.0/22.
/// Token order is preserved; blocks are not merged across tokens.
///
/// # Errors
/// The first malformed token fails the whole specification.
pub fn ip_range_to_cidr(spec: &str) -> Result<Vec<CidrBlock>, AddressFormatError> {
    let mut blocks = Vec::new();
    for token in split_tokens(spec) {
        blocks.extend(RangeToken::classify(token)?.to_cidrs());
    }
    Ok(blocks)
}
