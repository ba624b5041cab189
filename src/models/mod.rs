//! Domain models for address-range algebra.
//!
//! This module contains the core data structures used throughout the application:
//! - [`CidrBlock`] - canonical IPv4 network in CIDR notation
//! - [`RangeToken`] - one classified token of a range specification
//! - [`AddressSet`] - expanded, de-duplicated addresses

mod address_set;
mod cidr;
mod range_token;

// Re-export public types
pub use address_set::AddressSet;
pub use cidr::{
    broadcast_addr, cut_addr, get_cidr_mask, lo_mask, range_to_cidrs, CidrBlock, MAX_LENGTH,
};
pub use range_token::{split_tokens, GlobPattern, OctetMatch, RangeToken};
