//! Address-range algebra.
//!
//! This module contains the pure functions of the gap pipeline:
//! - [`normalize`] - range specification to CIDR blocks
//! - [`glob`] - dispatch of mixed glob/CIDR/dash target fields
//! - [`dedup`] - expansion of CIDR blocks to unique addresses
//! - [`gap_finder`] - source minus remove, re-compacted to CIDR

mod dedup;
mod gap_finder;
mod glob;
mod normalize;

// Re-export public functions
pub use dedup::ip_range_expand;
pub use gap_finder::{format_cidrs, ip_range_diff, ip_range_diff_blocks};
pub use glob::glob_to_ip_range;
pub use normalize::ip_range_to_cidr;
