//! Scan report input.
//!
//! This module turns a vulnerability scan report into the two range
//! specifications the gap finder needs:
//! - [`parse`] - extraction of the target field and discovered hosts
//! - [`reader`] - loading a report from disk

mod parse;
mod reader;

pub use parse::{parse_scan_report, ScanReport};
pub use reader::read_scan_report;
