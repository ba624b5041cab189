//! Output formatting for gap results.
//!
//! This module handles rendering a scan report and its gap:
//! - [`json`] - machine-readable summary
//! - [`terminal`] - plain text sections with coloured headings

mod json;
mod terminal;

pub use json::{gap_summary_json, GapSummary};
pub use terminal::{format_report, format_section};
