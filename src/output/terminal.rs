//! Terminal output utilities.
//!
//! Mirrors the classic report layout: targets, hosts scanned, hosts not
//! scanned, each as a heading followed by the range string.

use crate::models::CidrBlock;
use crate::processing::format_cidrs;
use crate::report::ScanReport;
use colored::Colorize;

/// Format a heading and its value as a block followed by a blank line.
///
/// # Arguments
/// * `title` - The heading, printed bold
/// * `value` - The body text
pub fn format_section(title: &str, value: &str) -> String {
    format!("{}\n{value}\n", format!("{title}:").bold())
}

/// Render the full text report for `report` and its not-scanned `gap`.
pub fn format_report(report: &ScanReport, gap: &[CidrBlock]) -> String {
    let not_scanned = format_cidrs(gap);
    let not_scanned = if gap.is_empty() {
        "(none)".green().to_string()
    } else {
        not_scanned.yellow().to_string()
    };
    [
        format_section("IP targets", &report.targets),
        format_section("IPs scanned", &report.scanned()),
        format_section("IPs not scanned", &not_scanned),
    ]
    .join("\n")
}
