//! Scan gap summary.
//!
//! Computes which addresses of a scan's declared target range were never
//! scanned: the target specification (CIDR blocks, dash ranges, globs)
//! minus the discovered-host list, re-compacted into CIDR blocks.
//!
//! The range algebra in [`processing`] is pure and does not log; the
//! report reader and binary log at the boundary.

pub mod cli;
pub mod error;
mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod report;

use std::error::Error;

pub use error::{AddressFormatError, ReportError};
pub use logging::init_logging;
pub use models::{AddressSet, CidrBlock, RangeToken};
pub use processing::{
    format_cidrs, glob_to_ip_range, ip_range_diff, ip_range_diff_blocks, ip_range_expand,
    ip_range_to_cidr,
};
pub use report::{parse_scan_report, read_scan_report, ScanReport};

/// Read the report named on the command line and render its gap, as text
/// sections or JSON depending on `cli.json`.
pub fn run(cli: &cli::Cli) -> Result<String, Box<dyn Error>> {
    let report = read_scan_report(&cli.report)?;
    let gap = report.not_scanned()?;
    log::debug!("not scanned = {}", format_cidrs(&gap));

    if cli.json {
        Ok(output::gap_summary_json(&report, &gap)?)
    } else {
        Ok(output::format_report(&report, &gap))
    }
}
