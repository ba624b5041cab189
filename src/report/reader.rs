//! Loading scan reports from disk.

use super::parse::{parse_scan_report, ScanReport};
use crate::error::ReportError;
use std::path::Path;

/// Read and parse the scan report at `path`.
///
/// # Returns
/// * `Ok(ScanReport)` - targets and discovered hosts of the report
/// * `Err` - if the file is unreadable or carries no TARGET key
pub fn read_scan_report(path: &Path) -> Result<ScanReport, ReportError> {
    log::info!("Reading scan report: {}", path.display());
    let xml = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_scan_report(&xml, &path.display().to_string())?;
    log::info!(
        "Report {} lists {} discovered hosts",
        path.display(),
        report.discovered.len()
    );
    Ok(report)
}
