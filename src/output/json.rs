//! JSON output of a gap computation.

use crate::models::CidrBlock;
use crate::report::ScanReport;
use serde::Serialize;

/// Serializable summary of one report.
#[derive(Debug, Serialize)]
pub struct GapSummary<'a> {
    pub targets: &'a str,
    pub scanned: &'a [String],
    /// Compact block strings, hosts without "/32".
    pub not_scanned: Vec<String>,
}

impl<'a> GapSummary<'a> {
    pub fn new(report: &'a ScanReport, gap: &[CidrBlock]) -> Self {
        GapSummary {
            targets: &report.targets,
            scanned: &report.discovered,
            not_scanned: gap.iter().map(CidrBlock::display_compact).collect(),
        }
    }
}

/// Pretty-printed JSON summary.
pub fn gap_summary_json(report: &ScanReport, gap: &[CidrBlock]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GapSummary::new(report, gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_summary_json() {
        let report = ScanReport {
            targets: "10.0.0.0/30".to_string(),
            discovered: vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
        };
        let gap: Vec<CidrBlock> = vec!["10.0.0.0".parse().unwrap(), "10.0.0.3".parse().unwrap()];
        let json = gap_summary_json(&report, &gap).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["targets"], "10.0.0.0/30");
        assert_eq!(value["scanned"][1], "10.0.0.2");
        assert_eq!(value["not_scanned"], serde_json::json!(["10.0.0.0", "10.0.0.3"]));
    }
}
