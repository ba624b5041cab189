//! Extraction of targets and discovered hosts from a scan report.

use crate::error::{AddressFormatError, ReportError};
use crate::models::CidrBlock;
use crate::processing::ip_range_diff_blocks;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref TARGET_RE: Regex =
        Regex::new(r#"(?s)<KEY\s+value="TARGET"\s*>(.*?)</KEY>"#).expect("Invalid Regex?");
    static ref CDATA_RE: Regex = Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("Invalid Regex?");
    static ref IP_RE: Regex =
        Regex::new(r#"<IP\b[^>]*?\bvalue="([^"]*)""#).expect("Invalid Regex?");
}

/// Target specification and discovered hosts of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Comma-separated CIDR/dash/glob target field, as written in the header.
    pub targets: String,
    /// Host addresses with results, in document order.
    pub discovered: Vec<String>,
}

impl ScanReport {
    /// Discovered hosts as one comma-separated specification.
    pub fn scanned(&self) -> String {
        self.discovered.join(",")
    }

    /// Target addresses that never show up among the discovered hosts.
    pub fn not_scanned(&self) -> Result<Vec<CidrBlock>, AddressFormatError> {
        log::debug!("targets = {}", self.targets);
        log::debug!("scanned = {}", self.scanned());
        let gap = ip_range_diff_blocks(&self.targets, &self.scanned())?;
        log::info!(
            "{} hosts discovered, {} blocks not scanned",
            self.discovered.len(),
            gap.len()
        );
        Ok(gap)
    }
}

/// Parse the XML text of a scan report.
///
/// `source` names the report in errors.
pub fn parse_scan_report(xml: &str, source: &str) -> Result<ScanReport, ReportError> {
    let raw_target = TARGET_RE
        .captures(xml)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ReportError::MissingTarget {
            path: source.to_string(),
        })?;
    let targets = CDATA_RE.replace_all(raw_target, "$1").trim().to_string();

    let discovered: Vec<String> = IP_RE
        .captures_iter(xml)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();
    if discovered.is_empty() {
        log::warn!("No discovered hosts in {source}, every target counts as not scanned");
    }

    Ok(ScanReport {
        targets,
        discovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SCAN value="scan/1350000000.12345">
<HEADER>
<KEY value="USERNAME">user_ab</KEY>
<KEY value="TARGET"><![CDATA[10.0.0.0/30,10.0.1.0-10.0.1.3]]></KEY>
<KEY value="EXCLUDED_TARGET"><![CDATA[10.0.2.1]]></KEY>
</HEADER>
<IP value="10.0.0.1" name="host1.example.com">
<OS><![CDATA[Linux 2.6]]></OS>
</IP>
<IP name="host2.example.com" value="10.0.1.2">
</IP>
</SCAN>
"#;

    #[test]
    fn test_parse_scan_report() {
        let report = parse_scan_report(REPORT, "inline").unwrap();
        assert_eq!(report.targets, "10.0.0.0/30,10.0.1.0-10.0.1.3");
        assert_eq!(report.discovered, vec!["10.0.0.1", "10.0.1.2"]);
        assert_eq!(report.scanned(), "10.0.0.1,10.0.1.2");
    }

    #[test]
    fn test_not_scanned() {
        let report = parse_scan_report(REPORT, "inline").unwrap();
        let gap: Vec<String> = report
            .not_scanned()
            .unwrap()
            .iter()
            .map(|b| b.display_compact())
            .collect();
        assert_eq!(
            gap,
            vec!["10.0.0.0", "10.0.0.2/31", "10.0.1.0/31", "10.0.1.3"]
        );
    }

    #[test]
    fn test_target_without_cdata() {
        let xml = r#"<HEADER><KEY value="TARGET"> 10.0.0.* </KEY></HEADER>"#;
        let report = parse_scan_report(xml, "inline").unwrap();
        assert_eq!(report.targets, "10.0.0.*");
        assert!(report.discovered.is_empty());
    }

    #[test]
    fn test_missing_target() {
        let err = parse_scan_report("<SCAN><HEADER></HEADER></SCAN>", "empty.xml").unwrap_err();
        assert!(matches!(err, ReportError::MissingTarget { .. }));
        assert!(err.to_string().contains("empty.xml"));
    }

    #[test]
    fn test_ip_list_tag_is_not_a_host() {
        let xml = r#"<KEY value="TARGET">10.0.0.1</KEY><IP_LIST value="10.9.9.9"/><IP value="10.0.0.1"/>"#;
        let report = parse_scan_report(xml, "inline").unwrap();
        assert_eq!(report.discovered, vec!["10.0.0.1"]);
    }
}
