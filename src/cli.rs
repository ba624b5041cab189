//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

/// Scan gap summary: report which target addresses a scan never reached.
///
/// Reads a vulnerability scan report, takes the declared target ranges
/// minus the hosts that appear in the results, and prints the difference
/// as compact CIDR blocks.
#[derive(Debug, Parser)]
#[command(name = "scan-gap-summary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the scan report (XML)
    pub report: PathBuf,

    /// Print a JSON summary instead of text sections
    #[arg(long)]
    pub json: bool,

    /// log4rs configuration file
    #[arg(
        long = "log-config",
        env = "SCAN_GAP_LOG_CONFIG",
        default_value = "log4rs.yml"
    )]
    pub log_config: PathBuf,

    /// Log at debug level when no log configuration file is found
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_report() {
        let cli = Cli::try_parse_from(["scan-gap-summary", "scan.xml"]).unwrap();
        assert_eq!(cli.report, PathBuf::from("scan.xml"));
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "scan-gap-summary",
            "--json",
            "-v",
            "--log-config",
            "conf/log.yml",
            "scan.xml",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.log_config, PathBuf::from("conf/log.yml"));
    }

    #[test]
    fn test_report_is_required() {
        assert!(Cli::try_parse_from(["scan-gap-summary"]).is_err());
        assert!(Cli::try_parse_from(["scan-gap-summary", "a.xml", "b.xml"]).is_err());
    }
}
