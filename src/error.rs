//! Error types for range parsing and scan report reading.

use std::path::PathBuf;

use thiserror::Error;

/// A token is not a valid address, CIDR block, dash range, or glob.
///
/// Never recovered internally: a skipped token would corrupt the diff.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid address range '{token}': {reason}")]
pub struct AddressFormatError {
    /// The offending token, trimmed.
    pub token: String,
    /// Why it was rejected.
    pub reason: String,
}

impl AddressFormatError {
    pub fn new(token: &str, reason: impl Into<String>) -> Self {
        AddressFormatError {
            token: token.trim().to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while reading a scan report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report file could not be read.
    #[error("Failed to read scan report '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report header carries no TARGET key.
    #[error("No TARGET key found in scan report '{path}'")]
    MissingTarget { path: String },

    /// The target or host list holds a malformed address.
    #[error(transparent)]
    Address(#[from] AddressFormatError),
}
