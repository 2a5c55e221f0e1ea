use thiserror::Error;

use crate::roster::MemberId;

/// Failures of the pairwise adjustment engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustmentError {
    #[error("unknown reference member {0}: not in the current roster")]
    UnknownReference(MemberId),
    #[error("reference member {0} has no numeric rating")]
    UnratedReference(MemberId),
}

/// Add context to file read errors
pub fn read_context(path: &std::path::Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
