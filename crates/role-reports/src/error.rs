//! Error type for the strict report path

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unsupported report format: {0:?} (expected CSV or HTML)")]
    UnsupportedFormat(String),

    #[error("unrecognized role: {0:?} (expected ADMIN or USER)")]
    UnrecognizedRole(String),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("failed to write CSV line")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
