//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing an XLSX file
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Document cannot be represented in the format
    #[error("Invalid XLSX content: {0}")]
    InvalidContent(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetfill_core::Error),
}
