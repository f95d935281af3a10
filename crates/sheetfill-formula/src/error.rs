//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while tokenizing or translating a formula template
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Malformed formula or anchor text
    #[error("Parse error: {0}")]
    Parse(String),

    /// A translated reference left the addressable range
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Core error (address codec, bounds)
    #[error("Core error: {0}")]
    Core(#[from] sheetfill_core::Error),
}
