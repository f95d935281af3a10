//! Error types for the propagation driver and output resolver

use sheetfill_core::CellAddress;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a propagation run
///
/// Per-row translation failures are not errors at this level; they are
/// recovered inside the driver and reported through the outcome.
#[derive(Debug, Error)]
pub enum PropagateError {
    /// Malformed propagation range
    #[error("Invalid propagation range: {0}")]
    InvalidRange(String),

    /// The anchor sits in the top row, leaving no room for the header label
    #[error("Anchor {0} leaves no room for a header row above it")]
    NoHeaderRow(CellAddress),

    /// Core error (grid writes off the sheet)
    #[error("Core error: {0}")]
    Core(#[from] sheetfill_core::Error),

    /// Formula error other than a recoverable per-row translation failure
    #[error("Formula error: {0}")]
    Formula(#[from] sheetfill_formula::FormulaError),
}

/// Errors that can occur while resolving the output artifact
#[derive(Debug, Error)]
pub enum OutputError {
    /// Overwrite was requested but the original artifact is missing
    #[error("Overwrite requested but source is missing or unreadable: {}", .0.display())]
    MissingSource(PathBuf),

    /// Neither an original path nor an explicit output path was supplied
    #[error("No destination: provide an original path or an output path")]
    NoDestination,

    /// XLSX writing failed
    #[error("XLSX error: {0}")]
    Xlsx(#[from] sheetfill_xlsx::XlsxError),
}
