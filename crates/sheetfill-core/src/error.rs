//! Error types for sheetfill-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetfill-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Grid rows are not all the same width
    #[error("Inconsistent grid: row {row} has {actual} columns, header has {expected}")]
    InconsistentGrid {
        row: u32,
        expected: usize,
        actual: usize,
    },

    /// Table name already used within the workbook
    #[error("Table name already exists: {0}")]
    DuplicateTableName(String),

    /// Invalid table name
    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    /// Unknown table style name
    #[error("Unknown table style: {0}")]
    UnknownTableStyle(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Materializing a table over an empty grid
    #[error("Cannot materialize a table over an empty grid")]
    EmptyGrid,
}
