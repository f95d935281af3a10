//! Prelude module - common imports for sheetfill users
//!
//! ```rust
//! use sheetfill::prelude::*;
//! ```

pub use crate::{
    // Addressing
    CellAddress,
    CellRange,
    // Cell and grid types
    CellValue,
    // CSV input
    CsvError,
    CsvReadOptions,
    CsvReader,
    // Formula types
    FormulaError,
    FormulaTemplate,
    Grid,
    // Error types
    OutputError,
    PropagateError,
    // Driver types
    PropagationOutcome,
    PropagationRange,
    // Session boundary
    SessionStore,
    Sheet,
    // Table types
    Table,
    TableStyle,
    TemplateToken,
    // Main types
    Workbook,
    // I/O types
    XlsxError,
    XlsxWriter,
    // Output resolution
    OutputArtifact,
    propagate,
    resolve_output,
};
