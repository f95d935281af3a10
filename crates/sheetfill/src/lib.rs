//! # sheetfill
//!
//! Formula template propagation and workbook materialization.
//!
//! Sheetfill takes a tabular dataset, a spreadsheet formula anchored at a
//! reference cell, and a target column; rewrites the formula for every row of
//! a propagation range; wraps the result in a named, styled table; and writes
//! it out as an XLSX workbook, either overwriting the original artifact or
//! creating a new one.
//!
//! ## Example
//!
//! ```rust
//! use sheetfill::prelude::*;
//!
//! // Dataset with a header row and two data rows
//! let mut grid = Grid::from_header(["Name", "Sales"]);
//! grid.push_row(vec![CellValue::string("Widget"), CellValue::Number(10.0)]);
//! grid.push_row(vec![CellValue::string("Gadget"), CellValue::Number(20.0)]);
//!
//! // "=SUM(B2:B2)" authored at B2, filled down a new column C
//! let origin = CellAddress::parse("B2").unwrap();
//! let template = FormulaTemplate::parse("=SUM(B2:B2)", origin);
//! let range = PropagationRange::data_rows(&grid, 2).unwrap();
//!
//! let outcome = propagate(&template, &range, &mut grid, "Result").unwrap();
//! assert_eq!(outcome.written(), 2);
//!
//! // Materialize a named table over the filled grid
//! let table = Table::over(&grid, "ExcelData", TableStyle::Medium9).unwrap();
//! let mut workbook = Workbook::from_grid("Processed", grid).unwrap();
//! workbook.add_table(0, table).unwrap();
//! ```

pub mod error;
pub mod output;
pub mod prelude;
pub mod propagate;
pub mod session;

pub use error::{OutputError, PropagateError};
pub use output::{resolve_output, OutputArtifact};
pub use propagate::{propagate, PropagationOutcome, PropagationRange};
pub use session::SessionStore;

// Re-export the building blocks
pub use sheetfill_core::address::{column_to_letters, letters_to_column};
pub use sheetfill_core::{
    CellAddress, CellRange, CellValue, Grid, Sheet, Table, TableStyle, Workbook,
};
pub use sheetfill_csv::{CsvError, CsvReadOptions, CsvReader};
pub use sheetfill_formula::{FormulaError, FormulaTemplate, TemplateToken};
pub use sheetfill_xlsx::{XlsxError, XlsxWriter};
