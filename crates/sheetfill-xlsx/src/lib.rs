//! # sheetfill-xlsx
//!
//! XLSX (Office Open XML) writer for sheetfill.
//!
//! Writes a [`sheetfill_core::Workbook`] as a binary `.xlsx` package: one XML
//! part per sheet, a minimal style sheet, and one table part per materialized
//! table. There is no reader; loading source data is the CSV crate's (or the
//! embedding application's) job.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetfill_core::{Grid, Workbook};
//! use sheetfill_xlsx::XlsxWriter;
//!
//! let grid = Grid::from_header(["Name", "Sales"]);
//! let workbook = Workbook::from_grid("Processed", grid).unwrap();
//! XlsxWriter::write_file(&workbook, "out.xlsx").unwrap();
//! ```

mod error;
mod writer;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
