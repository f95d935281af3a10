//! # sheetfill-core
//!
//! Core data structures for the sheetfill formula propagation engine.
//!
//! This crate provides the fundamental types used throughout sheetfill:
//! - [`CellAddress`] and [`CellRange`] - Cell addressing with per-axis absolute flags
//! - [`CellValue`] - Cell contents (numbers, strings, booleans, formula text)
//! - [`Grid`] - A rectangular block of cells with a header row
//! - [`Table`] and [`TableStyle`] - Named, styled table regions
//! - [`Workbook`] and [`Sheet`] - The output document structure
//!
//! ## Example
//!
//! ```rust
//! use sheetfill_core::{CellAddress, Grid, CellValue};
//!
//! let addr = CellAddress::parse("$B2").unwrap();
//! assert_eq!(addr.col, 1);
//! assert!(addr.col_absolute);
//!
//! let mut grid = Grid::from_header(["Name", "Sales"]);
//! grid.push_row(vec![CellValue::string("Widget"), CellValue::Number(12.0)]);
//! assert_eq!(grid.row_count(), 2);
//! ```

pub mod address;
pub mod error;
pub mod grid;
pub mod table;
pub mod value;
pub mod workbook;

// Re-exports for convenience
pub use address::{CellAddress, CellRange};
pub use error::{Error, Result};
pub use grid::Grid;
pub use table::{Table, TableStyle};
pub use value::CellValue;
pub use workbook::{Sheet, Workbook};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
