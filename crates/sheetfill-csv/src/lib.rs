//! # sheetfill-csv
//!
//! CSV dataset loader for sheetfill.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
