//! CSV reader
//!
//! The concrete "external loader": reads a CSV dataset into a [`Grid`] whose
//! row 0 is the header row. The csv crate rejects ragged records, so a loaded
//! grid is always rectangular.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetfill_core::{CellValue, Grid};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a grid
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .from_reader(reader);

        let mut grid = Grid::new();

        if options.has_header {
            let headers = csv_reader.headers()?.clone();
            grid.push_row(headers.iter().map(CellValue::string).collect());
        }

        for result in csv_reader.records() {
            let record = result?;

            // Synthesize a header when the file has none, so row 0 is always
            // a header row
            if grid.is_empty() {
                grid.push_row(
                    (1..=record.len())
                        .map(|i| CellValue::string(format!("Column{}", i)))
                        .collect(),
                );
            }

            let cells = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();

            grid.push_row(cells);
        }

        Ok(grid)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        match field.to_lowercase().as_str() {
            "true" | "yes" => return CellValue::Boolean(true),
            "false" | "no" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = field.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::string(field)
    }
}
