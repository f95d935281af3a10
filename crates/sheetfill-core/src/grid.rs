//! Rectangular grid of cell values
//!
//! Row 0 is the header row. Every data row must end up the same width as the
//! header row before a table can be materialized over the grid; the grid
//! itself tolerates ragged rows while it is being built.

use crate::error::{Error, Result};
use crate::value::CellValue;
use crate::{MAX_COLS, MAX_ROWS};

/// A dense, ordered block of cell values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a grid with only a header row
    pub fn from_header<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![headers.into_iter().map(|h| CellValue::string(h)).collect()],
        }
    }

    /// Create a grid from pre-built rows
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Append a row of cells
    pub fn push_row(&mut self, cells: Vec<CellValue>) {
        self.rows.push(cells);
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Width of the header row (0 for an empty grid)
    pub fn column_count(&self) -> u16 {
        self.rows.first().map_or(0, |r| r.len()) as u16
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell, if the coordinates fall inside a stored row
    pub fn get(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.rows.get(row as usize)?.get(col as usize)
    }

    /// Get a cell value, treating missing cells as [`CellValue::Empty`]
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.get(row, col).cloned().unwrap_or(CellValue::Empty)
    }

    /// Set a cell value, growing the grid as needed
    ///
    /// Missing rows are appended and the target row is padded with empty cells
    /// up to the target column, so writing a whole column one row at a time
    /// keeps the grid rectangular.
    pub fn set(&mut self, row: u32, col: u16, value: CellValue) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }

        while self.rows.len() <= row as usize {
            self.rows.push(Vec::new());
        }

        let cells = &mut self.rows[row as usize];
        if cells.len() <= col as usize {
            cells.resize(col as usize + 1, CellValue::Empty);
        }
        cells[col as usize] = value;

        Ok(())
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Verify that every row matches the header row's width
    ///
    /// The first offending row is reported; the grid is never repaired
    /// (padded or truncated) here.
    pub fn check_rectangular(&self) -> Result<()> {
        let expected = self.rows.first().map_or(0, |r| r.len());

        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::InconsistentGrid {
                    row: i as u32,
                    expected,
                    actual: row.len(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_header() {
        let grid = Grid::from_header(["Name", "Sales"]);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.value_at(0, 0), CellValue::string("Name"));
    }

    #[test]
    fn test_set_pads_with_empty() {
        let mut grid = Grid::from_header(["A", "B"]);
        grid.set(2, 1, CellValue::Number(5.0)).unwrap();

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.value_at(1, 0), CellValue::Empty);
        assert_eq!(grid.value_at(2, 0), CellValue::Empty);
        assert_eq!(grid.value_at(2, 1), CellValue::Number(5.0));
    }

    #[test]
    fn test_set_bounds() {
        let mut grid = Grid::new();
        assert!(grid.set(crate::MAX_ROWS, 0, CellValue::Empty).is_err());
    }

    #[test]
    fn test_rectangularity() {
        let mut grid = Grid::from_header(["A", "B"]);
        grid.push_row(vec![CellValue::Number(1.0), CellValue::Number(2.0)]);
        assert!(grid.check_rectangular().is_ok());

        grid.push_row(vec![CellValue::Number(3.0)]);
        match grid.check_rectangular() {
            Err(Error::InconsistentGrid {
                row,
                expected,
                actual,
            }) => {
                assert_eq!(row, 2);
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected InconsistentGrid, got {:?}", other),
        }
    }

    #[test]
    fn test_value_at_out_of_range() {
        let grid = Grid::from_header(["A"]);
        assert_eq!(grid.value_at(5, 5), CellValue::Empty);
    }
}
