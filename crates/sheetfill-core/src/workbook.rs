//! Workbook and sheet types

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::table::Table;
use crate::MAX_SHEET_NAME_LEN;

/// A single sheet: a named grid plus the tables materialized over it
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    /// The sheet's cell contents
    pub grid: Grid,
    tables: Vec<Table>,
}

impl Sheet {
    /// Create a sheet around an existing grid
    pub fn new<S: Into<String>>(name: S, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
            tables: Vec::new(),
        }
    }

    /// The sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tables on this sheet
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }
}

/// A workbook (the output document)
///
/// Holds one or more sheets; table names are unique across the whole workbook,
/// not just within a sheet.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook with no sheets
    pub fn empty() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Create a workbook with one sheet wrapping the given grid
    pub fn from_grid<S: Into<String>>(sheet_name: S, grid: Grid) -> Result<Self> {
        let mut wb = Self::empty();
        wb.add_sheet(sheet_name, grid)?;
        Ok(wb)
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Add a sheet, validating its name
    pub fn add_sheet<S: Into<String>>(&mut self, name: S, grid: Grid) -> Result<usize> {
        let name = name.into();
        validate_sheet_name(&name)?;

        if self.sheets.iter().any(|s| s.name() == name) {
            return Err(Error::InvalidSheetName(format!(
                "sheet '{}' already exists",
                name
            )));
        }

        let index = self.sheets.len();
        self.sheets.push(Sheet::new(name, grid));
        Ok(index)
    }

    /// Attach a table to a sheet, enforcing workbook-wide name uniqueness
    pub fn add_table(&mut self, sheet_index: usize, table: Table) -> Result<()> {
        let collision = self
            .sheets
            .iter()
            .flat_map(|s| s.tables())
            .any(|t| t.name().eq_ignore_ascii_case(table.name()));
        if collision {
            return Err(Error::DuplicateTableName(table.name().to_string()));
        }

        let count = self.sheets.len();
        let sheet = self
            .sheets
            .get_mut(sheet_index)
            .ok_or(Error::SheetOutOfBounds(sheet_index, count))?;

        sheet.tables.push(table);
        Ok(())
    }

    /// Total number of tables across all sheets
    pub fn table_count(&self) -> usize {
        self.sheets.iter().map(|s| s.tables().len()).sum()
    }
}

/// Validate a sheet name the way spreadsheet applications do
fn validate_sheet_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("empty name".into()));
    }

    if name.len() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "'{}' exceeds {} characters",
            name, MAX_SHEET_NAME_LEN
        )));
    }

    if let Some(bad) = name.chars().find(|c| matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\')) {
        return Err(Error::InvalidSheetName(format!(
            "'{}' contains invalid character '{}'",
            name, bad
        )));
    }

    Ok(())
}
