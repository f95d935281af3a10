//! Named table regions
//!
//! A table is a bounded, labeled rectangle of a sheet that spreadsheet
//! applications treat as a structured dataset. The bounding range always
//! encloses the header row and every data row with no gaps.

use crate::address::CellRange;
use crate::error::{Error, Result};
use crate::grid::Grid;
use std::fmt;
use std::str::FromStr;

/// Built-in visual themes for tables
///
/// These map onto the spreadsheet application's built-in table styles; they
/// carry no computational weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    /// No styling
    None,
    /// Light theme, white
    Light1,
    /// Light theme, blue accent
    Light9,
    /// Medium theme, blue accent
    Medium2,
    /// Medium theme, banded blue (the classic default)
    #[default]
    Medium9,
    /// Dark theme
    Dark1,
}

impl TableStyle {
    /// The style name as written into the file format
    pub fn xlsx_name(&self) -> Option<&'static str> {
        match self {
            TableStyle::None => None,
            TableStyle::Light1 => Some("TableStyleLight1"),
            TableStyle::Light9 => Some("TableStyleLight9"),
            TableStyle::Medium2 => Some("TableStyleMedium2"),
            TableStyle::Medium9 => Some("TableStyleMedium9"),
            TableStyle::Dark1 => Some("TableStyleDark1"),
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStyle::None => write!(f, "none"),
            TableStyle::Light1 => write!(f, "light1"),
            TableStyle::Light9 => write!(f, "light9"),
            TableStyle::Medium2 => write!(f, "medium2"),
            TableStyle::Medium9 => write!(f, "medium9"),
            TableStyle::Dark1 => write!(f, "dark1"),
        }
    }
}

impl FromStr for TableStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(TableStyle::None),
            "light1" => Ok(TableStyle::Light1),
            "light9" => Ok(TableStyle::Light9),
            "medium2" => Ok(TableStyle::Medium2),
            "medium9" => Ok(TableStyle::Medium9),
            "dark1" => Ok(TableStyle::Dark1),
            other => Err(Error::UnknownTableStyle(other.to_string())),
        }
    }
}

/// A named, styled table region
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    range: CellRange,
    style: TableStyle,
    /// Alternate-row shading
    pub banded_rows: bool,
    /// Alternate-column shading
    pub banded_columns: bool,
    /// Emphasize the first column
    pub first_column: bool,
    /// Emphasize the last column
    pub last_column: bool,
}

impl Table {
    /// Materialize a table over a whole grid
    ///
    /// The grid must be rectangular and non-empty; the bounding range runs
    /// from A1 to the last populated row and column.
    pub fn over(grid: &Grid, name: &str, style: TableStyle) -> Result<Self> {
        grid.check_rectangular()?;

        if grid.is_empty() || grid.column_count() == 0 {
            return Err(Error::EmptyGrid);
        }

        validate_table_name(name)?;

        let range = CellRange::from_indices(0, 0, grid.row_count() - 1, grid.column_count() - 1);

        Ok(Self {
            name: name.to_string(),
            range,
            style,
            banded_rows: true,
            banded_columns: false,
            first_column: false,
            last_column: false,
        })
    }

    /// The table's name (unique within a workbook)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bounding range, header row included
    pub fn range(&self) -> CellRange {
        self.range
    }

    /// The visual theme
    pub fn style(&self) -> TableStyle {
        self.style
    }
}

/// Validate a table name: non-empty, no spaces, must not start with a digit
fn validate_table_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidTableName("empty name".into()));
    }

    let first_ok = name
        .chars()
        .next()
        .map_or(false, |c| c.is_alphabetic() || c == '_');
    if !first_ok {
        return Err(Error::InvalidTableName(format!(
            "'{}' must start with a letter or underscore",
            name
        )));
    }

    if let Some(bad) = name.chars().find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '.')) {
        return Err(Error::InvalidTableName(format!(
            "'{}' contains invalid character '{}'",
            name, bad
        )));
    }

    Ok(())
}
