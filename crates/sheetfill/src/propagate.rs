//! Propagation driver
//!
//! Applies a formula template across a run of rows: one header label above the
//! first data row, one translated formula per row in the range. Translation
//! failures are recovered per row; the affected cells stay empty and their row
//! indices are reported back.

use crate::error::PropagateError;
use sheetfill_core::{CellAddress, CellValue, Grid, MAX_COLS, MAX_ROWS};
use sheetfill_formula::{FormulaError, FormulaTemplate};

/// The contiguous run of rows a template is applied across
///
/// Rows are 0-based and inclusive on both ends, like everywhere else in the
/// engine's internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationRange {
    start_row: u32,
    end_row: u32,
    target_col: u16,
}

impl PropagationRange {
    /// Create a range; `start_row` must not exceed `end_row`
    pub fn new(start_row: u32, end_row: u32, target_col: u16) -> Result<Self, PropagateError> {
        if start_row > end_row {
            return Err(PropagateError::InvalidRange(format!(
                "start row {} is after end row {}",
                start_row + 1,
                end_row + 1
            )));
        }
        if end_row >= MAX_ROWS {
            return Err(PropagateError::InvalidRange(format!(
                "end row {} is off the sheet",
                end_row + 1
            )));
        }
        if target_col >= MAX_COLS {
            return Err(PropagateError::InvalidRange(format!(
                "target column {} is off the sheet",
                target_col + 1
            )));
        }

        Ok(Self {
            start_row,
            end_row,
            target_col,
        })
    }

    /// Cover every data row of a grid (row 1 through the last row)
    pub fn data_rows(grid: &Grid, target_col: u16) -> Result<Self, PropagateError> {
        if grid.row_count() < 2 {
            return Err(PropagateError::InvalidRange(
                "grid has no data rows below the header".into(),
            ));
        }
        Self::new(1, grid.row_count() - 1, target_col)
    }

    /// First row of the range
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// Last row of the range (inclusive)
    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    /// The column formulas are written into
    pub fn target_col(&self) -> u16 {
        self.target_col
    }

    /// Number of rows covered
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }
}

/// What a propagation run did
#[derive(Debug, Clone, PartialEq)]
pub enum PropagationOutcome {
    /// The template showed no evidence of being a formula; nothing was
    /// written. The raw text is carried for the caller to place as a literal.
    NotPropagatable {
        /// The template's reassembled text
        text: String,
    },
    /// Formulas were written (possibly with some rows skipped)
    Applied {
        /// Where the header label went
        header: CellAddress,
        /// Number of formula cells written
        written: u32,
        /// Rows whose translated reference left the sheet; their cells are empty
        skipped: Vec<u32>,
    },
}

impl PropagationOutcome {
    /// Did any formula cells get written?
    pub fn is_applied(&self) -> bool {
        matches!(self, PropagationOutcome::Applied { .. })
    }

    /// Number of formula cells written
    pub fn written(&self) -> u32 {
        match self {
            PropagationOutcome::Applied { written, .. } => *written,
            PropagationOutcome::NotPropagatable { .. } => 0,
        }
    }

    /// Rows left empty because their translation failed
    pub fn skipped(&self) -> &[u32] {
        match self {
            PropagationOutcome::Applied { skipped, .. } => skipped,
            PropagationOutcome::NotPropagatable { .. } => &[],
        }
    }
}

/// Apply `template` to every row of `range`, writing into `grid`
///
/// Writes `header_label` once at `(origin.row - 1, target_col)`, then one
/// translated formula per row. A row whose translation lands outside the
/// addressable range is skipped (cell left empty, row index recorded) and
/// propagation continues; structural problems (anchor in the top row, writes
/// off the sheet) abort the whole run.
pub fn propagate(
    template: &FormulaTemplate,
    range: &PropagationRange,
    grid: &mut Grid,
    header_label: &str,
) -> Result<PropagationOutcome, PropagateError> {
    if !template.is_propagatable() {
        log::warn!(
            "template '{}' has no formula evidence; skipping propagation",
            template.text()
        );
        return Ok(PropagationOutcome::NotPropagatable {
            text: template.text(),
        });
    }

    let origin = template.origin();
    if origin.row == 0 {
        return Err(PropagateError::NoHeaderRow(origin));
    }

    let header = CellAddress::new(origin.row - 1, range.target_col());
    grid.set(header.row, header.col, CellValue::string(header_label))?;

    let mut written = 0u32;
    let mut skipped = Vec::new();

    for row in range.start_row()..=range.end_row() {
        // The destination stays in the anchor's column, so only the row axis
        // shifts; the result lands in the target column regardless
        let destination = CellAddress::new(row, origin.col);

        match template.translate(destination) {
            Ok(body) => {
                grid.set(row, range.target_col(), CellValue::formula(body))?;
                written += 1;
            }
            Err(FormulaError::InvalidReference(reason)) => {
                // Best effort per row: leave the cell empty and move on
                log::warn!("row {}: {}; cell left empty", row + 1, reason);
                grid.set(row, range.target_col(), CellValue::Empty)?;
                skipped.push(row);
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(PropagationOutcome::Applied {
        header,
        written,
        skipped,
    })
}
