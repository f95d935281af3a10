//! Reference translator
//!
//! Rewrites a formula template for a destination cell. Each axis shifts by the
//! origin-to-destination delta independently, and only when the reference
//! marks that axis relative. Translating A1→B1 and then B1→C1 therefore gives
//! the same text as translating A1→C1 directly.

use crate::error::{FormulaError, FormulaResult};
use crate::template::{FormulaTemplate, TemplateToken};
use sheetfill_core::{CellAddress, MAX_COLS, MAX_ROWS};

impl FormulaTemplate {
    /// Rewrite the template for `destination`, returning the formula body
    /// (no leading `=`)
    ///
    /// Fails with [`FormulaError::InvalidReference`] if any shifted reference
    /// would land before row 1, before column A, or past the sheet bounds.
    /// The caller decides whether to skip the destination or abort; nothing is
    /// clamped silently.
    pub fn translate(&self, destination: CellAddress) -> FormulaResult<String> {
        let delta_row = destination.row as i64 - self.origin().row as i64;
        let delta_col = destination.col as i64 - self.origin().col as i64;

        let mut out = String::new();
        for token in self.tokens() {
            match token {
                TemplateToken::Literal(text) => out.push_str(text),
                TemplateToken::Reference(r) => {
                    let shifted = shift_reference(r, delta_row, delta_col)?;
                    out.push_str(&shifted.to_a1_string());
                }
            }
        }

        Ok(out)
    }
}

fn shift_reference(r: &CellAddress, delta_row: i64, delta_col: i64) -> FormulaResult<CellAddress> {
    let row = if r.row_absolute {
        r.row as i64
    } else {
        r.row as i64 + delta_row
    };

    let col = if r.col_absolute {
        r.col as i64
    } else {
        r.col as i64 + delta_col
    };

    if row < 0 || row >= MAX_ROWS as i64 {
        return Err(FormulaError::InvalidReference(format!(
            "{} shifts to row {} which is off the sheet",
            r.to_a1_string(),
            row + 1
        )));
    }

    if col < 0 || col >= MAX_COLS as i64 {
        return Err(FormulaError::InvalidReference(format!(
            "{} shifts to column {} which is off the sheet",
            r.to_a1_string(),
            col + 1
        )));
    }

    Ok(CellAddress::with_absolute(
        row as u32,
        col as u16,
        r.row_absolute,
        r.col_absolute,
    ))
}
