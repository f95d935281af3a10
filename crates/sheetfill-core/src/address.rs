//! Cell address and range types
//!
//! Addresses carry per-axis absolute flags (`$B2`, `B$2`, `$B$2`) because the
//! propagation engine shifts relative axes only.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, 701 = ZZ, 702 = AAA)
pub fn column_to_letters(col: u16) -> String {
    let mut letters = String::new();
    let mut n = col as u32 + 1; // bijective base-26 works on 1-based values

    while n > 0 {
        n -= 1;
        letters.insert(0, ((n % 26) as u8 + b'A') as char);
        n /= 26;
    }

    letters
}

/// Convert column letters to an index (A = 0, Z = 25, AA = 26)
pub fn letters_to_column(letters: &str) -> Result<u16> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > MAX_COLS as u32 {
            return Err(Error::InvalidAddress(format!(
                "column '{}' is past the last column",
                letters
            )));
        }
    }

    // Back to 0-based
    let col = col - 1;

    Ok(col as u16)
}

/// A cell address (e.g., "A1", "$B$2")
///
/// Rows and columns are 0-based internally and 1-based/lettered in display,
/// matching the usual A1 notation. The `$` prefix on either axis marks that
/// axis absolute: it does not shift when a formula is copied to another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
    /// Whether the row reference is absolute ($)
    pub row_absolute: bool,
    /// Whether the column reference is absolute ($)
    pub col_absolute: bool,
}

impl CellAddress {
    /// Create a new cell address with both axes relative
    pub fn new(row: u32, col: u16) -> Self {
        Self {
            row,
            col,
            row_absolute: false,
            col_absolute: false,
        }
    }

    /// Create a new cell address with explicit absolute/relative flags
    pub fn with_absolute(row: u32, col: u16, row_absolute: bool, col_absolute: bool) -> Self {
        Self {
            row,
            col,
            row_absolute,
            col_absolute,
        }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetfill_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    ///
    /// let addr = CellAddress::parse("$B2").unwrap();
    /// assert!(addr.col_absolute);
    /// assert!(!addr.row_absolute);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_absolute = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = letters_to_column(&s[col_start..pos])?;

        let row_absolute = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in A1 notation; row 0 is never addressable
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self {
            row,
            col,
            row_absolute,
            col_absolute,
        })
    }

    /// Format as an A1-style string, with `$` markers for absolute axes
    pub fn to_a1_string(&self) -> String {
        let mut out = String::new();

        if self.col_absolute {
            out.push('$');
        }
        out.push_str(&column_to_letters(self.col));

        if self.row_absolute {
            out.push('$');
        }
        out.push_str(&(self.row + 1).to_string());

        out
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:C10")
///
/// Used for table bounding ranges; `start` is the top-left cell and `end` the
/// bottom-right cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalizing corner order
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Check if a cell lies within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Format as an A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(0), "A");
        assert_eq!(column_to_letters(1), "B");
        assert_eq!(column_to_letters(25), "Z");
        assert_eq!(column_to_letters(26), "AA");
        assert_eq!(column_to_letters(27), "AB");
        assert_eq!(column_to_letters(701), "ZZ");
        assert_eq!(column_to_letters(702), "AAA");
        assert_eq!(column_to_letters(16383), "XFD"); // Max Excel column
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 0);
        assert_eq!(letters_to_column("B").unwrap(), 1);
        assert_eq!(letters_to_column("Z").unwrap(), 25);
        assert_eq!(letters_to_column("AA").unwrap(), 26);
        assert_eq!(letters_to_column("ZZ").unwrap(), 701);
        assert_eq!(letters_to_column("AAA").unwrap(), 702);
        assert_eq!(letters_to_column("XFD").unwrap(), 16383);

        // Case insensitive
        assert_eq!(letters_to_column("a").unwrap(), 0);
        assert_eq!(letters_to_column("aa").unwrap(), 26);
    }

    #[test]
    fn test_letters_past_last_column_name_the_letters() {
        for letters in ["XFE", "AAAA"] {
            match letters_to_column(letters) {
                Err(Error::InvalidAddress(msg)) => assert!(msg.contains(letters)),
                other => panic!("expected InvalidAddress, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr.row, 0);
        assert_eq!(addr.col, 0);
        assert!(!addr.row_absolute);
        assert!(!addr.col_absolute);

        let addr = CellAddress::parse("$B$2").unwrap();
        assert_eq!(addr.row, 1);
        assert_eq!(addr.col, 1);
        assert!(addr.row_absolute);
        assert!(addr.col_absolute);

        let addr = CellAddress::parse("$B2").unwrap();
        assert!(addr.col_absolute);
        assert!(!addr.row_absolute);

        let addr = CellAddress::parse("B$2").unwrap();
        assert!(!addr.col_absolute);
        assert!(addr.row_absolute);

        let addr = CellAddress::parse("XFD1048576").unwrap();
        assert_eq!(addr.row, 1048575);
        assert_eq!(addr.col, 16383);
    }

    #[test]
    fn test_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err()); // No row
        assert!(CellAddress::parse("1").is_err()); // No column
        assert!(CellAddress::parse("A0").is_err()); // Row 0 is invalid
        assert!(CellAddress::parse("A1x").is_err()); // Trailing characters
        assert!(CellAddress::parse("A1048577").is_err()); // Row too large
        assert!(CellAddress::parse("XFE1").is_err()); // Column too large
    }

    #[test]
    fn test_round_trip() {
        for text in ["A1", "Z99", "AA100", "$C5", "D$7", "$AB$12", "ZZ702"] {
            let addr = CellAddress::parse(text).unwrap();
            assert_eq!(addr.to_a1_string(), text);
            assert_eq!(CellAddress::parse(&addr.to_a1_string()).unwrap(), addr);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellAddress::with_absolute(0, 0, true, true).to_string(), "$A$1");
    }

    #[test]
    fn test_range() {
        let range = CellRange::from_indices(0, 0, 9, 2);
        assert_eq!(range.to_a1_string(), "A1:C10");
        assert_eq!(range.row_count(), 10);
        assert_eq!(range.col_count(), 3);
        assert!(range.contains(&CellAddress::new(5, 1)));
        assert!(!range.contains(&CellAddress::new(10, 0)));

        // Corners are normalized
        let flipped = CellRange::new(CellAddress::new(9, 2), CellAddress::new(0, 0));
        assert_eq!(flipped, range);
    }
}
