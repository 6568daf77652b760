//! Column letters and A1-style cell references.

use std::fmt;
use std::str::FromStr;

use crate::error::{DataError, Result};

/// Convert column letters to a 0-indexed number (A=0, B=1, ..., Z=25, AA=26)
///
/// Letters are case-insensitive. Anything other than ASCII letters is rejected.
pub fn column_to_index(col: &str) -> Result<usize> {
    let col = col.trim();
    if col.is_empty() {
        return Err(DataError::InvalidColumn("empty column identifier".to_string()));
    }

    let mut result: usize = 0;
    for c in col.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(DataError::InvalidColumn(format!(
                "invalid character '{}' in '{}'",
                c, col
            )));
        }
        let value = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        result = result
            .checked_mul(26)
            .and_then(|r| r.checked_add(value))
            .ok_or_else(|| DataError::InvalidColumn(format!("'{}' is too wide", col)))?;
    }
    Ok(result - 1)
}

/// Convert a 0-indexed column number back to letters (0 -> "A", 26 -> "AA")
pub fn index_to_column(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A single cell address, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a reference like "L16" (1-indexed row, as shown in a spreadsheet)
    pub fn parse(cell: &str) -> Result<Self> {
        let cell = cell.trim();
        let split = cell
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| DataError::InvalidCellRef(format!("'{}' has no row number", cell)))?;
        let (col_str, row_str) = cell.split_at(split);

        if col_str.is_empty() {
            return Err(DataError::InvalidCellRef(format!(
                "'{}' has no column letters",
                cell
            )));
        }

        let col = column_to_index(col_str)
            .map_err(|e| DataError::InvalidCellRef(format!("'{}': {}", cell, e)))?;
        let row: usize = row_str
            .parse()
            .map_err(|_| DataError::InvalidCellRef(format!("invalid row number '{}'", row_str)))?;

        if row == 0 {
            return Err(DataError::InvalidCellRef(
                "Row number must be >= 1".to_string(),
            ));
        }

        Ok(Self { row: row - 1, col })
    }
}

impl FromStr for CellRef {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", index_to_column(self.col), self.row + 1)
    }
}
