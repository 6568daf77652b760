//! In-memory workbook model: cells, tables and named sheets.

use std::fmt;

use crate::column::CellRef;

/// A single cell value, independent of the file format it came from
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Date or duration, already rendered as text by the source
    DateTime(String),
    /// Spreadsheet error value such as `#REF!`
    Error(String),
}

impl Cell {
    /// Check whether the cell holds no value
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Boolean view of the cell
    ///
    /// Checkbox cells arrive as `Bool`; CSV exports spell them `TRUE`/`FALSE`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            Cell::String(s) => match s.trim().to_ascii_uppercase().as_str() {
                "TRUE" => Some(true),
                "FALSE" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Coerce the cell to text
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::String(s) | Cell::DateTime(s) | Cell::Error(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => {
                // Integral floats print without a fraction so "12.0" becomes "12"
                if v.fract() == 0.0 && v.is_finite() {
                    write!(f, "{:.0}", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            Cell::Bool(true) => f.write_str("TRUE"),
            Cell::Bool(false) => f.write_str("FALSE"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::String(s.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::String(s)
        }
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

/// A rectangular-ish grid of cells, rows may be ragged
///
/// Row 0 is the first row of the sheet. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of rows, including header rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Get a cell, `None` when the address lies outside the table
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a cell by reference
    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.get(at.row, at.col)
    }
}

/// A named sheet within a workbook
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

impl Sheet {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

/// All sheets of one document, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Look up a sheet by exact name
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl FromIterator<Sheet> for Workbook {
    fn from_iter<I: IntoIterator<Item = Sheet>>(iter: I) -> Self {
        Self {
            sheets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_text() {
        assert_eq!(Cell::Empty.to_text(), "");
        assert_eq!(Cell::from("hello").to_text(), "hello");
        assert_eq!(Cell::Int(42).to_text(), "42");
        assert_eq!(Cell::Float(3.14).to_text(), "3.14");
        assert_eq!(Cell::Float(10.0).to_text(), "10");
        assert_eq!(Cell::Bool(true).to_text(), "TRUE");
        assert_eq!(Cell::Error("#REF!".to_string()).to_text(), "#REF!");
    }

    #[test]
    fn test_cell_as_bool() {
        assert_eq!(Cell::Bool(false).as_bool(), Some(false));
        assert_eq!(Cell::from("true").as_bool(), Some(true));
        assert_eq!(Cell::from(" FALSE ").as_bool(), Some(false));
        assert_eq!(Cell::from("yes").as_bool(), None);
        assert_eq!(Cell::Empty.as_bool(), None);
        assert_eq!(Cell::Int(1).as_bool(), None);
    }

    #[test]
    fn test_empty_string_is_empty_cell() {
        assert!(Cell::from("").is_empty());
        assert!(Cell::from(String::new()).is_empty());
    }

    #[test]
    fn test_table_get_out_of_bounds() {
        let table = Table::new(vec![
            vec![Cell::from("a"), Cell::from("b")],
            vec![Cell::from("c")],
        ]);

        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.get(1, 0), Some(&Cell::from("c")));
        assert_eq!(table.get(1, 1), None);
        assert_eq!(table.get(5, 0), None);
        assert_eq!(table.cell(CellRef::new(0, 1)), Some(&Cell::from("b")));
    }

    #[test]
    fn test_workbook_order_and_lookup() {
        let workbook: Workbook = ["Tutorial", "Humanoid", "Fungoid"]
            .into_iter()
            .map(|name| Sheet::new(name, Table::default()))
            .collect();

        assert_eq!(workbook.len(), 3);
        assert_eq!(workbook.sheet_names(), vec!["Tutorial", "Humanoid", "Fungoid"]);
        assert!(workbook.sheet("Fungoid").is_some());
        assert!(workbook.sheet("fungoid").is_none());
    }
}
