//! Excel/XLSX data source using calamine.

use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::sources::DataSource;
use crate::table::{Cell, Sheet, Table, Workbook};

/// Excel workbook on disk
pub struct ExcelSource {
    path: PathBuf,
}

impl ExcelSource {
    /// Create a new Excel source from a file path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl DataSource for ExcelSource {
    fn read_workbook(&self) -> Result<Workbook> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e: XlsxError| {
            DataError::WorkbookOpen(format!("{}: {}", self.path.display(), e))
        })?;
        collect_sheets(&mut workbook)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse an XLSX document from any seekable reader (e.g. downloaded bytes)
pub fn read_xlsx<RS: Read + Seek>(reader: RS) -> Result<Workbook> {
    let mut workbook =
        Xlsx::new(reader).map_err(|e: XlsxError| DataError::WorkbookOpen(e.to_string()))?;
    collect_sheets(&mut workbook)
}

/// Load every worksheet in workbook order; any unreadable sheet fails the workbook
fn collect_sheets<RS: Read + Seek>(workbook: &mut Xlsx<RS>) -> Result<Workbook> {
    let mut sheets = Workbook::default();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| DataError::SheetRead {
                sheet: name.clone(),
                message: e.to_string(),
            })?;
        let table = range_to_table(&range);
        debug!(sheet = %name, rows = table.height(), "loaded worksheet");
        sheets.push(Sheet::new(name, table));
    }
    Ok(sheets)
}

/// Convert a calamine cell into a format-independent cell
fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::String(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => Cell::Error(e.to_string()),
        Data::DateTime(dt) => Cell::DateTime(format!("{}", dt)),
        Data::DateTimeIso(s) => Cell::DateTime(s.clone()),
        Data::DurationIso(s) => Cell::DateTime(s.clone()),
    }
}

/// Materialise a calamine range as an absolute, sheet-anchored table
///
/// Calamine ranges start at the first used cell, so leading rows and
/// columns are re-inserted as empty cells to keep A1 addressing intact.
fn range_to_table(range: &Range<Data>) -> Table {
    let Some((start_row, start_col)) = range.start() else {
        return Table::default();
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col as usize];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }

    Table::new(rows)
}
