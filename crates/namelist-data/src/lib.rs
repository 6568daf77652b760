//! # namelist-data
//!
//! Spreadsheet sources for namelist - read XLSX workbooks (local or from a
//! Google Sheets export link) and CSV files into a simple in-memory
//! [`Workbook`] of named [`Table`]s.
//!
//! ## Example
//!
//! ```rust,ignore
//! use namelist_data::{SourceLocator, DEFAULT_TIMEOUT};
//!
//! let locator = SourceLocator::parse("https://docs.google.com/spreadsheets/d/<id>/edit")?;
//! let workbook = locator.open(DEFAULT_TIMEOUT)?.read_workbook()?;
//! for sheet in workbook.iter() {
//!     println!("{}: {} rows", sheet.name, sheet.table.height());
//! }
//! ```

pub mod column;
pub mod error;
pub mod sources;
pub mod table;

// Re-exports
pub use column::{column_to_index, index_to_column, CellRef};
pub use error::{DataError, Result};
pub use sources::{
    read_xlsx, CsvOptions, CsvSource, DataSource, ExcelSource, RemoteSource, SourceLocator,
    DEFAULT_TIMEOUT,
};
pub use table::{Cell, Sheet, Table, Workbook};
