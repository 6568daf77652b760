//! Data source implementations.
//!
//! Adapters that turn a file or a remote spreadsheet into a [`Workbook`].

pub mod csv;
pub mod excel;
pub mod remote;

pub use csv::{CsvOptions, CsvSource};
pub use excel::{read_xlsx, ExcelSource};
pub use remote::{RemoteSource, SourceLocator, DEFAULT_TIMEOUT};

use crate::error::Result;
use crate::table::Workbook;

/// Trait for sources that can provide a whole workbook
pub trait DataSource {
    /// Load every sheet, in source order
    fn read_workbook(&self) -> Result<Workbook>;

    /// Human-readable description used in diagnostics
    fn describe(&self) -> String;

    /// List available sheets in the source
    fn list_sheets(&self) -> Result<Vec<String>> {
        Ok(self.read_workbook()?.sheet_names())
    }
}
