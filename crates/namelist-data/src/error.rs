//! Error types for spreadsheet sources.

use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while locating, fetching or reading a workbook
#[derive(Debug, Error)]
pub enum DataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Failed to open or parse a workbook
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// Invalid column identifier (e.g. "A1" or "")
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Invalid cell reference (e.g. "16L")
    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    /// Source locator could not be interpreted
    #[error("Invalid source locator: {0}")]
    InvalidLocator(String),

    /// Remote server answered with a non-success status
    #[error("Fetching {url} failed with HTTP status {status}")]
    Http { status: u16, url: String },

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A worksheet inside an opened workbook could not be parsed
    #[error("Failed to read sheet '{sheet}': {message}")]
    SheetRead { sheet: String, message: String },

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

