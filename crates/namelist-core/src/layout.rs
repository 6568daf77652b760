//! Fixed cell positions of the roster sheet.

use namelist_data::CellRef;

/// Where the pipeline reads metadata and data on each sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// First data row (0-indexed); the header row and metadata block precede it
    pub data_start_row: usize,
    /// "Enable List Processing" checkbox
    pub enable_flag: CellRef,
    /// Category of the list (humanoid, fungoid, ...)
    pub category: CellRef,
    /// Sheets that never hold a list, such as the instructions page
    pub skip_sheets: Vec<String>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            data_start_row: 4,
            // L16
            enable_flag: CellRef::new(15, 11),
            // L9
            category: CellRef::new(8, 11),
            skip_sheets: vec!["Tutorial".to_string()],
        }
    }
}

impl SheetLayout {
    /// Replace the list of reserved sheet names
    pub fn with_skip_sheets(mut self, names: Vec<String>) -> Self {
        self.skip_sheets = names;
        self
    }

    pub fn is_reserved(&self, sheet: &str) -> bool {
        self.skip_sheets.iter().any(|s| s == sheet)
    }
}
