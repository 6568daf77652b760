//! namelist CLI - Command-line interface library
//!
//! Fetches roster spreadsheets and writes one Stellaris name-list file per
//! enabled sheet.
//!
//! # Library Usage
//!
//! ```ignore
//! use namelist_cli::{convert_command, ConvertOptions};
//! use namelist_data::SourceLocator;
//!
//! let sources = SourceLocator::split_list("rosters/humanoid.xlsx, rosters/fungoid.csv");
//! let summary = convert_command(&sources, &ConvertOptions::default())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Convert a shared Google Sheet
//! namelist "https://docs.google.com/spreadsheets/d/<id>/edit"
//!
//! # Several documents, custom template and output directory
//! namelist "a.xlsx, b.xlsx" --template template.txt --output lists/
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{
    convert_command, load_template, run_cli, ConvertOptions, DocumentFailure, DocumentSummary,
    RunSummary,
};
pub use config::Settings;
