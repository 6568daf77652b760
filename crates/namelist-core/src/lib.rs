//! namelist-core - Stellaris name lists from collaborative spreadsheets
//!
//! The pipeline for one sheet is: extract each slot column below the
//! metadata block, drop missing cells, sanitize characters the game's script
//! format cannot hold, quote and join the names, and substitute the results
//! into a template.
//!
//! # Example
//!
//! ```
//! use namelist_core::{quote_join, SanitizeRules};
//! use namelist_data::Cell;
//!
//! let cells = vec![Cell::from("Orion"), Cell::Empty, Cell::from("Vega, Prime")];
//! let names = SanitizeRules::default().sanitize(&cells);
//! assert_eq!(quote_join(&names), r#""Orion" "Vega  Prime""#);
//! ```

pub mod error;
pub mod format;
pub mod layout;
pub mod output;
pub mod renderer;
pub mod sanitize;
pub mod slots;
pub mod template;

// Re-export main types and functions
pub use error::{RenderError, Result};
pub use format::{extract_column, format_column, quote_join};
pub use layout::SheetLayout;
pub use output::{OutputDir, DEFAULT_OUTPUT_DIR};
pub use renderer::{DocumentReport, ListRenderer, RenderedList, SheetOutcome, SkipReason};
pub use sanitize::{is_missing, SanitizeRules, MISSING_MARKERS};
pub use slots::{required_keys, Slot, CATEGORY_KEY, LIST_NAME_KEY, SLOTS};
pub use template::{Template, DEFAULT_TEMPLATE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
