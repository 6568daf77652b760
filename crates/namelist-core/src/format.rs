//! Column extraction and list formatting.

use namelist_data::{column_to_index, Cell, Table};

use crate::error::Result;
use crate::sanitize::SanitizeRules;

/// Cells of one column from `start_row` down to the end of the table
///
/// Rows too short to reach the column count as empty cells. A table with
/// fewer than `start_row` rows yields nothing.
pub fn extract_column<'a>(table: &'a Table, column: &str, start_row: usize) -> Result<Vec<&'a Cell>> {
    static EMPTY: Cell = Cell::Empty;

    let col = column_to_index(column)?;
    Ok(table
        .rows()
        .iter()
        .skip(start_row)
        .map(|row| row.get(col).unwrap_or(&EMPTY))
        .collect())
}

/// Quote every entry and join with single spaces: `"Orion" "Vega"`
///
/// Embedded double quotes are emitted as-is.
pub fn quote_join<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(|s| format!("\"{}\"", s.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract, sanitize and format one column in a single step
pub fn format_column(
    table: &Table,
    column: &str,
    start_row: usize,
    rules: &SanitizeRules,
) -> Result<String> {
    let cells = extract_column(table, column, start_row)?;
    let cleaned = rules.sanitize(cells);
    Ok(quote_join(&cleaned))
}
