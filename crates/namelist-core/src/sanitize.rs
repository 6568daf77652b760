//! Character sanitization for name-list entries.
//!
//! The game's script format treats `$`, `%`, `/`, `{`, `}` and `,` specially,
//! so every extracted name is passed through an ordered substitution table.

use namelist_data::Cell;

/// Text values that spreadsheet exports use for "no data"
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Ordered (forbidden character, replacement) pairs
///
/// Rules run in declaration order; a replacement may be empty to delete the
/// character. The order is significant when a replacement could match a later
/// rule, and is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeRules {
    rules: Vec<(char, String)>,
}

impl Default for SanitizeRules {
    fn default() -> Self {
        Self::new([
            ('$', "S"),
            ('%', "P"),
            ('/', " "),
            ('{', ""),
            ('}', ""),
            (',', " "),
        ])
    }
}

impl SanitizeRules {
    pub fn new<S: Into<String>>(rules: impl IntoIterator<Item = (char, S)>) -> Self {
        Self {
            rules: rules.into_iter().map(|(c, r)| (c, r.into())).collect(),
        }
    }

    pub fn rules(&self) -> &[(char, String)] {
        &self.rules
    }

    /// Apply every rule, in order, to one string
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (forbidden, replacement) in &self.rules {
            if out.contains(*forbidden) {
                out = out.replace(*forbidden, replacement);
            }
        }
        out
    }

    /// Coerce cells to text, drop missing entries and clean the rest
    pub fn sanitize<'a, I>(&self, cells: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        cells
            .into_iter()
            .filter(|cell| !is_missing(cell))
            .map(|cell| self.apply(&cell.to_text()))
            .collect()
    }
}

/// Whether a cell counts as "no data" and is skipped entirely
pub fn is_missing(cell: &Cell) -> bool {
    match cell {
        Cell::Empty | Cell::Error(_) => true,
        Cell::String(s) => MISSING_MARKERS.contains(&s.as_str()),
        Cell::Float(f) => f.is_nan(),
        _ => false,
    }
}
