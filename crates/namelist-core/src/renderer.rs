//! Per-sheet rendering of name lists.
//!
//! Each sheet is either skipped (reserved name or enable flag set to FALSE)
//! or processed: every slot column is extracted, sanitized and quoted,
//! then substituted into the template together with the list and category
//! names.

use std::collections::HashMap;
use std::fmt;

use namelist_data::{Cell, Sheet, Workbook};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::format::format_column;
use crate::layout::SheetLayout;
use crate::sanitize::SanitizeRules;
use crate::slots::{required_keys, CATEGORY_KEY, LIST_NAME_KEY, SLOTS};
use crate::template::Template;

/// Why a sheet produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Sheet name is on the layout's skip list
    Reserved,
    /// Enable flag is FALSE
    Disabled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Reserved => f.write_str("reserved sheet"),
            SkipReason::Disabled => f.write_str("list processing disabled"),
        }
    }
}

/// Final text for one list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    /// List name, taken from the sheet name
    pub name: String,
    pub text: String,
}

/// What happened to one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    Processed(RenderedList),
    Skipped { sheet: String, reason: SkipReason },
}

/// Outcomes for every sheet of one document, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentReport {
    pub outcomes: Vec<SheetOutcome>,
}

impl DocumentReport {
    pub fn rendered(&self) -> impl Iterator<Item = &RenderedList> {
        self.outcomes.iter().filter_map(|o| match o {
            SheetOutcome::Processed(list) => Some(list),
            SheetOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            SheetOutcome::Skipped { sheet, reason } => Some((sheet.as_str(), *reason)),
            SheetOutcome::Processed(_) => None,
        })
    }

    pub fn processed_count(&self) -> usize {
        self.rendered().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }
}

/// Renders roster sheets into name lists
#[derive(Debug, Clone)]
pub struct ListRenderer {
    template: Template,
    rules: SanitizeRules,
    layout: SheetLayout,
}

impl ListRenderer {
    /// Create a renderer with the standard sanitization table and sheet layout
    pub fn new(template: Template) -> Self {
        Self {
            template,
            rules: SanitizeRules::default(),
            layout: SheetLayout::default(),
        }
    }

    pub fn with_rules(mut self, rules: SanitizeRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Verify the template only uses keys this renderer can supply
    pub fn check_template(&self) -> Result<()> {
        self.template.check_keys(&required_keys())
    }

    /// Value of the enable flag, if the cell holds a boolean
    fn enable_flag(&self, sheet: &Sheet) -> Option<bool> {
        sheet
            .table
            .cell(self.layout.enable_flag)
            .and_then(Cell::as_bool)
    }

    /// Decide whether a sheet should be processed
    ///
    /// Only an explicit FALSE disables a list; a blank or non-boolean flag
    /// cell still processes the sheet.
    pub fn skip_reason(&self, sheet: &Sheet) -> Option<SkipReason> {
        if self.layout.is_reserved(&sheet.name) {
            return Some(SkipReason::Reserved);
        }

        match self.enable_flag(sheet) {
            Some(false) => Some(SkipReason::Disabled),
            Some(true) | None => None,
        }
    }

    /// Build the placeholder values for one sheet
    pub fn values(&self, sheet: &Sheet) -> Result<HashMap<String, String>> {
        let category = sheet
            .table
            .cell(self.layout.category)
            .map(Cell::to_text)
            .unwrap_or_default();

        let mut values = HashMap::with_capacity(SLOTS.len() + 2);
        values.insert(LIST_NAME_KEY.to_string(), sheet.name.clone());
        values.insert(CATEGORY_KEY.to_string(), category);

        for slot in SLOTS {
            let formatted = format_column(
                &sheet.table,
                slot.column,
                self.layout.data_start_row,
                &self.rules,
            )?;
            values.insert(slot.name.to_string(), formatted);
        }

        Ok(values)
    }

    /// Render one sheet, or report why it was skipped
    pub fn render_sheet(&self, sheet: &Sheet) -> Result<SheetOutcome> {
        if let Some(reason) = self.skip_reason(sheet) {
            match reason {
                SkipReason::Reserved => {
                    debug!(sheet = %sheet.name, "skipping reserved sheet");
                }
                SkipReason::Disabled => {
                    warn!(
                        sheet = %sheet.name,
                        cell = %self.layout.enable_flag,
                        "skipping sheet ({}); set the 'Enable List Processing' cell to TRUE to process it",
                        reason
                    );
                }
            }
            return Ok(SheetOutcome::Skipped {
                sheet: sheet.name.clone(),
                reason,
            });
        }

        if self.enable_flag(sheet).is_none() {
            warn!(
                sheet = %sheet.name,
                cell = %self.layout.enable_flag,
                "enable flag is not TRUE or FALSE; processing sheet anyway"
            );
        }

        info!(sheet = %sheet.name, "processing sheet");
        let values = self.values(sheet)?;
        let text = self.template.render(&values)?;

        Ok(SheetOutcome::Processed(RenderedList {
            name: sheet.name.clone(),
            text,
        }))
    }

    /// Render every sheet of a document
    ///
    /// The template is checked first; on any error nothing is returned, so a
    /// malformed document never produces partial output.
    pub fn render_workbook(&self, workbook: &Workbook) -> Result<DocumentReport> {
        self.check_template()?;

        let outcomes = workbook
            .iter()
            .map(|sheet| self.render_sheet(sheet))
            .collect::<Result<Vec<_>>>()?;

        Ok(DocumentReport { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use namelist_data::{column_to_index, Table};

    /// A roster sheet with the flag set and one name in every slot column
    fn roster(name: &str, flag: Cell) -> Sheet {
        let width = column_to_index("DD").unwrap() + 1;
        let mut rows = vec![vec![Cell::Empty; width]; 16];
        rows[15][11] = flag;
        rows[8][11] = Cell::from("Humanoid");
        for slot in SLOTS {
            rows[4][column_to_index(slot.column).unwrap()] = Cell::from(slot.name);
        }
        Sheet::new(name, Table::new(rows))
    }

    fn renderer(source: &str) -> ListRenderer {
        ListRenderer::new(Template::parse(source).unwrap())
    }

    #[test]
    fn test_skip_reasons() {
        let r = renderer("$listname");
        assert_eq!(
            r.skip_reason(&roster("Tutorial", Cell::Bool(true))),
            Some(SkipReason::Reserved)
        );
        assert_eq!(
            r.skip_reason(&roster("HUM", Cell::Bool(false))),
            Some(SkipReason::Disabled)
        );
        assert_eq!(
            r.skip_reason(&roster("HUM", Cell::from("FALSE"))),
            Some(SkipReason::Disabled)
        );
        assert_eq!(r.skip_reason(&roster("HUM", Cell::Bool(true))), None);
        assert_eq!(r.skip_reason(&roster("HUM", Cell::from("TRUE"))), None);
    }

    #[test]
    fn test_blank_or_odd_flag_still_processes() {
        let r = renderer("$listname");
        assert_eq!(r.skip_reason(&roster("HUM", Cell::Empty)), None);
        assert_eq!(r.skip_reason(&roster("HUM", Cell::from("yes"))), None);
        assert_eq!(r.skip_reason(&Sheet::new("Short", Table::default())), None);
    }

    #[test]
    fn test_render_workbook_with_blank_flag() {
        let r = renderer("$listname: { $shipgeneral }");
        let width = column_to_index("AU").unwrap() + 1;
        let mut rows = vec![vec![Cell::Empty; width]; 5];
        rows[4][width - 1] = Cell::from("Orion");
        let workbook = Workbook::new(vec![Sheet::new("HUM", Table::new(rows))]);

        let report = r.render_workbook(&workbook).unwrap();

        assert_eq!(
            report.outcomes,
            vec![SheetOutcome::Processed(RenderedList {
                name: "HUM".to_string(),
                text: "HUM: { \"Orion\" }".to_string(),
            })]
        );
    }

    #[test]
    fn test_values_cover_every_key() {
        let r = renderer("$listname");
        let values = r.values(&roster("HUM", Cell::Bool(true))).unwrap();

        assert_eq!(values.len(), required_keys().len());
        assert_eq!(values["listname"], "HUM");
        assert_eq!(values["categoryname"], "Humanoid");
        assert_eq!(values["shipgeneral"], "\"shipgeneral\"");
        assert_eq!(values["planettundra"], "\"planettundra\"");
    }

    #[test]
    fn test_render_sheet_processed() {
        let r = renderer("$listname ($categoryname): { $shipcorvette }");
        let outcome = r.render_sheet(&roster("HUM", Cell::Bool(true))).unwrap();

        assert_eq!(
            outcome,
            SheetOutcome::Processed(RenderedList {
                name: "HUM".to_string(),
                text: "HUM (Humanoid): { \"shipcorvette\" }".to_string(),
            })
        );
    }

    #[test]
    fn test_render_workbook_fails_fast_on_unknown_placeholder() {
        let r = renderer("$listname $shipwarp");
        let workbook = Workbook::new(vec![roster("HUM", Cell::Bool(true))]);

        match r.render_workbook(&workbook).unwrap_err() {
            RenderError::UnresolvedPlaceholders(names) => assert_eq!(names, vec!["shipwarp"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_workbook_keeps_source_order() {
        let r = renderer("$listname");
        let workbook = Workbook::new(vec![
            roster("Tutorial", Cell::Bool(true)),
            roster("B", Cell::Bool(true)),
            roster("C", Cell::Bool(false)),
            roster("A", Cell::Bool(true)),
        ]);

        let report = r.render_workbook(&workbook).unwrap();

        let names: Vec<_> = report.rendered().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(report.processed_count(), 2);
        assert_eq!(report.skipped_count(), 2);
        assert_eq!(
            report.skipped().collect::<Vec<_>>(),
            vec![("Tutorial", SkipReason::Reserved), ("C", SkipReason::Disabled)]
        );
    }
}
