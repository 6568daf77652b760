//! End-to-end tests: roster workbook -> rendered files

use std::fs;

use tempfile::TempDir;

use namelist_core::{
    required_keys, ListRenderer, OutputDir, RenderError, SheetOutcome, SkipReason, Template,
    DEFAULT_TEMPLATE, SLOTS,
};
use namelist_data::{column_to_index, Cell, Sheet, Table, Workbook};

const FLAG_ROW: usize = 15;
const CATEGORY_ROW: usize = 8;
const META_COL: usize = 11;
const DATA_ROW: usize = 4;

/// Build a roster sheet; every slot column gets three rows of data
fn roster(name: &str, enabled: bool) -> Sheet {
    let width = column_to_index("DD").unwrap() + 1;
    let mut rows = vec![vec![Cell::Empty; width]; DATA_ROW + 3];
    rows[0][0] = Cell::from("Names List Title");
    rows.resize(FLAG_ROW + 1, vec![Cell::Empty; width]);

    rows[CATEGORY_ROW][META_COL] = Cell::from("Humanoid");
    rows[FLAG_ROW][META_COL] = Cell::Bool(enabled);

    for slot in SLOTS {
        let col = column_to_index(slot.column).unwrap();
        rows[DATA_ROW][col] = Cell::from(format!("{} One", slot.name));
        rows[DATA_ROW + 1][col] = Cell::from("nan");
        rows[DATA_ROW + 2][col] = Cell::from("Vega/Prime, $5%");
    }
    // Header rows above the data block must never leak into a list
    rows[DATA_ROW - 1][column_to_index("AU").unwrap()] = Cell::from("Ship Names");

    Sheet::new(name, Table::new(rows))
}

/// Expected output computed by plain text replacement, longest key first
fn expected_text(list_name: &str) -> String {
    let mut keys = required_keys();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let mut text = DEFAULT_TEMPLATE.to_string();
    for key in keys {
        let value = match key {
            "listname" => list_name.to_string(),
            "categoryname" => "Humanoid".to_string(),
            slot => format!("\"{} One\" \"Vega Prime  S5P\"", slot),
        };
        text = text.replace(&format!("${}", key), &value);
    }
    text
}

#[test]
fn test_enabled_sheet_renders_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let out = OutputDir::new(dir.path().join("lists"));
    out.ensure().unwrap();

    let renderer = ListRenderer::new(Template::builtin().unwrap());
    let workbook = Workbook::new(vec![roster("HUM1", true)]);

    let report = renderer.render_workbook(&workbook).unwrap();
    let written: Vec<_> = report.rendered().map(|l| out.write(l).unwrap()).collect();

    assert_eq!(written, vec![dir.path().join("lists").join("HUM1.txt")]);
    let content = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(content, expected_text("HUM1"));
    assert!(!content.contains('$'));
    assert!(!content.contains("Ship Names"));
}

#[test]
fn test_disabled_sheet_produces_no_file() {
    let dir = TempDir::new().unwrap();
    let out = OutputDir::new(dir.path());

    let renderer = ListRenderer::new(Template::builtin().unwrap());
    let workbook = Workbook::new(vec![roster("HUM1", false), roster("HUM2", true)]);

    let report = renderer.render_workbook(&workbook).unwrap();
    for list in report.rendered() {
        out.write(list).unwrap();
    }

    assert_eq!(
        report.outcomes[0],
        SheetOutcome::Skipped {
            sheet: "HUM1".to_string(),
            reason: SkipReason::Disabled,
        }
    );
    assert!(!dir.path().join("HUM1.txt").exists());
    assert!(dir.path().join("HUM2.txt").exists());
}

#[test]
fn test_custom_template_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.txt");
    fs::write(&path, "$listname = { $$ ${shipgeneral} }\n").unwrap();

    let renderer = ListRenderer::new(Template::load(&path).unwrap());
    let report = renderer
        .render_workbook(&Workbook::new(vec![roster("FUN", true)]))
        .unwrap();

    let list = report.rendered().next().unwrap();
    assert_eq!(
        list.text,
        "FUN = { $ \"shipgeneral One\" \"Vega Prime  S5P\" }\n"
    );
}

#[test]
fn test_template_mismatch_renders_nothing() {
    let renderer = ListRenderer::new(Template::parse("$listname $shipdreadnought").unwrap());
    let workbook = Workbook::new(vec![roster("HUM1", true), roster("HUM2", true)]);

    let err = renderer.render_workbook(&workbook).unwrap_err();
    assert!(matches!(err, RenderError::UnresolvedPlaceholders(ref names) if names == &["shipdreadnought"]));
}

#[test]
fn test_sheet_without_data_rows_renders_empty_lists() {
    let mut rows = vec![Vec::new(); FLAG_ROW + 1];
    rows[FLAG_ROW] = vec![Cell::Empty; META_COL + 1];
    rows[FLAG_ROW][META_COL] = Cell::Bool(true);
    let sheet = Sheet::new("Empty", Table::new(rows));

    let renderer = ListRenderer::new(Template::parse("[$categoryname] { $shipgeneral }").unwrap());
    let report = renderer
        .render_workbook(&Workbook::new(vec![sheet]))
        .unwrap();

    assert_eq!(report.rendered().next().unwrap().text, "[] {  }");
}
