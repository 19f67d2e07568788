//! Loading real workbooks into tables

use rust_xlsxwriter::{Format, Workbook};
use sheetmerge::{MergeError, Table};
use tempfile::TempDir;

use crate::helpers::write_xlsx;

#[test]
fn string_cells_load_as_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.xlsx");
    write_xlsx(
        &path,
        &["Name", "Note"],
        &[&["Alice", "line one\nline two"], &["Bob", "cafÃ©"]],
    );

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["Name", "Note"]);
    assert_eq!(
        table.rows,
        vec![
            vec!["Alice", "line one\nline two"],
            vec!["Bob", "cafÃ©"],
        ]
    );
}

#[test]
fn typed_cells_render_as_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("typed.xlsx");

    let mut workbook = Workbook::new();
    let clock = Format::new().set_num_format("hh:mm:ss");
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "count").unwrap();
    sheet.write_string(0, 1, "ratio").unwrap();
    sheet.write_string(0, 2, "done").unwrap();
    sheet.write_string(0, 3, "at").unwrap();
    sheet.write_number(1, 0, 42.0).unwrap();
    sheet.write_number(1, 1, 2.5).unwrap();
    sheet.write_boolean(1, 2, true).unwrap();
    sheet.write_number_with_format(1, 3, 0.5, &clock).unwrap();
    workbook.save(&path).unwrap();

    let table = Table::load(&path).unwrap();

    assert_eq!(table.rows, vec![vec!["42", "2.5", "True", "12:00:00"]]);
}

#[test]
fn gaps_load_as_empty_text() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gaps.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "a").unwrap();
    sheet.write_string(0, 2, "c").unwrap();
    sheet.write_string(1, 0, "1").unwrap();
    sheet.write_string(2, 2, "3").unwrap();
    workbook.save(&path).unwrap();

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["a", "Unnamed: 1", "c"]);
    assert_eq!(
        table.rows,
        vec![vec!["1", "", ""], vec!["", "", "3"]]
    );
}

#[test]
fn na_texts_load_as_empty_cells() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("na.xlsx");
    write_xlsx(
        &path,
        &["Name", "N/A", "Score"],
        &[
            &["N/A", "x", "#N/A"],
            &["NULL", "y", "n/a"],
            &["Bob", "z", "N/A "],
        ],
    );

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["Name", "Unnamed: 1", "Score"]);
    assert_eq!(
        table.rows,
        vec![vec!["", "x", ""], vec!["", "y", ""], vec!["Bob", "z", "N/A "]]
    );
}

#[test]
fn custom_na_texts_replace_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("na.xlsx");
    write_xlsx(&path, &["a", "b"], &[&["-", "N/A"]]);

    let table = Table::load_with(&path, &["-"]).unwrap();

    assert_eq!(table.rows, vec![vec!["", "N/A"]]);
}

#[test]
fn blank_leading_columns_are_kept() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("offset.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 1, "Name").unwrap();
    sheet.write_string(0, 2, "Dur").unwrap();
    sheet.write_string(1, 1, "Alice").unwrap();
    sheet.write_string(1, 2, "x").unwrap();
    workbook.save(&path).unwrap();

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["Unnamed: 0", "Name", "Dur"]);
    assert_eq!(table.rows, vec![vec!["", "Alice", "x"]]);
}

#[test]
fn blank_rows_above_header_are_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("low.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(2, 0, "Name").unwrap();
    sheet.write_string(3, 0, "Alice").unwrap();
    workbook.save(&path).unwrap();

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["Name"]);
    assert_eq!(table.rows, vec![vec!["Alice"]]);
}

#[test]
fn header_only_sheet_has_no_rows() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("header.xlsx");
    write_xlsx(&path, &["Name", "Duration"], &[]);

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["Name", "Duration"]);
    assert!(table.is_empty());
}

#[test]
fn blank_sheet_loads_as_empty_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blank.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(&path).unwrap();

    let table = Table::load(&path).unwrap();

    assert_eq!(table, Table::default());
}

#[test]
fn only_first_sheet_is_read() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("two.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet().write_string(0, 0, "first").unwrap();
    workbook.add_worksheet().write_string(0, 0, "second").unwrap();
    workbook.save(&path).unwrap();

    let table = Table::load(&path).unwrap();

    assert_eq!(table.columns, vec!["first"]);
}

#[test]
fn non_workbook_is_an_open_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fake.xlsx");
    std::fs::write(&path, "not a spreadsheet").unwrap();

    let err = Table::load(&path).unwrap_err();

    assert!(matches!(err, MergeError::OpenWorkbook { .. }));
    assert!(err.to_string().contains("fake.xlsx"));
}
