//! End-to-end runs of the library combine entry point

use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use sheetmerge::config::PipelineConfig;
use sheetmerge::{combine, CombineOptions, CombineOutcome, CsvOptions, MergeError};
use tempfile::TempDir;

use crate::helpers::{read_csv_with_bom, sample_reports, write_xlsx};

fn options_for(folder: &Path, output: &Path) -> CombineOptions {
    CombineOptions {
        folder: folder.to_path_buf(),
        output: output.to_path_buf(),
        ..CombineOptions::default()
    }
}

#[test]
fn sample_reports_combine_into_expected_csv() {
    let temp = TempDir::new().unwrap();
    let folder = sample_reports(temp.path());
    let output = temp.path().join("combined_report.csv");

    let outcome = combine(&options_for(&folder, &output)).unwrap();

    let report = match outcome {
        CombineOutcome::Written(report) => report,
        other => panic!("expected a written report, got {:?}", other),
    };
    assert_eq!(report.output, output);
    assert_eq!(
        report.files_read,
        vec![folder.join("a.xlsx"), folder.join("b.xlsx")]
    );
    assert!(report.skipped.is_empty());
    assert_eq!(report.stats.rows_out(), 3);

    assert_eq!(
        read_csv_with_bom(&output),
        "Name,Duration\nAlice,00:05:00\nBob,00:10:00\nt1,t1\n"
    );
}

#[test]
fn rows_repeated_across_files_appear_once() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("in");
    fs::create_dir_all(&folder).unwrap();
    let rows: &[&[&str]] = &[&["Ana", "0 days 01:00:00"], &["Caio", "0 days 00:30:00"]];
    write_xlsx(&folder.join("monday.xlsx"), &["Agent", "Time"], rows);
    write_xlsx(&folder.join("tuesday.xlsx"), &["Agent", "Time"], rows);
    let output = temp.path().join("out.csv");

    let mut options = options_for(&folder, &output);
    options.pipeline.trailer_rows = 0;
    let outcome = combine(&options).unwrap();

    match outcome {
        CombineOutcome::Written(report) => {
            assert_eq!(report.stats.rows_in, 4);
            assert_eq!(report.stats.duplicates, 2);
        }
        other => panic!("expected a written report, got {:?}", other),
    }
    assert_eq!(
        read_csv_with_bom(&output),
        "Agent,Time\nAna,01:00:00\nCaio,00:30:00\n"
    );
}

#[test]
fn text_is_repaired_and_flattened() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("in");
    fs::create_dir_all(&folder).unwrap();
    write_xlsx(
        &folder.join("notes.xlsx"),
        &["City", "Comment"],
        &[
            &["SÃ£o Paulo", "first line \n second line"],
            &["None", "nan"],
            &["t", "t"],
            &["t", "t"],
            &["t", "t"],
        ],
    );
    let output = temp.path().join("out.csv");

    combine(&options_for(&folder, &output)).unwrap();

    assert_eq!(
        read_csv_with_bom(&output),
        "City,Comment\nSão Paulo,first line second line\n,\n"
    );
}

#[test]
fn empty_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    let folder = sample_reports(temp.path());
    write_xlsx(&folder.join("0-empty.xlsx"), &["Name", "Duration"], &[]);
    let output = temp.path().join("out.csv");

    let outcome = combine(&options_for(&folder, &output)).unwrap();

    match outcome {
        CombineOutcome::Written(report) => {
            assert_eq!(report.skipped, vec![folder.join("0-empty.xlsx")]);
            assert_eq!(report.files_read.len(), 2);
        }
        other => panic!("expected a written report, got {:?}", other),
    }
    assert_eq!(
        read_csv_with_bom(&output),
        "Name,Duration\nAlice,00:05:00\nBob,00:10:00\nt1,t1\n"
    );
}

#[test]
fn only_empty_files_write_nothing() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("in");
    fs::create_dir_all(&folder).unwrap();
    write_xlsx(&folder.join("a.xlsx"), &["Name"], &[]);
    let output = temp.path().join("out.csv");

    let outcome = combine(&options_for(&folder, &output)).unwrap();

    assert_eq!(
        outcome,
        CombineOutcome::NoData {
            skipped: vec![folder.join("a.xlsx")]
        }
    );
    assert!(!output.exists());
}

#[test]
fn missing_folder_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.csv");

    let outcome = combine(&options_for(&temp.path().join("nope"), &output)).unwrap();

    assert_eq!(outcome, CombineOutcome::NoInputFiles);
    assert!(!output.exists());
}

#[test]
fn non_matching_and_lock_files_are_ignored() {
    let temp = TempDir::new().unwrap();
    let folder = sample_reports(temp.path());
    fs::write(folder.join("notes.txt"), "ignore me").unwrap();
    fs::write(folder.join("~$a.xlsx"), "lock file").unwrap();
    fs::create_dir_all(folder.join("nested.xlsx")).unwrap();
    let output = temp.path().join("out.csv");

    let outcome = combine(&options_for(&folder, &output)).unwrap();

    match outcome {
        CombineOutcome::Written(report) => assert_eq!(report.files_read.len(), 2),
        other => panic!("expected a written report, got {:?}", other),
    }
}

#[test]
fn unreadable_workbook_aborts_without_output() {
    let temp = TempDir::new().unwrap();
    let folder = sample_reports(temp.path());
    fs::write(folder.join("c.xlsx"), "not a spreadsheet").unwrap();
    let output = temp.path().join("out.csv");

    let err = combine(&options_for(&folder, &output)).unwrap_err();

    assert!(matches!(err, MergeError::OpenWorkbook { ref path, .. } if path.ends_with("c.xlsx")));
    assert!(!output.exists());
}

#[test]
fn existing_output_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let folder = sample_reports(temp.path());
    let output = temp.path().join("out.csv");
    fs::write(&output, "stale contents that are longer than the new file would be by far").unwrap();

    combine(&options_for(&folder, &output)).unwrap();

    assert_eq!(
        read_csv_with_bom(&output),
        "Name,Duration\nAlice,00:05:00\nBob,00:10:00\nt1,t1\n"
    );
}

#[test]
fn csv_settings_are_applied() {
    let temp = TempDir::new().unwrap();
    let folder = sample_reports(temp.path());
    let output = temp.path().join("out").join("report.csv");
    let options = CombineOptions {
        csv: CsvOptions {
            delimiter: b';',
            bom: false,
        },
        pipeline: PipelineConfig {
            trailer_rows: 0,
            ..PipelineConfig::default()
        },
        ..options_for(&folder, &output)
    };

    combine(&options).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Name;Duration\nAlice;00:05:00\nx;x\ny;y\nz;z\nBob;00:10:00\nt1;t1\n"
    );
}

#[test]
fn gaps_stay_empty_with_custom_placeholder_tokens() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("in");
    fs::create_dir_all(&folder).unwrap();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "a").unwrap();
    sheet.write_string(0, 1, "b").unwrap();
    sheet.write_string(1, 0, "x").unwrap();
    sheet.write_string(2, 1, "-").unwrap();
    sheet.write_string(3, 0, "y").unwrap();
    sheet.write_string(3, 1, "nan").unwrap();
    workbook.save(folder.join("gaps.xlsx")).unwrap();

    let output = temp.path().join("out.csv");
    let options = CombineOptions {
        pipeline: PipelineConfig {
            placeholder_tokens: vec!["-".to_string()],
            trailer_rows: 0,
        },
        ..options_for(&folder, &output)
    };

    combine(&options).unwrap();

    assert_eq!(read_csv_with_bom(&output), "a,b\nx,\n,\ny,\n");
}

#[test]
fn na_texts_are_blank_in_output() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("in");
    fs::create_dir_all(&folder).unwrap();
    write_xlsx(
        &folder.join("report.xlsx"),
        &["Agent", "Time"],
        &[&["N/A", "0 days 00:01:00"], &["Ana", "NULL"]],
    );
    let output = temp.path().join("out.csv");

    let mut options = options_for(&folder, &output);
    options.pipeline.trailer_rows = 0;
    combine(&options).unwrap();

    assert_eq!(
        read_csv_with_bom(&output),
        "Agent,Time\n,00:01:00\nAna,\n"
    );
}
