//! Output policy tests: overwrite vs new-file disposition on real files

use sheetfill::prelude::*;
use std::fs;
use std::path::Path;

fn small_workbook() -> Workbook {
    let mut grid = Grid::from_header(["Name", "Sales"]);
    grid.push_row(vec![CellValue::string("Widget"), CellValue::Number(10.0)]);
    Workbook::from_grid("Processed", grid).unwrap()
}

fn assert_is_xlsx(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_overwrite_replaces_original_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("report.xlsx");
    fs::write(&original, b"stale bytes").unwrap();

    let workbook = small_workbook();
    let artifact = resolve_output(&workbook, true, Some(&original), None).unwrap();

    assert_eq!(artifact, OutputArtifact::OverwrittenOriginal(original.clone()));
    assert!(artifact.is_overwrite());
    assert_eq!(artifact.path(), original);
    assert_is_xlsx(&original);
}

#[test]
fn test_overwrite_requires_existing_source() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never_written.xlsx");

    let workbook = small_workbook();
    let err = resolve_output(&workbook, true, Some(&missing), None).unwrap_err();

    assert!(matches!(err, OutputError::MissingSource(p) if p == missing));
    assert!(!missing.exists());
}

#[test]
fn test_new_file_is_derived_from_original() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("sales.csv");
    fs::write(&original, b"Name,Sales\nWidget,10\n").unwrap();

    let workbook = small_workbook();
    let artifact = resolve_output(&workbook, false, Some(&original), None).unwrap();

    let expected = dir.path().join("sales_output.xlsx");
    assert_eq!(artifact, OutputArtifact::NewFile(expected.clone()));
    assert!(!artifact.is_overwrite());
    assert_is_xlsx(&expected);

    // The original is untouched
    assert_eq!(fs::read(&original).unwrap(), b"Name,Sales\nWidget,10\n");
}

#[test]
fn test_explicit_output_wins_over_derivation() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("sales.csv");
    fs::write(&original, b"Name,Sales\n").unwrap();
    let explicit = dir.path().join("chosen.xlsx");

    let workbook = small_workbook();
    let artifact =
        resolve_output(&workbook, false, Some(&original), Some(&explicit)).unwrap();

    assert_eq!(artifact, OutputArtifact::NewFile(explicit.clone()));
    assert_is_xlsx(&explicit);
    assert!(!dir.path().join("sales_output.xlsx").exists());
}

#[test]
fn test_no_destination_at_all() {
    let workbook = small_workbook();
    let err = resolve_output(&workbook, false, None, None).unwrap_err();
    assert!(matches!(err, OutputError::NoDestination));
}
