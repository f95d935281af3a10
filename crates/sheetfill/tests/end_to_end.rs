//! End-to-end tests: dataset -> propagation -> table -> workbook

use sheetfill::prelude::*;

fn sales_grid() -> Grid {
    let mut grid = Grid::from_header(["Name", "Sales"]);
    grid.push_row(vec![CellValue::string("Widget"), CellValue::Number(10.0)]);
    grid.push_row(vec![CellValue::string("Gadget"), CellValue::Number(20.0)]);
    grid.push_row(vec![CellValue::string("Gizmo"), CellValue::Number(30.0)]);
    grid
}

/// The canonical scenario: "=SUM(B2:B2)" anchored at B2, filled down C2:C4
#[test]
fn test_sum_filled_down_column_c() {
    let mut grid = sales_grid();

    let origin = CellAddress::parse("B2").unwrap();
    let template = FormulaTemplate::parse("=SUM(B2:B2)", origin);
    let range = PropagationRange::data_rows(&grid, 2).unwrap();

    let outcome = propagate(&template, &range, &mut grid, "Result").unwrap();
    assert_eq!(outcome.written(), 3);
    assert!(outcome.skipped().is_empty());

    // C1 holds the header, C2..C4 the row-shifted formulas
    assert_eq!(grid.value_at(0, 2), CellValue::string("Result"));
    assert_eq!(grid.value_at(1, 2).formula_text(), Some("=SUM(B2:B2)"));
    assert_eq!(grid.value_at(2, 2).formula_text(), Some("=SUM(B3:B3)"));
    assert_eq!(grid.value_at(3, 2).formula_text(), Some("=SUM(B4:B4)"));

    // The filled grid still materializes cleanly
    let table = Table::over(&grid, "ExcelData", TableStyle::Medium9).unwrap();
    assert_eq!(table.range().to_a1_string(), "A1:C4");

    let mut workbook = Workbook::from_grid("Processed", grid).unwrap();
    workbook.add_table(0, table).unwrap();
    assert_eq!(workbook.table_count(), 1);
}

/// Absolute column references survive propagation into a different column
#[test]
fn test_absolute_column_is_stable() {
    let mut grid = sales_grid();

    let origin = CellAddress::parse("B2").unwrap();
    let template = FormulaTemplate::parse("=$B2*2", origin);
    let range = PropagationRange::data_rows(&grid, 2).unwrap();

    propagate(&template, &range, &mut grid, "Doubled").unwrap();

    assert_eq!(grid.value_at(1, 2).formula_text(), Some("=$B2*2"));
    assert_eq!(grid.value_at(2, 2).formula_text(), Some("=$B3*2"));
    assert_eq!(grid.value_at(3, 2).formula_text(), Some("=$B4*2"));
}

/// A template without formula evidence leaves the grid untouched
#[test]
fn test_plain_text_is_not_propagated() {
    let mut grid = sales_grid();
    let before = grid.clone();

    let origin = CellAddress::parse("B2").unwrap();
    let template = FormulaTemplate::parse("note to self", origin);
    let range = PropagationRange::data_rows(&grid, 2).unwrap();

    let outcome = propagate(&template, &range, &mut grid, "Result").unwrap();
    assert!(!outcome.is_applied());
    assert_eq!(grid, before);
}

/// Ragged grids never materialize
#[test]
fn test_ragged_grid_rejected_at_materialization() {
    let mut grid = sales_grid();
    grid.push_row(vec![CellValue::string("short row")]);

    assert!(matches!(
        Table::over(&grid, "ExcelData", TableStyle::Medium9),
        Err(sheetfill_core::Error::InconsistentGrid { .. })
    ));
}

/// Duplicate table names are rejected across the workbook
#[test]
fn test_duplicate_table_name() {
    let grid = sales_grid();
    let table_a = Table::over(&grid, "Data", TableStyle::Medium9).unwrap();
    let table_b = Table::over(&grid, "Data", TableStyle::Light1).unwrap();

    let mut workbook = Workbook::from_grid("Processed", grid).unwrap();
    workbook.add_table(0, table_a).unwrap();
    assert!(matches!(
        workbook.add_table(0, table_b),
        Err(sheetfill_core::Error::DuplicateTableName(_))
    ));
}
