//! End-to-end tests for the XLSX writer (create -> save -> unzip -> verify)

use std::io::{Cursor, Read};

use sheetfill_core::{CellValue, Grid, Table, TableStyle, Workbook};
use sheetfill_xlsx::XlsxWriter;

fn sample_workbook() -> Workbook {
    let mut grid = Grid::from_header(["Name", "Sales", "Result"]);
    grid.push_row(vec![
        CellValue::string("Widget"),
        CellValue::Number(10.0),
        CellValue::formula("=SUM(B2:B2)"),
    ]);
    grid.push_row(vec![
        CellValue::string("Gadget"),
        CellValue::Number(20.5),
        CellValue::formula("=SUM(B3:B3)"),
    ]);

    let table = Table::over(&grid, "ExcelData", TableStyle::Medium9).unwrap();
    let mut wb = Workbook::from_grid("Processed", grid).unwrap();
    wb.add_table(0, table).unwrap();
    wb
}

fn write_to_buffer(wb: &Workbook) -> Vec<u8> {
    let mut buf = Vec::new();
    XlsxWriter::write(wb, Cursor::new(&mut buf)).unwrap();
    buf
}

fn read_part(buf: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_package_has_expected_parts() {
    let buf = write_to_buffer(&sample_workbook());
    let mut archive = zip::ZipArchive::new(Cursor::new(&buf[..])).unwrap();

    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
        "xl/worksheets/_rels/sheet1.xml.rels",
        "xl/tables/table1.xml",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing part {}", name);
    }
}

#[test]
fn test_content_types_declare_table_part() {
    let buf = write_to_buffer(&sample_workbook());
    let types = read_part(&buf, "[Content_Types].xml");
    assert!(types.contains("/xl/tables/table1.xml"));
    assert!(types.contains("spreadsheetml.table+xml"));
}

#[test]
fn test_sheet_cells_and_formulas() {
    let buf = write_to_buffer(&sample_workbook());
    let sheet = read_part(&buf, "xl/worksheets/sheet1.xml");

    // Dimension spans header + 2 data rows x 3 columns
    assert!(sheet.contains(r#"<dimension ref="A1:C3"/>"#));

    // Inline string for the header, number and formula for the data
    assert!(sheet.contains("<is><t>Name</t></is>"));
    assert!(sheet.contains("<v>10</v>"));
    assert!(sheet.contains("<v>20.5</v>"));

    // Formulas are written without the leading '='
    assert!(sheet.contains("<f>SUM(B2:B2)</f>"));
    assert!(sheet.contains("<f>SUM(B3:B3)</f>"));
    assert!(!sheet.contains("<f>=SUM"));

    // The sheet references its table part
    assert!(sheet.contains(r#"<tablePart r:id="rId1"/>"#));
}

#[test]
fn test_header_row_gets_bold_style() {
    let buf = write_to_buffer(&sample_workbook());
    let sheet = read_part(&buf, "xl/worksheets/sheet1.xml");

    // Header cells in the table region carry the bold xf
    assert!(sheet.contains(r#"<c r="A1" s="1" t="inlineStr">"#));
    // Data cells do not
    assert!(sheet.contains(r#"<c r="A2" t="inlineStr">"#));
}

#[test]
fn test_table_part_contents() {
    let buf = write_to_buffer(&sample_workbook());
    let table = read_part(&buf, "xl/tables/table1.xml");

    assert!(table.contains(r#"name="ExcelData" displayName="ExcelData" ref="A1:C3""#));
    assert!(table.contains(r#"<tableColumns count="3">"#));
    assert!(table.contains(r#"<tableColumn id="1" name="Name"/>"#));
    assert!(table.contains(r#"<tableColumn id="3" name="Result"/>"#));
    assert!(table.contains(
        r#"<tableStyleInfo name="TableStyleMedium9" showFirstColumn="0" showLastColumn="0" showRowStripes="1" showColumnStripes="0"/>"#
    ));
}

#[test]
fn test_write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    XlsxWriter::write_file(&sample_workbook(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // ZIP local file header magic
    assert_eq!(&bytes[..2], b"PK");
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<sheetData>"));
}

#[test]
fn test_xml_escaping_in_values() {
    let mut grid = Grid::from_header(["A&B"]);
    grid.push_row(vec![CellValue::string("x<y>\"z\"")]);
    let wb = Workbook::from_grid("Sheet1", grid).unwrap();

    let buf = write_to_buffer(&wb);
    let sheet = read_part(&buf, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("A&amp;B"));
    assert!(sheet.contains("x&lt;y&gt;&quot;z&quot;"));
}
