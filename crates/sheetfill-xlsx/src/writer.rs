//! XLSX writer
//!
//! Builds the OPC package part by part as XML strings: content types, rels,
//! workbook, styles, one XML part per sheet, and one table part per
//! materialized table.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::{XlsxError, XlsxResult};
use sheetfill_core::{CellAddress, CellValue, Sheet, Table, Workbook};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        if workbook.sheet_count() == 0 {
            return Err(XlsxError::InvalidContent(
                "workbook has no sheets".into(),
            ));
        }

        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, workbook)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, workbook)?;
        Self::write_workbook_rels(&mut zip, workbook)?;
        Self::write_styles_xml(&mut zip)?;

        // Table parts are numbered across the whole workbook
        let mut next_table = 1usize;
        for (i, sheet) in workbook.sheets().enumerate() {
            Self::write_sheet(&mut zip, sheet, i)?;

            if !sheet.tables().is_empty() {
                Self::write_sheet_rels(&mut zip, sheet, i, next_table)?;
                for table in sheet.tables() {
                    Self::write_table(&mut zip, sheet, table, next_table)?;
                    next_table += 1;
                }
            }
        }

        zip.finish()?;
        log::debug!(
            "wrote workbook: {} sheet(s), {} table(s)",
            workbook.sheet_count(),
            next_table - 1
        );
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        let table_count: usize = workbook.table_count();
        for t in 1..=table_count {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/tables/table{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml"/>"#,
                t
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.sheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        let styles_rid = workbook.sheet_count() + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            styles_rid
        ));

        content.push_str(
            r#"
</Relationships>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Minimal style table: xf 0 is the default, xf 1 is the bold font used
    /// for table header cells
    fn write_styles_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <fonts count="2">
        <font><sz val="11"/><name val="Calibri"/></font>
        <font><b/><sz val="11"/><name val="Calibri"/></font>
    </fonts>
    <fills count="2">
        <fill><patternFill patternType="none"/></fill>
        <fill><patternFill patternType="gray125"/></fill>
    </fills>
    <borders count="1">
        <border><left/><right/><top/><bottom/><diagonal/></border>
    </borders>
    <cellStyleXfs count="1">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
    </cellStyleXfs>
    <cellXfs count="2">
        <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
        <xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>
    </cellXfs>
    <cellStyles count="1">
        <cellStyle name="Normal" xfId="0" builtinId="0"/>
    </cellStyles>
</styleSheet>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_sheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
        index: usize,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let grid = &sheet.grid;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        if !grid.is_empty() && grid.column_count() > 0 {
            let dim = sheetfill_core::CellRange::from_indices(
                0,
                0,
                grid.row_count() - 1,
                grid.column_count() - 1,
            );
            content.push_str(&format!("\n    <dimension ref=\"{}\"/>", dim.to_a1_string()));
        }

        content.push_str("\n    <sheetData>");

        for (row_idx, row) in grid.rows().enumerate() {
            let row_idx = row_idx as u32;
            let mut row_content = String::new();

            for (col_idx, cell) in row.iter().enumerate() {
                let col_idx = col_idx as u16;
                let cell_ref = CellAddress::new(row_idx, col_idx).to_a1_string();
                let style_attr = if Self::is_table_header(sheet, row_idx, col_idx) {
                    r#" s="1""#
                } else {
                    ""
                };

                match cell {
                    CellValue::Number(n) => {
                        row_content.push_str(&format!(
                            "\n            <c r=\"{}\"{}><v>{}</v></c>",
                            cell_ref, style_attr, n
                        ));
                    }
                    CellValue::String(s) => {
                        row_content.push_str(&format!(
                            "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t>{}</t></is></c>",
                            cell_ref,
                            style_attr,
                            escape_xml(s)
                        ));
                    }
                    CellValue::Boolean(b) => {
                        row_content.push_str(&format!(
                            "\n            <c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                            cell_ref,
                            style_attr,
                            if *b { 1 } else { 0 }
                        ));
                    }
                    CellValue::Formula(text) => {
                        let body = text.strip_prefix('=').unwrap_or(text);
                        row_content.push_str(&format!(
                            "\n            <c r=\"{}\"{}><f>{}</f></c>",
                            cell_ref,
                            style_attr,
                            escape_xml(body)
                        ));
                    }
                    CellValue::Empty => {
                        // Style-only cells keep header formatting visible
                        if !style_attr.is_empty() {
                            row_content.push_str(&format!(
                                "\n            <c r=\"{}\"{}/>",
                                cell_ref, style_attr
                            ));
                        }
                    }
                }
            }

            if !row_content.is_empty() {
                content.push_str(&format!("\n        <row r=\"{}\">", row_idx + 1));
                content.push_str(&row_content);
                content.push_str("\n        </row>");
            }
        }

        content.push_str("\n    </sheetData>");

        // Reference the table parts living under xl/tables/
        let tables = sheet.tables();
        if !tables.is_empty() {
            content.push_str(&format!("\n    <tableParts count=\"{}\">", tables.len()));
            for rid in 0..tables.len() {
                content.push_str(&format!("\n        <tablePart r:id=\"rId{}\"/>", rid + 1));
            }
            content.push_str("\n    </tableParts>");
        }

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Is this cell the header cell of some table on the sheet?
    fn is_table_header(sheet: &Sheet, row: u32, col: u16) -> bool {
        sheet.tables().iter().any(|t| {
            let range = t.range();
            row == range.start.row && col >= range.start.col && col <= range.end.col
        })
    }

    fn write_sheet_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
        index: usize,
        first_table: usize,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(
            format!("xl/worksheets/_rels/sheet{}.xml.rels", index + 1),
            options,
        )?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for (rid, _) in sheet.tables().iter().enumerate() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/table" Target="../tables/table{}.xml"/>"#,
                rid + 1,
                first_table + rid
            ));
        }

        content.push_str(
            r#"
</Relationships>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_table<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
        table: &Table,
        number: usize,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/tables/table{}.xml", number), options)?;

        let range = table.range();
        let ref_str = range.to_a1_string();

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<table xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" id="{id}" name="{name}" displayName="{name}" ref="{r}" totalsRowShown="0">
    <autoFilter ref="{r}"/>"#,
            id = number,
            name = escape_xml(table.name()),
            r = ref_str
        );

        content.push_str(&format!(
            "\n    <tableColumns count=\"{}\">",
            range.col_count()
        ));

        for (i, col) in (range.start.col..=range.end.col).enumerate() {
            let header = sheet.grid.value_at(range.start.row, col);
            let name = match header.as_string() {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => format!("Column{}", i + 1),
            };
            content.push_str(&format!(
                r#"
        <tableColumn id="{}" name="{}"/>"#,
                i + 1,
                escape_xml(&name)
            ));
        }

        content.push_str("\n    </tableColumns>");

        if let Some(style_name) = table.style().xlsx_name() {
            content.push_str(&format!(
                r#"
    <tableStyleInfo name="{}" showFirstColumn="{}" showLastColumn="{}" showRowStripes="{}" showColumnStripes="{}"/>"#,
                style_name,
                table.first_column as u8,
                table.last_column as u8,
                table.banded_rows as u8,
                table.banded_columns as u8
            ));
        }

        content.push_str("\n</table>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
