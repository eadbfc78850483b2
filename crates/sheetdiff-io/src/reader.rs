//! Workbook decoding
//!
//! Decodes spreadsheet files with calamine. The first row of each sheet's
//! used range is the header; every following row is a data row.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use chrono::{NaiveDate, NaiveDateTime};
use sheetdiff_core::{CellValue, Sheet, Table, Workbook};

use crate::{Error, Result};

/// File extensions accepted by [`read_path`]
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Decode a workbook held in memory.
///
/// The container format is detected from the content. `source_name` only
/// labels error messages.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a readable workbook or any
/// sheet fails to decode.
pub fn read_bytes(bytes: &[u8], source_name: &str) -> Result<Workbook> {
    let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| Error::decode(source_name, e))?;

    let mut workbook = Workbook::new();
    for name in sheets.sheet_names() {
        let range = sheets
            .worksheet_range(&name)
            .map_err(|e| Error::decode(source_name, format!("sheet '{}': {}", name, e)))?;
        let table = table_from_range(&range);
        tracing::debug!(
            source = source_name,
            sheet = %name,
            columns = table.columns.len(),
            rows = table.row_count(),
            "Decoded sheet"
        );
        workbook.push(Sheet::new(name, table));
    }

    Ok(workbook)
}

/// Read and decode a workbook file.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions,
/// [`Error::Io`] if the file cannot be read and [`Error::Decode`] if it is
/// not a valid workbook.
pub fn read_path(path: &Path) -> Result<Workbook> {
    let bytes = read_workbook_bytes(path)?;
    read_bytes(&bytes, &path.display().to_string())
}

/// Read a workbook file's raw bytes after checking its extension.
pub fn read_workbook_bytes(path: &Path) -> Result<Vec<u8>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::UnsupportedFormat { extension });
    }

    std::fs::read(path).map_err(|e| Error::io(path, e))
}

/// Convert a sheet's used range into a table.
///
/// An empty range yields a table with no columns and no rows.
pub fn table_from_range(range: &Range<Data>) -> Table {
    let Some((start_row, _)) = range.start() else {
        return Table::default();
    };
    if range.is_empty() {
        return Table::default();
    }

    let mut rows = range.rows();
    let columns = rows
        .next()
        .map(|header| header.iter().map(|d| cell_value(d).to_text()).collect())
        .unwrap_or_default();
    let data = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Table::new(columns, data).with_header_line(start_row as usize + 1)
}

/// Convert a calamine cell into the model's cell value
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                return CellValue::Float(dt.as_f64());
            }
            dt.as_datetime()
                .map_or(CellValue::Float(dt.as_f64()), CellValue::DateTime)
        }
        Data::DateTimeIso(s) => {
            parse_iso_datetime(s).map_or_else(|| CellValue::Text(s.clone()), CellValue::DateTime)
        }
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Data::Empty, CellValue::Empty)]
    #[case(Data::String("x".into()), CellValue::Text("x".into()))]
    #[case(Data::Int(7), CellValue::Int(7))]
    #[case(Data::Float(2.5), CellValue::Float(2.5))]
    #[case(Data::Bool(true), CellValue::Bool(true))]
    #[case(Data::DurationIso("PT1H".into()), CellValue::Text("PT1H".into()))]
    fn converts_cells(#[case] data: Data, #[case] expected: CellValue) {
        assert_eq!(cell_value(&data), expected);
    }

    #[test]
    fn iso_dates_become_datetimes() {
        let value = cell_value(&Data::DateTimeIso("2024-03-01".into()));
        assert_eq!(value.to_text(), "2024-03-01 00:00:00");

        let value = cell_value(&Data::DateTimeIso("2024-03-01T10:30:00".into()));
        assert_eq!(value.to_text(), "2024-03-01 10:30:00");

        let value = cell_value(&Data::DateTimeIso("not a date".into()));
        assert_eq!(value, CellValue::Text("not a date".into()));
    }

    #[test]
    fn first_row_is_header() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("name".into()));
        range.set_value((0, 1), Data::String("qty".into()));
        range.set_value((1, 0), Data::String("a".into()));
        range.set_value((1, 1), Data::Float(1.0));
        range.set_value((2, 0), Data::String("b".into()));

        let table = table_from_range(&range);

        assert_eq!(table.columns, vec!["name".to_string(), "qty".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row_key(0).unwrap().cells(), ["a", "1"]);
        assert_eq!(table.row_key(1).unwrap().cells(), ["b", ""]);
        assert_eq!(table.line_of(0), 2);
    }

    #[test]
    fn offset_range_shifts_header_line() {
        let mut range = Range::new((2, 1), (3, 1));
        range.set_value((2, 1), Data::String("col".into()));
        range.set_value((3, 1), Data::String("v".into()));

        let table = table_from_range(&range);

        assert_eq!(table.header_line, 3);
        assert_eq!(table.line_of(0), 4);
    }

    #[test]
    fn empty_range_is_empty_table() {
        let range: Range<Data> = Range::empty();
        let table = table_from_range(&range);
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = read_bytes(b"definitely not a spreadsheet", "upload").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode { ref source_name, .. } if source_name == "upload"
        ));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_path(Path::new("report.pdf")).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedFormat { ref extension } if extension == "pdf"
        ));
    }
}
