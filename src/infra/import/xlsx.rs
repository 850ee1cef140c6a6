use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, SheetVisible};
use tracing::debug;

use crate::domain::entities::sheet::{select_active_sheet, CellValue, DecodedSheet, SheetEntry};
use crate::domain::error::MergeError;

pub fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::String(v.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(v) => CellValue::DateTime(v.as_f64()),
        Data::DateTimeIso(v) => CellValue::String(v.clone()),
        Data::DurationIso(v) => CellValue::String(v.clone()),
        Data::Error(v) => CellValue::Error(v.to_string()),
        Data::Empty => CellValue::Empty,
    }
}

pub fn read_active_sheet(file_name: &str, bytes: &[u8]) -> Result<DecodedSheet, MergeError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|err| {
            MergeError::Decode {
                file: file_name.to_string(),
                reason: err.to_string(),
            }
        })?;

    let entries: Vec<SheetEntry> = workbook
        .sheets_metadata()
        .iter()
        .map(|sheet| SheetEntry {
            name: sheet.name.clone(),
            visible: matches!(sheet.visible, SheetVisible::Visible),
        })
        .collect();
    let Some(sheet_name) = select_active_sheet(&entries).map(str::to_string) else {
        return Err(MergeError::MissingSheet {
            file: file_name.to_string(),
            sheet: None,
        });
    };

    let missing = || MergeError::MissingSheet {
        file: file_name.to_string(),
        sheet: Some(sheet_name.clone()),
    };
    if !workbook.sheet_names().iter().any(|name| name == &sheet_name) {
        return Err(missing());
    }
    let range = workbook.worksheet_range(&sheet_name).map_err(|err| {
        debug!(file = file_name, sheet = %sheet_name, error = %err, "worksheet unreadable");
        missing()
    })?;

    debug!(
        file = file_name,
        sheet = %sheet_name,
        rows = range.height(),
        cols = range.width(),
        "decoded worksheet"
    );
    Ok(DecodedSheet {
        rows: used_rows(&range),
        sheet_name,
    })
}

/// Rows of the used range; `rows[0]` is the first row that holds data.
fn used_rows(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect()
}
