use std::collections::HashMap;
use std::fmt;

const EMPTY_HEADER_LABEL: &str = "__EMPTY";

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    String(String),
    Number(f64),
    Bool(bool),
    /// Excel serial date-time.
    DateTime(f64),
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(v) => write!(f, "{v}"),
            CellValue::Number(v) | CellValue::DateTime(v) => write!(f, "{v}"),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Error(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub name: String,
    pub visible: bool,
}

/// Picks the first visible sheet, falling back to the first declared sheet.
pub fn select_active_sheet(entries: &[SheetEntry]) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.visible)
        .or_else(|| entries.first())
        .map(|entry| entry.name.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderExtraction {
    pub headers: Vec<String>,
    pub sheet_name: String,
}

/// A single decoded worksheet, limited to its used range: `rows[0][0]` is
/// the top-left cell of the table, wherever it sits on the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSheet {
    pub sheet_name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl DecodedSheet {
    pub fn header_row(&self) -> Vec<String> {
        let Some(first) = self.rows.first() else {
            return Vec::new();
        };
        let len = first
            .iter()
            .rposition(|cell| !cell.is_empty())
            .map_or(0, |idx| idx + 1);
        first[..len].iter().map(CellValue::to_string).collect()
    }

    pub fn header_extraction(&self) -> HeaderExtraction {
        HeaderExtraction {
            headers: self.header_row(),
            sheet_name: self.sheet_name.clone(),
        }
    }

    /// Flattens the sheet into records keyed by the first row. Blank rows are
    /// dropped and empty cells are left out of each record.
    pub fn records(&self) -> Vec<RowRecord> {
        let Some((header, body)) = self.rows.split_first() else {
            return Vec::new();
        };
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut padded = header.clone();
        padded.resize(width, CellValue::Empty);
        let keys = header_keys(&padded);

        body.iter()
            .filter_map(|row| {
                let fields: Vec<(String, CellValue)> = row
                    .iter()
                    .zip(&keys)
                    .filter(|(cell, _)| !cell.is_empty())
                    .map(|(cell, key)| (key.clone(), cell.clone()))
                    .collect();
                (!fields.is_empty()).then_some(RowRecord { fields })
            })
            .collect()
    }
}

/// Turns a header row into unique field names: blank cells become
/// `__EMPTY`, repeated labels get `_1`, `_2`, ... appended.
pub fn header_keys(row: &[CellValue]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    row.iter()
        .map(|cell| {
            let label = match cell {
                CellValue::Empty => EMPTY_HEADER_LABEL.to_string(),
                other => other.to_string(),
            };
            let Some(&count) = seen.get(&label) else {
                seen.insert(label.clone(), 1);
                return label;
            };
            let mut counter = count;
            let mut key = format!("{label}_{counter}");
            counter += 1;
            while seen.contains_key(&key) {
                key = format!("{label}_{counter}");
                counter += 1;
            }
            seen.insert(label, counter);
            seen.insert(key.clone(), 1);
            key
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    pub fields: Vec<(String, CellValue)>,
}

impl RowRecord {
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == key)
            .map(|(_, value)| value)
    }
}
