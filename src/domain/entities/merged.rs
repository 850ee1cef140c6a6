use std::collections::HashSet;

use crate::domain::entities::sheet::{CellValue, RowRecord};

/// Concatenated records of every merged file. Columns keep the order in which
/// each key was first seen.
#[derive(Debug, Clone, Default)]
pub struct MergedDataset {
    columns: Vec<String>,
    known: HashSet<String>,
    rows: Vec<RowRecord>,
}

impl MergedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, records: Vec<RowRecord>) {
        for record in &records {
            for (key, _) in &record.fields {
                if self.known.insert(key.clone()) {
                    self.columns.push(key.clone());
                }
            }
        }
        self.rows.extend(records);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row-major cells aligned to `columns()`; missing keys are `Empty`.
    pub fn grid(&self) -> Vec<Vec<CellValue>> {
        self.rows
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(CellValue::Empty))
                    .collect()
            })
            .collect()
    }
}
