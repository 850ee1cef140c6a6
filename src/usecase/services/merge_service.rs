use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::merged::MergedDataset;
use crate::domain::entities::session::{LoadedFile, SessionFileList};
use crate::domain::error::MergeError;
use crate::usecase::ports::codec::WorkbookCodec;

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub display_name: String,
    pub error: MergeError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub bytes: Vec<u8>,
    pub row_count: usize,
    pub merged_files: usize,
    pub skipped: Vec<SkippedFile>,
}

pub struct MergeService {
    codec: Arc<dyn WorkbookCodec>,
    sheet_name: String,
}

impl MergeService {
    pub fn new(codec: Arc<dyn WorkbookCodec>, sheet_name: impl Into<String>) -> Self {
        Self {
            codec,
            sheet_name: sheet_name.into(),
        }
    }

    pub fn merge_session(&self, list: &SessionFileList) -> Result<MergeOutcome, MergeError> {
        self.merge(&list.compatible_files())
    }

    /// Concatenates the data rows of `files` in order and encodes the result
    /// as a single-sheet workbook. A file that cannot be decoded is skipped.
    pub fn merge(&self, files: &[&LoadedFile]) -> Result<MergeOutcome, MergeError> {
        if files.is_empty() {
            return Err(MergeError::NoCompatibleFiles);
        }

        let mut dataset = MergedDataset::new();
        let mut merged_files = 0;
        let mut skipped = Vec::new();

        for file in files {
            match self.codec.decode(&file.display_name, &file.bytes) {
                Ok(sheet) => {
                    let records = sheet.records();
                    debug!(
                        file = %file.display_name,
                        sheet = %sheet.sheet_name,
                        rows = records.len(),
                        "flattened worksheet"
                    );
                    dataset.append(records);
                    merged_files += 1;
                }
                Err(error) => {
                    warn!(file = %file.display_name, %error, "skipping file during merge");
                    skipped.push(SkippedFile {
                        display_name: file.display_name.clone(),
                        error,
                    });
                }
            }
        }

        let bytes = self.codec.encode(&dataset, &self.sheet_name)?;
        info!(
            merged_files,
            skipped = skipped.len(),
            rows = dataset.row_count(),
            columns = dataset.columns().len(),
            "merged workbook"
        );

        Ok(MergeOutcome {
            bytes,
            row_count: dataset.row_count(),
            merged_files,
            skipped,
        })
    }
}
