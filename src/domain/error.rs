use thiserror::Error;

use crate::domain::entities::session::FileIdentity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    #[error("failed to decode workbook {file}: {reason}")]
    Decode { file: String, reason: String },

    #[error("sheet {} not found in {file}", .sheet.as_deref().unwrap_or("(none)"))]
    MissingSheet {
        file: String,
        sheet: Option<String>,
    },

    #[error("no compatible files to merge")]
    NoCompatibleFiles,

    #[error("file already loaded: {0}")]
    DuplicateFile(FileIdentity),

    #[error("another load or merge is still running")]
    Busy,

    #[error("failed to encode merged workbook: {0}")]
    Encode(String),
}

impl MergeError {
    /// Failures that only affect a single input file.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            MergeError::Decode { .. } | MergeError::MissingSheet { .. }
        )
    }
}
