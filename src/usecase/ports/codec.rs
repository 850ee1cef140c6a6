use crate::domain::entities::merged::MergedDataset;
use crate::domain::entities::sheet::DecodedSheet;
use crate::domain::error::MergeError;

pub trait WorkbookCodec: Send + Sync {
    /// Decodes a workbook and returns its active sheet, or the first sheet
    /// when no sheet is marked visible.
    fn decode(&self, file_name: &str, bytes: &[u8]) -> Result<DecodedSheet, MergeError>;

    fn encode(&self, dataset: &MergedDataset, sheet_name: &str) -> Result<Vec<u8>, MergeError>;
}
