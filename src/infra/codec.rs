use crate::domain::entities::merged::MergedDataset;
use crate::domain::entities::sheet::DecodedSheet;
use crate::domain::error::MergeError;
use crate::infra::export::xlsx::write_merged_workbook;
use crate::infra::import::xlsx::read_active_sheet;
use crate::usecase::ports::codec::WorkbookCodec;

/// Reads anything calamine recognises, writes `.xlsx`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxCodec;

impl WorkbookCodec for XlsxCodec {
    fn decode(&self, file_name: &str, bytes: &[u8]) -> Result<DecodedSheet, MergeError> {
        read_active_sheet(file_name, bytes)
    }

    fn encode(&self, dataset: &MergedDataset, sheet_name: &str) -> Result<Vec<u8>, MergeError> {
        write_merged_workbook(dataset, sheet_name)
            .map_err(|err| MergeError::Encode(err.to_string()))
    }
}
