use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::domain::entities::merged::MergedDataset;
use crate::domain::entities::sheet::CellValue;

const DATE_TIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

pub fn write_merged_workbook(
    dataset: &MergedDataset,
    sheet_name: &str,
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format(DATE_TIME_FORMAT);
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col_idx, column) in dataset.columns().iter().enumerate() {
        worksheet.write_string(0, to_col(col_idx)?, column)?;
    }

    for (row_idx, row) in dataset.grid().iter().enumerate() {
        let row32 = to_row(row_idx + 1)?;
        for (col_idx, cell) in row.iter().enumerate() {
            let col16 = to_col(col_idx)?;
            match cell {
                CellValue::Empty => {}
                CellValue::String(v) | CellValue::Error(v) => {
                    worksheet.write_string(row32, col16, v)?;
                }
                CellValue::Number(v) => {
                    worksheet.write_number(row32, col16, *v)?;
                }
                CellValue::Bool(v) => {
                    worksheet.write_boolean(row32, col16, *v)?;
                }
                CellValue::DateTime(v) => {
                    worksheet.write_number_with_format(row32, col16, *v, &date_format)?;
                }
            }
        }
    }

    workbook.save_to_buffer()
}

fn to_row(idx: usize) -> Result<u32, XlsxError> {
    u32::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

fn to_col(idx: usize) -> Result<u16, XlsxError> {
    u16::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}
