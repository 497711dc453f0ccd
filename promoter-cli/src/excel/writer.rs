//! Write the long table to an in-memory XLSX workbook

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::PipelineResult;
use crate::reshape::{OUTPUT_HEADERS, OutputTable};

/// Column indices for the output sheet
mod cols {
    pub const PROMOTER: u16 = 0;
    pub const COD_PRODUS: u16 = 1;
    pub const LITERA: u16 = 2;
}

/// Serialize `table` as a single-sheet workbook named `sheet_name`
pub fn write_output_xlsx(table: &OutputTable, sheet_name: &str) -> PipelineResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(sheet_name)?;
    write_header(worksheet)?;

    // Write data rows
    for (row_idx, record) in table.rows().iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, cols::PROMOTER, &record.promoter)?;
        worksheet.write_string(row, cols::COD_PRODUS, &record.cod_produs)?;
        worksheet.write_string(row, cols::LITERA, &record.litera)?;
    }

    worksheet.autofit();

    let bytes = workbook.save_to_buffer()?;
    log::debug!("Excel output: {} rows, {} bytes", table.len(), bytes.len());
    Ok(bytes)
}

fn write_header(ws: &mut Worksheet) -> PipelineResult<()> {
    let bold = Format::new().set_bold();
    for (col, name) in OUTPUT_HEADERS.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, &bold)?;
    }
    Ok(())
}
