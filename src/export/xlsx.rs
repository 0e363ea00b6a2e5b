//! Excel export
//!
//! Writes a holdings table to an in-memory `.xlsx` workbook: one sheet, a
//! bold header row, one row per holding.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{HoldingsError, HoldingsResult};
use crate::models::{columns, HoldingsTable};

use super::row::ExportRow;

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Investeringer";

/// Column widths, in export column order
const COLUMN_WIDTHS: [f64; 10] = [6.0, 24.0, 36.0, 20.0, 24.0, 48.0, 20.0, 14.0, 16.0, 36.0];

/// Export a table to xlsx bytes
///
/// An empty table produces a header-only workbook.
pub fn export_xlsx(table: &HoldingsTable) -> HoldingsResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let value_format = Format::new().set_num_format("#,##0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (header, width)) in columns::EXPORT.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, record) in table.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| {
            HoldingsError::Serialization(format!("Too many rows for a worksheet: {}", i + 1))
        })?;
        let r = ExportRow::from(record);

        let text_cells: [(u16, &str); 9] = [
            (0, r.marker),
            (1, r.area),
            (2, r.security_name),
            (4, r.flagged_by),
            (5, r.reason),
            (6, r.category),
            (7, r.security_type),
            (8, r.isin),
            (9, r.issuer),
        ];
        for (col, text) in text_cells {
            // Excel has no empty string cells
            if !text.is_empty() {
                worksheet.write_string(row, col, text)?;
            }
        }
        worksheet.write_number_with_format(row, 3, r.market_value, &value_format)?;
    }

    let bytes = workbook.save_to_buffer()?;
    log::debug!("Wrote xlsx workbook: {} rows, {} bytes", table.len(), bytes.len());
    Ok(bytes)
}
