use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

use super::{Cell, SummaryRow, HEADERS, SHEET_NAME};
use crate::error::BudgetError;

pub(super) fn write_workbook(rows: &[SummaryRow], path: &Path) -> Result<(), BudgetError> {
    build_workbook(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|e| BudgetError::export_failed(path, e))
}

fn build_workbook(rows: &[SummaryRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        sheet.write_string_with_format(0, col, header, &bold)?;
    }

    for (row, entry) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, &entry.label)?;
        match &entry.value {
            Cell::Amount(amount) => {
                sheet.write_number(row, 1, amount.to_f64().unwrap_or_default())?;
            }
            Cell::Text(text) => {
                sheet.write_string(row, 1, text)?;
            }
        }
    }

    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(1, 14)?;

    Ok(workbook)
}
