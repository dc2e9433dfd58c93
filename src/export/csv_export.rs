use std::path::Path;

use super::{Cell, SummaryRow, HEADERS};
use crate::error::BudgetError;

pub(super) fn write_csv(rows: &[SummaryRow], path: &Path) -> Result<(), BudgetError> {
    let fail = |e: csv::Error| BudgetError::export_failed(path, e);

    let mut wtr = csv::Writer::from_path(path).map_err(fail)?;
    wtr.write_record(HEADERS).map_err(fail)?;

    for row in rows {
        let value = match &row.value {
            Cell::Amount(amount) => amount.normalize().to_string(),
            Cell::Text(text) => text.clone(),
        };
        wtr.write_record([row.label.as_str(), value.as_str()])
            .map_err(fail)?;
    }

    wtr.flush()
        .map_err(|e| BudgetError::export_failed(path, e))?;
    Ok(())
}
