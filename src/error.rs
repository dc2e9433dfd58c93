use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by plan edits, input parsing and exports.
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Input that does not parse as an amount
    #[error("{field}: '{input}' is not a valid amount")]
    InvalidInput { field: String, input: String },

    /// Amount outside the field's input bounds
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Writing an export file failed
    #[error("Failed to export {}: {reason}", path.display())]
    ExportFailed { path: PathBuf, reason: String },
}

impl BudgetError {
    pub(crate) fn export_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ExportFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
