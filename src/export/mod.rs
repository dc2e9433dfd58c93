mod csv_export;
mod text;
mod xlsx;

use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::BudgetError;
use crate::models::BudgetPlan;
use crate::summary::BudgetSummary;

pub(crate) use text::render_text;

pub(crate) const SHEET_NAME: &str = "Budget Summary";
pub(crate) const HEADERS: [&str; 2] = ["Category", "Amount"];
pub(crate) const SUCCESS_TITLE: &str = "Budget Downloaded";
pub(crate) const FAILURE_TITLE: &str = "Export Failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    Spreadsheet,
    Text,
    Csv,
}

impl ExportFormat {
    pub(crate) fn all() -> &'static [ExportFormat] {
        &[Self::Spreadsheet, Self::Text, Self::Csv]
    }

    pub(crate) fn file_name(&self) -> &'static str {
        match self {
            Self::Spreadsheet => "my_budget_plan.xlsx",
            Self::Text => "my_budget_plan.txt",
            Self::Csv => "my_budget_plan.csv",
        }
    }

    /// Description shown under [`SUCCESS_TITLE`] after a successful export.
    pub(crate) fn success_message(&self) -> &'static str {
        match self {
            Self::Spreadsheet => "Your budget has been exported as an Excel file.",
            Self::Text => "Your budget has been exported as a text file.",
            Self::Csv => "Your budget has been exported as a CSV file.",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "excel" | "spreadsheet" => Some(Self::Spreadsheet),
            "txt" | "text" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spreadsheet => write!(f, "xlsx"),
            Self::Text => write!(f, "txt"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Value column of a summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cell {
    Amount(Decimal),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryRow {
    pub(crate) label: String,
    pub(crate) value: Cell,
}

impl SummaryRow {
    fn amount(label: &str, value: Decimal) -> Self {
        Self {
            label: label.to_string(),
            value: Cell::Amount(value),
        }
    }
}

/// The `Category | Amount` table shared by the spreadsheet and CSV exports:
/// income, each category, total, savings, then the percentage as text.
pub(crate) fn summary_rows(plan: &BudgetPlan) -> Vec<SummaryRow> {
    let summary = BudgetSummary::of(plan);

    let mut rows = vec![SummaryRow::amount("Income", summary.income)];
    rows.extend(
        plan.expenses
            .iter()
            .map(|(category, amount)| SummaryRow::amount(category.label(), amount)),
    );
    rows.push(SummaryRow::amount("Total Expenses", summary.total_expenses));
    rows.push(SummaryRow::amount("Savings", summary.savings));
    rows.push(SummaryRow {
        label: "Savings Percentage".into(),
        value: Cell::Text(summary.savings_rate.formatted()),
    });
    rows
}

/// Write `plan` into `dir` under the format's fixed file name.
pub(crate) fn export_plan(
    plan: &BudgetPlan,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, BudgetError> {
    let path = dir.join(format.file_name());

    let result = match format {
        ExportFormat::Spreadsheet => xlsx::write_workbook(&summary_rows(plan), &path),
        ExportFormat::Text => std::fs::write(&path, render_text(plan))
            .map_err(|e| BudgetError::export_failed(&path, e)),
        ExportFormat::Csv => csv_export::write_csv(&summary_rows(plan), &path),
    };

    match result {
        Ok(()) => {
            info!(format = %format, path = %path.display(), "budget exported");
            Ok(path)
        }
        Err(e) => {
            warn!(format = %format, error = %e, "export failed");
            Err(e)
        }
    }
}
