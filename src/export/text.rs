use crate::models::BudgetPlan;
use crate::money::format_grouped;
use crate::summary::BudgetSummary;

/// Render the fixed-layout plain-text report. No trailing newline.
pub(crate) fn render_text(plan: &BudgetPlan) -> String {
    let summary = BudgetSummary::of(plan);

    let mut lines: Vec<String> = vec![
        "BUDGET SUMMARY".into(),
        "==============".into(),
        String::new(),
        format!("Income: ${}", format_grouped(summary.income)),
        String::new(),
        "EXPENSES:".into(),
    ];

    for slice in &summary.chart {
        lines.push(format!("{}: ${}", slice.label, format_grouped(slice.value)));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total Expenses: ${}",
        format_grouped(summary.total_expenses)
    ));
    lines.push(format!("Savings: ${}", format_grouped(summary.savings)));
    lines.push(format!(
        "Savings Percentage: {}",
        summary.savings_rate.formatted()
    ));
    lines.push(String::new());
    lines.push(format!("Recommendation: {}", summary.recommendation));

    lines.join("\n")
}
