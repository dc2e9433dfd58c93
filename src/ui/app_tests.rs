#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::ExpenseCategory;
use crate::ui::notification::NotificationKind;

fn app() -> App {
    App::new(std::env::temp_dir())
}

#[test]
fn test_new_app_has_defaults() {
    let app = app();
    assert!(app.running);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.plan, BudgetPlan::default());
    assert_eq!(app.fields.len(), 7);
    assert_eq!(app.focused_field(), AmountField::Income);
}

#[test]
fn test_focus_moves_within_bounds() {
    let mut app = app();
    app.focus_prev();
    assert_eq!(app.field_index, 0);
    app.focus_next();
    assert_eq!(
        app.focused_field(),
        AmountField::Expense(ExpenseCategory::Housing)
    );
    app.focus_last();
    assert_eq!(app.focused_field(), AmountField::Expense(ExpenseCategory::Other));
    app.focus_next();
    assert_eq!(app.field_index, 6);
    app.focus_first();
    assert_eq!(app.field_index, 0);
}

#[test]
fn test_begin_edit_prefills_current_value() {
    let mut app = app();
    app.focus_next();
    app.begin_edit();
    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.command_input, "1500");
}

#[test]
fn test_commit_edit_updates_plan() {
    let mut app = app();
    app.focus_next();
    app.begin_edit_with('2');
    app.command_input.push_str(",000");
    app.commit_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.command_input.is_empty());
    assert_eq!(app.plan.expenses.housing, dec!(2000));
    assert_eq!(app.summary().total_expenses, dec!(3800));
    assert_eq!(app.status_message, "Housing set to $2,000.00");
}

#[test]
fn test_rejected_edit_keeps_prior_value() {
    let mut app = app();
    app.begin_edit_with('x');
    app.commit_edit();
    assert_eq!(app.plan.income, dec!(5000));
    let toast = app.notifications.current().unwrap();
    assert_eq!(toast.kind, NotificationKind::Error);
    assert!(toast.description.contains("'x' is not a valid amount"));
}

#[test]
fn test_out_of_range_edit_keeps_prior_value() {
    let mut app = app();
    app.set_field(AmountField::Income, "500");
    assert_eq!(app.plan.income, dec!(5000));
    assert!(app.status_message.contains("between 1000 and 100000"));
}

#[test]
fn test_cancel_edit() {
    let mut app = app();
    app.begin_edit();
    app.command_input = "9999".into();
    app.cancel_edit();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.plan.income, dec!(5000));
}

#[test]
fn test_adjust_focused() {
    let mut app = app();
    app.adjust_focused(1);
    assert_eq!(app.plan.income, dec!(5100));
    app.focus_last();
    app.adjust_focused(-1);
    assert_eq!(app.plan.expenses.other, dec!(250));
}

#[test]
fn test_export_success_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(dir.path().to_path_buf());
    app.export(ExportFormat::Text);
    assert!(dir.path().join("my_budget_plan.txt").exists());
    let toast = app.notifications.current().unwrap();
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(toast.title, "Budget Downloaded");
    assert_eq!(
        toast.description,
        "Your budget has been exported as a text file."
    );
}

#[test]
fn test_export_failure_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(dir.path().join("missing"));
    app.export(ExportFormat::Spreadsheet);
    let toast = app.notifications.current().unwrap();
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.title, "Export Failed");
}

#[test]
fn test_reset_restores_defaults() {
    let mut app = app();
    app.set_field(AmountField::Income, "12000");
    app.reset();
    assert_eq!(app.plan, BudgetPlan::default());
}
