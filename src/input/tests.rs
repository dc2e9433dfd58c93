#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::error::BudgetError;
use crate::models::{BudgetPlan, ExpenseCategory};

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("1500").unwrap(), dec!(1500));
    assert_eq!(parse_amount("42.99").unwrap(), dec!(42.99));
}

#[test]
fn test_parse_amount_with_currency_and_commas() {
    assert_eq!(parse_amount("$1,500").unwrap(), dec!(1500));
    assert_eq!(parse_amount("$1,234,567.89").unwrap(), dec!(1234567.89));
}

#[test]
fn test_parse_amount_whitespace() {
    assert_eq!(parse_amount("  300 ").unwrap(), dec!(300));
}

#[test]
fn test_parse_amount_negative() {
    assert_eq!(parse_amount("-25").unwrap(), dec!(-25));
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("12a").is_err());
    assert!(parse_amount("1,50").is_err());
    assert!(parse_amount("1.2.3").is_err());
}

// ── AmountField ───────────────────────────────────────────────

#[test]
fn test_form_order() {
    let labels: Vec<&str> = AmountField::all().iter().map(|f| f.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Income",
            "Housing",
            "Transportation",
            "Food",
            "Utilities",
            "Entertainment",
            "Other"
        ]
    );
}

#[test]
fn test_income_bounds() {
    let f = AmountField::Income;
    assert!(f.validate(dec!(1000)).is_ok());
    assert!(f.validate(dec!(100000)).is_ok());
    assert!(f.validate(dec!(999.99)).is_err());
    assert!(f.validate(dec!(100000.01)).is_err());
}

#[test]
fn test_expense_bounds() {
    let f = AmountField::Expense(ExpenseCategory::Food);
    assert!(f.validate(dec!(0)).is_ok());
    assert!(f.validate(dec!(50000)).is_ok());
    assert!(f.validate(dec!(-1)).is_err());
    assert!(f.validate(dec!(50001)).is_err());
}

#[test]
fn test_apply_valid_input() {
    let mut plan = BudgetPlan::default();
    let v = AmountField::Expense(ExpenseCategory::Housing)
        .apply(&mut plan, "$2,000")
        .unwrap();
    assert_eq!(v, dec!(2000));
    assert_eq!(plan.expenses.housing, dec!(2000));
}

#[test]
fn test_apply_invalid_input_keeps_state() {
    let mut plan = BudgetPlan::default();
    let err = AmountField::Income.apply(&mut plan, "lots").unwrap_err();
    assert!(matches!(
        err,
        BudgetError::InvalidInput { ref field, ref input } if field == "Income" && input == "lots"
    ));
    assert_eq!(plan, BudgetPlan::default());
}

#[test]
fn test_apply_out_of_range_keeps_state() {
    let mut plan = BudgetPlan::default();
    let err = AmountField::Expense(ExpenseCategory::Other)
        .apply(&mut plan, "60000")
        .unwrap_err();
    assert!(matches!(err, BudgetError::OutOfRange { .. }));
    assert_eq!(err.to_string(), "Other must be between 0 and 50000 (got 60000)");
    assert_eq!(plan, BudgetPlan::default());
}

#[test]
fn test_adjust_steps_and_clamps() {
    let mut plan = BudgetPlan::default();
    assert_eq!(AmountField::Income.adjust(&mut plan, 1), dec!(5100));
    assert_eq!(AmountField::Income.adjust(&mut plan, -2), dec!(4900));

    let ent = AmountField::Expense(ExpenseCategory::Entertainment);
    assert_eq!(ent.adjust(&mut plan, -3), dec!(50));
    assert_eq!(ent.adjust(&mut plan, -3), dec!(0));
    assert_eq!(plan.expenses.entertainment, dec!(0));

    plan.set_income(dec!(99950));
    assert_eq!(AmountField::Income.adjust(&mut plan, 1), dec!(100000));
}

#[test]
fn test_current_reads_plan() {
    let plan = BudgetPlan::default();
    assert_eq!(AmountField::Income.current(&plan), dec!(5000));
    assert_eq!(
        AmountField::Expense(ExpenseCategory::Transportation).current(&plan),
        dec!(400)
    );
}
