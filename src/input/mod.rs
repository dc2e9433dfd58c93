use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::BudgetError;
use crate::models::{BudgetPlan, ExpenseCategory};

pub(crate) const INCOME_MIN: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
pub(crate) const INCOME_MAX: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
pub(crate) const EXPENSE_MIN: Decimal = Decimal::ZERO;
pub(crate) const EXPENSE_MAX: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Optional sign and `$`, digits with or without comma grouping, optional fraction.
static AMOUNT_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^-?\$?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?$").ok()
});

/// An editable amount on the planner form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountField {
    Income,
    Expense(ExpenseCategory),
}

impl AmountField {
    /// Form order: income first, then the categories in declaration order.
    pub(crate) fn all() -> Vec<AmountField> {
        std::iter::once(Self::Income)
            .chain(ExpenseCategory::all().iter().map(|&c| Self::Expense(c)))
            .collect()
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense(c) => c.label(),
        }
    }

    pub(crate) fn bounds(&self) -> (Decimal, Decimal) {
        match self {
            Self::Income => (INCOME_MIN, INCOME_MAX),
            Self::Expense(_) => (EXPENSE_MIN, EXPENSE_MAX),
        }
    }

    /// Increment used by `+`/`-` on the form.
    pub(crate) fn step(&self) -> Decimal {
        match self {
            Self::Income => Decimal::ONE_HUNDRED,
            Self::Expense(_) => Decimal::from(50),
        }
    }

    pub(crate) fn current(&self, plan: &BudgetPlan) -> Decimal {
        match self {
            Self::Income => plan.income,
            Self::Expense(c) => plan.expenses.get(*c),
        }
    }

    pub(crate) fn validate(&self, value: Decimal) -> Result<Decimal, BudgetError> {
        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(BudgetError::OutOfRange {
                field: self.label().to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Parse, bound-check and store `raw`. On any error the plan is unchanged.
    pub(crate) fn apply(&self, plan: &mut BudgetPlan, raw: &str) -> Result<Decimal, BudgetError> {
        let value = parse_amount(raw).map_err(|_| BudgetError::InvalidInput {
            field: self.label().to_string(),
            input: raw.to_string(),
        })?;
        self.set(plan, value)
    }

    /// Bound-check and store an already parsed value.
    pub(crate) fn set(&self, plan: &mut BudgetPlan, value: Decimal) -> Result<Decimal, BudgetError> {
        let value = self.validate(value)?;
        match self {
            Self::Income => plan.set_income(value),
            Self::Expense(c) => plan.set_expense(*c, value),
        }
        Ok(value)
    }

    /// Move the current value by `delta` steps, clamped to the bounds.
    pub(crate) fn adjust(&self, plan: &mut BudgetPlan, delta: i32) -> Decimal {
        let (min, max) = self.bounds();
        let next = self
            .current(plan)
            .saturating_add(self.step() * Decimal::from(delta))
            .clamp(min, max);
        match self {
            Self::Income => plan.set_income(next),
            Self::Expense(c) => plan.set_expense(*c, next),
        }
        next
    }
}

impl std::fmt::Display for AmountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a user-typed amount such as `1500`, `1,500` or `$1,500.50`.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, BudgetError> {
    let trimmed = s.trim();
    let invalid = || BudgetError::InvalidInput {
        field: "Amount".into(),
        input: s.to_string(),
    };

    if let Some(re) = AMOUNT_SHAPE.as_ref() {
        if !re.is_match(trimmed) {
            return Err(invalid());
        }
    }

    let cleaned = trimmed.replace(['$', ','], "");
    Decimal::from_str(&cleaned).map_err(|_| invalid())
}

#[cfg(test)]
mod tests;
