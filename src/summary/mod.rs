//! Values derived from a [`BudgetPlan`]. Nothing here is cached: every
//! function is a pure read of the plan it is handed.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BudgetPlan, ExpenseCategory, ExpenseSet};

/// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
pub(crate) fn total_expenses(expenses: &ExpenseSet) -> Decimal {
    expenses
        .iter()
        .fold(Decimal::ZERO, |acc, (_, amount)| acc.saturating_add(amount))
}

pub(crate) fn savings(plan: &BudgetPlan) -> Decimal {
    plan.income.saturating_sub(total_expenses(&plan.expenses))
}

/// Savings as a percentage of income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SavingsRate {
    Percent(Decimal),
    /// Income is zero, so there is nothing to divide by.
    Indeterminate,
}

impl SavingsRate {
    pub(crate) fn of(plan: &BudgetPlan) -> Self {
        let hundred = Decimal::ONE_HUNDRED;
        savings(plan)
            .checked_div(plan.income)
            .and_then(|ratio| ratio.checked_mul(hundred))
            .map_or(Self::Indeterminate, Self::Percent)
    }

    pub(crate) fn percent(&self) -> Option<Decimal> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::Indeterminate => None,
        }
    }

    /// Two decimals and a trailing `%`, e.g. `"23.50%"`; `"N/A"` without income.
    pub(crate) fn formatted(&self) -> String {
        match self {
            Self::Percent(p) => {
                let rounded = p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.2}%")
            }
            Self::Indeterminate => "N/A".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Recommendation {
    OverBudget,
    LowSavings,
    GoodSavings,
    GreatSavings,
    NoIncome,
}

impl Recommendation {
    /// First matching tier wins; thresholds use the unrounded rate.
    pub(crate) fn for_rate(rate: SavingsRate) -> Self {
        let Some(pct) = rate.percent() else {
            return Self::NoIncome;
        };
        if pct < Decimal::ZERO {
            Self::OverBudget
        } else if pct < Decimal::TEN {
            Self::LowSavings
        } else if pct < Decimal::from(20) {
            Self::GoodSavings
        } else {
            Self::GreatSavings
        }
    }

    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::OverBudget => {
                "Your expenses exceed your income. Consider reducing some expenses."
            }
            Self::LowSavings => {
                "You're saving less than 10% of your income. Try to increase your savings."
            }
            Self::GoodSavings => {
                "You're saving a good amount. Aim for 20% or more for long-term financial health."
            }
            Self::GreatSavings => "Great job! You're saving more than 20% of your income.",
            Self::NoIncome => "Enter your monthly income to get a savings recommendation.",
        }
    }

    pub(crate) fn is_warning(&self) -> bool {
        matches!(self, Self::OverBudget | Self::LowSavings | Self::NoIncome)
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// One pie slice: capitalized label plus the category's amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChartSlice {
    pub(crate) category: ExpenseCategory,
    pub(crate) label: &'static str,
    pub(crate) value: Decimal,
}

impl ChartSlice {
    /// Index into a colour palette of `palette_len` entries, wrapping.
    pub(crate) fn color_index(&self, palette_len: usize) -> usize {
        if palette_len == 0 {
            return 0;
        }
        self.category.index() % palette_len
    }
}

pub(crate) fn chart_data(expenses: &ExpenseSet) -> Vec<ChartSlice> {
    expenses
        .iter()
        .map(|(category, value)| ChartSlice {
            category,
            label: category.label(),
            value,
        })
        .collect()
}

/// Snapshot of every derived value for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetSummary {
    pub(crate) income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) savings: Decimal,
    pub(crate) savings_rate: SavingsRate,
    pub(crate) recommendation: Recommendation,
    pub(crate) chart: Vec<ChartSlice>,
}

impl BudgetSummary {
    pub(crate) fn of(plan: &BudgetPlan) -> Self {
        let savings_rate = SavingsRate::of(plan);
        Self {
            income: plan.income,
            total_expenses: total_expenses(&plan.expenses),
            savings: savings(plan),
            savings_rate,
            recommendation: Recommendation::for_rate(savings_rate),
            chart: chart_data(&plan.expenses),
        }
    }
}
