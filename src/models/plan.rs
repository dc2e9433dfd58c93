use rust_decimal::Decimal;

use super::ExpenseCategory;

pub const DEFAULT_INCOME: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Monthly amounts for the six fixed categories.
///
/// Named fields instead of a keyed map: every category is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseSet {
    pub housing: Decimal,
    pub transportation: Decimal,
    pub food: Decimal,
    pub utilities: Decimal,
    pub entertainment: Decimal,
    pub other: Decimal,
}

impl Default for ExpenseSet {
    fn default() -> Self {
        Self {
            housing: Decimal::from(1500),
            transportation: Decimal::from(400),
            food: Decimal::from(600),
            utilities: Decimal::from(300),
            entertainment: Decimal::from(200),
            other: Decimal::from(300),
        }
    }
}

impl ExpenseSet {
    /// All categories set to zero.
    #[cfg(test)]
    pub fn zeroed() -> Self {
        Self {
            housing: Decimal::ZERO,
            transportation: Decimal::ZERO,
            food: Decimal::ZERO,
            utilities: Decimal::ZERO,
            entertainment: Decimal::ZERO,
            other: Decimal::ZERO,
        }
    }

    pub fn get(&self, category: ExpenseCategory) -> Decimal {
        match category {
            ExpenseCategory::Housing => self.housing,
            ExpenseCategory::Transportation => self.transportation,
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Utilities => self.utilities,
            ExpenseCategory::Entertainment => self.entertainment,
            ExpenseCategory::Other => self.other,
        }
    }

    pub fn set(&mut self, category: ExpenseCategory, amount: Decimal) {
        let slot = match category {
            ExpenseCategory::Housing => &mut self.housing,
            ExpenseCategory::Transportation => &mut self.transportation,
            ExpenseCategory::Food => &mut self.food,
            ExpenseCategory::Utilities => &mut self.utilities,
            ExpenseCategory::Entertainment => &mut self.entertainment,
            ExpenseCategory::Other => &mut self.other,
        };
        *slot = amount;
    }

    /// `(category, amount)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Decimal)> + '_ {
        ExpenseCategory::all().iter().map(move |&c| (c, self.get(c)))
    }
}

/// The planner's whole state: income plus the expense set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPlan {
    pub income: Decimal,
    pub expenses: ExpenseSet,
}

impl Default for BudgetPlan {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME,
            expenses: ExpenseSet::default(),
        }
    }
}

impl BudgetPlan {
    /// Replace the income. Input bounds are checked by the caller, not here.
    pub fn set_income(&mut self, income: Decimal) {
        self.income = income;
    }

    /// Replace exactly one category; the other five are untouched.
    pub fn set_expense(&mut self, category: ExpenseCategory, amount: Decimal) {
        self.expenses.set(category, amount);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
