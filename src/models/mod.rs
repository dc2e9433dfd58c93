mod category;
mod plan;

pub use category::ExpenseCategory;
pub use plan::{BudgetPlan, ExpenseSet};
