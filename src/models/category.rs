use crate::error::BudgetError;

/// One of the six fixed expense categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Food,
    Utilities,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Housing,
            Self::Transportation,
            Self::Food,
            Self::Utilities,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Lowercase key used by commands and CLI flags.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }

    /// Capitalized label used in the chart legend and in every export.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Food => "Food",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Position in declaration order. Drives legend order and palette index.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }

    /// Find a category by key (case-insensitive).
    pub fn find_by_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().copied().find(|c| c.key() == lower)
    }

    /// Like [`find_by_name`](Self::find_by_name), but unknown names are an error.
    pub fn parse(name: &str) -> Result<Self, BudgetError> {
        Self::find_by_name(name).ok_or_else(|| BudgetError::UnknownCategory(name.trim().to_string()))
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
