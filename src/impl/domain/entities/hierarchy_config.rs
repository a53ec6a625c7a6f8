use iso_currency::Currency;
use serde_derive::Deserialize;

use super::transaction_row::Direction;

/// How expense rows are signed when accumulated. Chosen once per
/// configuration and applied identically at every level of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ExpenseSign {
    /// Every expense row contributes `-|quantity × price|`.
    #[default]
    NonPositive,
    /// Expense rows contribute `quantity × price` with the sign found in the
    /// sheet (expected to be negative already).
    AsStored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyConfig {
    pub expense_sign: ExpenseSign,
    /// Separates a base item name from its instance suffix, e.g.
    /// `"Gasket_ID_2"`.
    pub base_item_delimiter: String,
    pub income_label: String,
    pub expense_label: String,
    pub currency: Currency,
    /// Relative tolerance used when cross-checking a level's totals against
    /// the sum of its children.
    pub totals_tolerance: f64,
}

// --

pub const DEFAULT_BASE_ITEM_DELIMITER: &str = "_ID_";
pub const DEFAULT_INCOME_LABEL: &str = "Доходы";
pub const DEFAULT_EXPENSE_LABEL: &str = "Расходы";
pub const DEFAULT_TOTALS_TOLERANCE: f64 = 1e-6;

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            expense_sign: ExpenseSign::default(),
            base_item_delimiter: DEFAULT_BASE_ITEM_DELIMITER.to_string(),
            income_label: DEFAULT_INCOME_LABEL.to_string(),
            expense_label: DEFAULT_EXPENSE_LABEL.to_string(),
            currency: Currency::RUB,
            totals_tolerance: DEFAULT_TOTALS_TOLERANCE,
        }
    }
}

impl ExpenseSign {
    pub(crate) fn apply(&self, amount: f64) -> f64 {
        match self {
            ExpenseSign::NonPositive => -amount.abs(),
            ExpenseSign::AsStored => amount,
        }
    }
}

impl HierarchyConfig {
    pub fn label(&self, direction: Direction) -> &str {
        match direction {
            Direction::Income => &self.income_label,
            Direction::Expense => &self.expense_label,
        }
    }
}
