use crate::entities::Direction;

/// Maps a transaction type cell onto a direction. Accepts the configured
/// labels (exact match after trimming) and the English variant names in any
/// case.
#[derive(Debug)]
pub(crate) struct TransactionTypeModel(Direction);
impl TransactionTypeModel {
    pub(crate) fn from_label(raw: &str, income_label: &str, expense_label: &str) -> Option<Self> {
        let label = raw.trim();
        if label == income_label || label.eq_ignore_ascii_case("income") {
            Some(TransactionTypeModel(Direction::Income))
        } else if label == expense_label || label.eq_ignore_ascii_case("expense") {
            Some(TransactionTypeModel(Direction::Expense))
        } else {
            None
        }
    }
}

impl Into<Direction> for TransactionTypeModel {
    fn into(self) -> Direction {
        self.0
    }
}
