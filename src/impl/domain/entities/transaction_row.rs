use std::cmp::Ordering;

use serde_derive::{Deserialize, Serialize};

/// Identifier of the physical unit (e.g. one engine) a row belongs to.
///
/// Values that are absent or not integers are kept verbatim as `Literal`, so
/// that they still group together by equality instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionNumber {
    Number(i64),
    Literal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub position_number: PositionNumber,
    pub work_group: String,
    pub item_name: String,
    pub transaction_type: Direction,
    pub quantity: f64,
    pub price: f64,

    // Descriptive only.
    pub service_name: String,
    pub subdivision_name: String,
    pub reception_number: String,
    pub reception_date: String,
    pub counterparty_name: String,
}

// --

impl PositionNumber {
    /// Display order of positions: numbers ascending, then literals. Literals
    /// compare equal to each other so a stable sort keeps them in first-seen
    /// order.
    pub fn display_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PositionNumber::Number(a), PositionNumber::Number(b)) => a.cmp(b),
            (PositionNumber::Number(_), PositionNumber::Literal(_)) => Ordering::Less,
            (PositionNumber::Literal(_), PositionNumber::Number(_)) => Ordering::Greater,
            (PositionNumber::Literal(_), PositionNumber::Literal(_)) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for PositionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionNumber::Number(n) => write!(f, "{}", n),
            PositionNumber::Literal(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for PositionNumber {
    fn from(n: i64) -> Self {
        PositionNumber::Number(n)
    }
}

impl TransactionRow {
    /// `quantity × price`, before any sign convention is applied.
    pub fn amount(&self) -> f64 {
        self.quantity * self.price
    }
}
