use serde_derive::Serialize;

use super::transaction_row::{Direction, PositionNumber, TransactionRow};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub income_total: f64,
    pub expense_total: f64,
    pub net_total: f64,
}

/// One level of the hierarchy. The same shape is used for positions, work
/// groups and base items; only the key, header and child types differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupNode<K, C, H = ()> {
    pub key: K,
    pub header: H,
    pub totals: Totals,
    pub children: Vec<C>,
}

/// Leaf bucket: all rows of one direction under a base item, in input order.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionNode {
    pub direction: Direction,
    pub total: f64,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionHeader {
    pub service_name: String,
    pub subdivision_name: String,
}

pub type BaseItemNode = GroupNode<String, DirectionNode>;
pub type WorkGroupNode = GroupNode<String, BaseItemNode>;
pub type PositionNode = GroupNode<PositionNumber, WorkGroupNode, PositionHeader>;

// --

impl Totals {
    pub fn new(income_total: f64, expense_total: f64) -> Self {
        Self {
            income_total,
            expense_total,
            net_total: income_total + expense_total,
        }
    }

    pub fn for_direction(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Income => self.income_total,
            Direction::Expense => self.expense_total,
        }
    }
}

impl std::ops::Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals::new(
            self.income_total + other.income_total,
            self.expense_total + other.expense_total,
        )
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), |acc, t| acc + t)
    }
}

/// Gives every level a uniform view of its own totals, so that children can be
/// summed regardless of their concrete node type.
pub trait HasTotals {
    fn totals(&self) -> Totals;
}

impl<K, C, H> HasTotals for GroupNode<K, C, H> {
    fn totals(&self) -> Totals {
        self.totals
    }
}

impl HasTotals for DirectionNode {
    fn totals(&self) -> Totals {
        match self.direction {
            Direction::Income => Totals::new(self.total, 0.0),
            Direction::Expense => Totals::new(0.0, self.total),
        }
    }
}

/// Depth-first iteration over every row contained in a node, in display order.
pub trait ContainsRows {
    fn rows(&self) -> Box<dyn Iterator<Item = &TransactionRow> + '_>;
}

impl ContainsRows for DirectionNode {
    fn rows(&self) -> Box<dyn Iterator<Item = &TransactionRow> + '_> {
        Box::new(self.rows.iter())
    }
}

impl<K, C: ContainsRows, H> ContainsRows for GroupNode<K, C, H> {
    fn rows(&self) -> Box<dyn Iterator<Item = &TransactionRow> + '_> {
        Box::new(self.children.iter().flat_map(|c| c.rows()))
    }
}

impl BaseItemNode {
    pub fn direction(&self, direction: Direction) -> Option<&DirectionNode> {
        self.children.iter().find(|d| d.direction == direction)
    }
}
