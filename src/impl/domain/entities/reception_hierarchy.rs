use serde_derive::Serialize;

use super::{
    group_node::{PositionNode, Totals},
    transaction_row::TransactionRow,
};

/// Document-level details, copied verbatim from the first input row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceptionHeader {
    pub reception_number: String,
    pub reception_date: String,
    pub counterparty_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceptionHierarchy {
    pub header: ReceptionHeader,
    pub totals: Totals,
    pub positions: Vec<PositionNode>,
}

/// Result of a build. Empty input is reported as `NoData` rather than as a
/// hierarchy with no positions, so callers can tell "nothing loaded" apart
/// from "everything sums to zero".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "hierarchy")]
pub enum ReceptionPreview {
    NoData,
    Data(ReceptionHierarchy),
}

// --

impl ReceptionHeader {
    pub(crate) fn from_row(row: &TransactionRow) -> Self {
        Self {
            reception_number: row.reception_number.clone(),
            reception_date: row.reception_date.clone(),
            counterparty_name: row.counterparty_name.clone(),
        }
    }
}

impl ReceptionPreview {
    pub fn is_empty(&self) -> bool {
        matches!(self, ReceptionPreview::NoData)
    }

    pub fn hierarchy(&self) -> Option<&ReceptionHierarchy> {
        match self {
            ReceptionPreview::NoData => None,
            ReceptionPreview::Data(h) => Some(h),
        }
    }
}
