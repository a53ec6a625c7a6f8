use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use log::warn;

use crate::{
    data::models::{
        numeric_cell_model::NumericCellModel, position_number_model::PositionNumberModel,
        transaction_type_model::TransactionTypeModel,
    },
    entities::{HierarchyConfig, PositionNumber, TransactionRow},
    errors::{InvalidCsv, ReadError},
};

/// Reads a reception sheet exported as CSV (with a header line). Columns, in
/// order:
///
/// `reception_number, reception_date, counterparty_name, position_number,
/// service_name, subdivision_name, work_group, item_name, transaction_type,
/// quantity, price`
#[async_trait]
pub(crate) trait ReceptionCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TransactionRow>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<TransactionRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ReceptionCsvDatasourceImpl {
    income_label: String,
    expense_label: String,
}

impl ReceptionCsvDatasourceImpl {
    pub(crate) fn new(config: &HierarchyConfig) -> Self {
        Self {
            income_label: config.income_label.clone(),
            expense_label: config.expense_label.clone(),
        }
    }

    /// Unparsable quantities and prices are kept as `NaN`, which contributes
    /// nothing to any total, instead of failing the whole sheet.
    fn numeric_or_nan(row: usize, column: &str, raw: &str) -> f64 {
        match NumericCellModel::from_str(raw) {
            Ok(v) => v.into(),
            Err(_) => {
                warn!(
                    "row {}: non-numeric {} '{}', counted as zero",
                    row, column, raw
                );
                f64::NAN
            }
        }
    }
}

#[async_trait]
impl ReceptionCsvDatasource for ReceptionCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TransactionRow>, ServerError> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                let row = i + 1;
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_reception_number = r.get(0).unwrap_or("");
                    let raw_reception_date = r.get(1).unwrap_or("");
                    let raw_counterparty_name = r.get(2).unwrap_or("");
                    let raw_position_number = r.get(3).unwrap_or("");
                    let raw_service_name = r.get(4).unwrap_or("");
                    let raw_subdivision_name = r.get(5).unwrap_or("");
                    let raw_work_group = r.get(6).unwrap_or("");
                    let raw_item_name = r.get(7).unwrap_or("");
                    let raw_transaction_type = r.get(8).unwrap_or("");
                    let raw_quantity = r.get(9).unwrap_or("");
                    let raw_price = r.get(10).unwrap_or("");

                    // Parse.
                    let position_number: PositionNumber =
                        PositionNumberModel::parse(raw_position_number).into();
                    let Some(transaction_type) = TransactionTypeModel::from_label(
                        raw_transaction_type,
                        &self.income_label,
                        &self.expense_label,
                    ) else {
                        warn!(
                            "row {}: unknown transaction type '{}', row skipped",
                            row, raw_transaction_type
                        );
                        return Ok(None);
                    };
                    let quantity = Self::numeric_or_nan(row, "quantity", raw_quantity);
                    let price = Self::numeric_or_nan(row, "price", raw_price);

                    // Build.
                    Ok(Some(TransactionRow {
                        position_number,
                        work_group: raw_work_group.into(),
                        item_name: raw_item_name.into(),
                        transaction_type: transaction_type.into(),
                        quantity,
                        price,
                        service_name: raw_service_name.into(),
                        subdivision_name: raw_subdivision_name.into(),
                        reception_number: raw_reception_number.into(),
                        reception_date: raw_reception_date.into(),
                        counterparty_name: raw_counterparty_name.into(),
                    }))
                })
            })
            .filter_map(Result::transpose)
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<TransactionRow>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
