use fractic_server_error::ServerError;
use iso_currency::Currency;
use ron::from_str;

use crate::{
    entities::{
        ExpenseSign, HierarchyConfig, DEFAULT_BASE_ITEM_DELIMITER, DEFAULT_EXPENSE_LABEL,
        DEFAULT_INCOME_LABEL, DEFAULT_TOTALS_TOLERANCE,
    },
    errors::{InvalidConfig, InvalidIsoCurrencyCode, InvalidRon},
};

/// RON representation of the configuration. Every field may be omitted, e.g.
///
/// ```ron
/// (expense_sign: AsStored, currency: "EUR")
/// ```
#[derive(Debug, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct HierarchyConfigModel {
    expense_sign: ExpenseSign,
    base_item_delimiter: String,
    income_label: String,
    expense_label: String,
    currency: String,
    totals_tolerance: f64,
}

impl Default for HierarchyConfigModel {
    fn default() -> Self {
        Self {
            expense_sign: ExpenseSign::default(),
            base_item_delimiter: DEFAULT_BASE_ITEM_DELIMITER.to_string(),
            income_label: DEFAULT_INCOME_LABEL.to_string(),
            expense_label: DEFAULT_EXPENSE_LABEL.to_string(),
            currency: Currency::RUB.code().to_string(),
            totals_tolerance: DEFAULT_TOTALS_TOLERANCE,
        }
    }
}

impl TryFrom<HierarchyConfigModel> for HierarchyConfig {
    type Error = ServerError;

    fn try_from(model: HierarchyConfigModel) -> Result<Self, Self::Error> {
        if model.base_item_delimiter.is_empty() {
            return Err(InvalidConfig::new("base_item_delimiter must not be empty"));
        }
        if model.income_label.trim().is_empty() || model.expense_label.trim().is_empty() {
            return Err(InvalidConfig::new("transaction type labels must not be empty"));
        }
        if model.income_label.trim() == model.expense_label.trim() {
            return Err(InvalidConfig::new(
                "income and expense labels must be different",
            ));
        }
        if !model.totals_tolerance.is_finite() || model.totals_tolerance < 0.0 {
            return Err(InvalidConfig::new(
                "totals_tolerance must be a finite, non-negative number",
            ));
        }
        let currency = Currency::from_code(model.currency.trim())
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&model.currency))?;
        Ok(HierarchyConfig {
            expense_sign: model.expense_sign,
            base_item_delimiter: model.base_item_delimiter,
            income_label: model.income_label.trim().to_string(),
            expense_label: model.expense_label.trim().to_string(),
            currency,
            totals_tolerance: model.totals_tolerance,
        })
    }
}

impl HierarchyConfig {
    /// Reads a configuration from RON. Omitted fields take their defaults.
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        let model: HierarchyConfigModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("HierarchyConfig", &e))?;
        model.try_into()
    }
}
