use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidNumericValue;

/// Quantity or price cell as exported from the reception sheet, e.g.
/// `"1 234,50"`, `"1,234.50"` or `"(300)"` for a negative value.
#[derive(Debug)]
pub(crate) struct NumericCellModel(pub f64);
impl FromStr for NumericCellModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Also drops NBSP and narrow NBSP thousands separators.
        let raw: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')');
        let normalized = if numeric_part.contains('.') {
            numeric_part.replace(',', "")
        } else {
            numeric_part.replace(',', ".")
        };
        let value = normalized
            .parse::<f64>()
            .map_err(|_| InvalidNumericValue::new(s))?;
        Ok(NumericCellModel(if is_negative { -value } else { value }))
    }
}

impl Into<f64> for NumericCellModel {
    fn into(self) -> f64 {
        self.0
    }
}
