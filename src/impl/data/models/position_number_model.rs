use crate::entities::PositionNumber;

/// Position cell. Integers (including integral decimals such as `"3.0"`, as
/// spreadsheets often export them) become numbers; anything else is kept
/// verbatim.
#[derive(Debug)]
pub(crate) struct PositionNumberModel(PositionNumber);
impl PositionNumberModel {
    pub(crate) fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return PositionNumberModel(PositionNumber::Number(n));
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                PositionNumberModel(PositionNumber::Number(f as i64))
            }
            _ => PositionNumberModel(PositionNumber::Literal(s.to_string())),
        }
    }
}

impl Into<PositionNumber> for PositionNumberModel {
    fn into(self) -> PositionNumber {
        self.0
    }
}
