use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Shown in place of amounts and quantities that are not finite.
pub(crate) const NOT_A_NUMBER: &str = "—";

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, RUB = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount rounded to the currency's minor units, with ru locale
/// grouping (non-breaking space), decimal comma and currency symbol suffix,
/// i.e. `1 234,50 ₽`.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    let decimal_places = decimal_places(currency);
    let scale = 10u64.pow(decimal_places);
    let minor_units = (amount.abs() * scale as f64).round() as u64;
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::ru);
    let sign = if amount < 0.0 && minor_units != 0 {
        Locale::ru.minus_sign()
    } else {
        ""
    };
    if decimal_places == 0 {
        format!("{}{} {}", sign, integer_part, currency.symbol())
    } else {
        format!(
            "{}{}{}{:0width$} {}",
            sign,
            integer_part,
            Locale::ru.decimal(),
            minor_units % scale,
            currency.symbol(),
            width = decimal_places as usize,
        )
    }
}

/// Quantities are printed as-is, grouped when integral.
pub(crate) fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        NOT_A_NUMBER.to_string()
    } else if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        (quantity as i64).to_formatted_string(&Locale::ru)
    } else {
        quantity.to_string().replace('.', Locale::ru.decimal())
    }
}
