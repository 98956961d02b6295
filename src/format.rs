use crate::constants::{CURRENCY_SYMBOLS, DEFAULT_CURRENCY_SYMBOL};
use crate::models::Fee;

pub const NO_CHARGE_BADGE: &str = r#"<span class="no-charge">No charge</span>"#;

pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCY_SYMBOLS.get(code).copied().unwrap_or(DEFAULT_CURRENCY_SYMBOL)
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{symbol}{amount:.2}")
}

pub fn format_fee(fee: Option<&Fee>) -> String {
    match fee {
        None => "-".to_string(),
        Some(fee) if fee.is_no_charge() => NO_CHARGE_BADGE.to_string(),
        Some(Fee::Label(label)) => label.clone(),
        Some(Fee::Amount(amount)) => format_currency(*amount, DEFAULT_CURRENCY_SYMBOL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_for_known_codes() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("GBP"), "£");
    }

    #[test]
    fn symbol_falls_back_to_default() {
        assert_eq!(currency_symbol("JPY"), "R");
        assert_eq!(currency_symbol(""), "R");
    }

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(1234.56, "R"), "R1234.56");
        assert_eq!(format_currency(15.0, "R"), "R15.00");
        assert_eq!(format_currency(2.5, "$"), "$2.50");
    }

    #[test]
    fn zero_fee_is_no_charge_badge() {
        assert_eq!(format_fee(Some(&Fee::Amount(0.0))), NO_CHARGE_BADGE);
        assert_eq!(format_fee(Some(&Fee::Label("0.00".to_string()))), NO_CHARGE_BADGE);
    }

    #[test]
    fn amount_formats_with_default_symbol() {
        assert_eq!(format_fee(Some(&Fee::Amount(15.0))), "R15.00");
    }

    #[test]
    fn label_passes_through_unchanged() {
        assert_eq!(format_fee(Some(&Fee::Label("Free for first 5".to_string()))), "Free for first 5");
    }

    #[test]
    fn missing_fee_renders_dash() {
        assert_eq!(format_fee(None), "-");
    }
}
