pub const APP_TITLE: &str = "Pricing Guide";
pub const APP_TAGLINE: &str = "Accounts, fees, credit and benefits at a glance";
pub const DEFAULT_DATA_PATH: &str = "data/pricing.json";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";
pub const PER_MONTH_SUFFIX: &str = "p.m.";

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data. Please refresh the page.";

pub static CURRENCY_SYMBOLS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "USD" => "$",
    "EUR" => "€",
    "GBP" => "£",
};
