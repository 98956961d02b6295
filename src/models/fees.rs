use serde::Deserialize;

const NO_CHARGE_LABEL: &str = "0.00";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Fee {
    Amount(f64),
    Label(String),
}

impl Fee {
    pub fn is_no_charge(&self) -> bool {
        match self {
            Self::Amount(amount) => *amount == 0.0,
            Self::Label(label) => label == NO_CHARGE_LABEL,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEntry {
    pub category: String,
    pub description: String,
    pub fee: Option<Fee>,
    pub channel: Option<String>,
    pub note: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionFees {
    pub no_charge: Vec<FeeEntry>,
    pub standard_fees: Vec<FeeEntry>,
    pub cash_transactions: Vec<FeeEntry>,
    pub real_time_payments: Vec<FeeEntry>,
    pub send_money: Vec<FeeEntry>,
    pub e_wallet: Vec<FeeEntry>,
}
