use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignAccount {
    pub currency: String,
    pub annual_card_fee: f64,
    pub atm_withdrawal: f64,
    pub card_replacement: f64,
    pub balance_enquiry: f64,
}
