use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountType {
    pub name: String,
    pub monthly_fee: f64,
    pub description: String,
    pub features: Option<Vec<String>>,
}
