use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditFacility {
    pub name: String,
    pub monthly_service_fee: f64,
    pub initiation_fee: Option<String>,
    pub monthly_non_utilisation_fee: Option<f64>,
    pub note: Option<String>,
}
