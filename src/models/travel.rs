use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelFeeEntry {
    pub category: String,
    pub service: String,
    pub fee: f64,
    pub max_fee: Option<f64>,
}
