use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub title: String,
    pub description: String,
    pub partners: Option<Vec<String>>,
    pub note: Option<String>,
}
