use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /{index}/_doc/{id}`.
#[derive(Debug, Deserialize)]
pub(super) struct GetResponse {
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_seq_no")]
    pub seq_no: Option<u64>,
    #[serde(rename = "_primary_term")]
    pub primary_term: Option<u64>,
    #[serde(rename = "_source")]
    pub source: Option<Value>,
}

/// Body of `PUT /{index}/_doc/{id}`.
#[derive(Debug, Deserialize)]
pub(super) struct IndexResponse {
    #[serde(rename = "_seq_no")]
    pub seq_no: u64,
    #[serde(rename = "_primary_term")]
    pub primary_term: u64,
    #[serde(default)]
    pub result: String,
}
