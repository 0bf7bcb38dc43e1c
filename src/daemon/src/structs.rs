use lifecycle_common::Fingerprint;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResponse {
    #[serde(rename = "ProcessId")]
    pub process_id: Fingerprint,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct DemoParams {
    #[serde(rename = "numSamples", default)]
    pub num_samples: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}
