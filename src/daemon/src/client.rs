use crate::handlers::demo::CREATE_DEMO_DATA_ENDPOINT;
use crate::handlers::health::HEALTH_ENDPOINT;
use crate::handlers::process::PROCESS_ENDPOINT;
use crate::handlers::start::START_ENDPOINT;
use crate::handlers::stop::STOP_ENDPOINT;
use crate::handlers::stop_id::STOP_ID_ENDPOINT;
use crate::structs::{HealthResponse, StartResponse};
use lifecycle_common::{Fingerprint, ProcessIdentity, ProcessRecord};
use reqwest::Response;
pub use reqwest::Result;
use std::time::Duration;

const PROCESS_ID_PARAM: &str = "{process_id}";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Allowance per demo record; each one is a sequential store write on the
/// daemon, which with `refresh=wait_for` can take a full refresh interval.
const DEMO_SAMPLE_TIMEOUT: Duration = Duration::from_secs(1);

/// Timeout for a demo request, which runs for as long as the daemon needs to
/// write every sample.
pub fn demo_request_timeout(num_samples: usize) -> Duration {
    let samples = u32::try_from(num_samples).unwrap_or(u32::MAX);
    REQUEST_TIMEOUT.saturating_add(DEMO_SAMPLE_TIMEOUT.saturating_mul(samples))
}

pub struct DaemonClient {
    base_uri: String,
    pub client: reqwest::Client,
}

impl DaemonClient {
    pub fn try_new(base_uri: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_uri: base_uri.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }

    fn get_process_url(&self, path: &str, process_id: &Fingerprint) -> String {
        self.get_url(&path.replace(PROCESS_ID_PARAM, process_id.as_str()))
    }

    pub async fn send_start_request(&self, identity: &ProcessIdentity) -> Result<Fingerprint> {
        let response: StartResponse = self
            .client
            .post(self.get_url(START_ENDPOINT))
            .json(identity)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.process_id)
    }

    pub async fn send_stop_request(&self, identity: &ProcessIdentity) -> Result<()> {
        self.client
            .post(self.get_url(STOP_ENDPOINT))
            .json(identity)
            .send()
            .await?
            .error_for_status()
            .map(|_| ())
    }

    pub async fn send_stop_id_request(&self, process_id: &Fingerprint) -> Result<()> {
        self.client
            .post(self.get_process_url(STOP_ID_ENDPOINT, process_id))
            .send()
            .await?
            .error_for_status()
            .map(|_| ())
    }

    pub async fn send_process_request(&self, process_id: &Fingerprint) -> Result<ProcessRecord> {
        self.send_process(process_id)
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Raw response, for callers that want to inspect the status themselves.
    pub async fn send_process(&self, process_id: &Fingerprint) -> Result<Response> {
        self.client
            .get(self.get_process_url(PROCESS_ENDPOINT, process_id))
            .send()
            .await
    }

    pub async fn send_demo_request(&self, num_samples: usize) -> Result<()> {
        self.client
            .post(self.get_url(CREATE_DEMO_DATA_ENDPOINT))
            .query(&[("numSamples", num_samples)])
            .timeout(demo_request_timeout(num_samples))
            .send()
            .await?
            .error_for_status()
            .map(|_| ())
    }

    pub async fn send_health_request(&self) -> Result<HealthResponse> {
        self.client
            .get(self.get_url(HEALTH_ENDPOINT))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle_common::constants::DEMO_MAX_SAMPLES;
    use rstest::rstest;

    #[rstest]
    #[case(0, 30)]
    #[case(20, 50)]
    #[case(DEMO_MAX_SAMPLES, 30 + DEMO_MAX_SAMPLES as u64)]
    fn test_demo_request_timeout(#[case] samples: usize, #[case] expected_secs: u64) {
        assert_eq!(demo_request_timeout(samples), Duration::from_secs(expected_secs));
    }

    #[test]
    fn test_demo_request_timeout_saturates() {
        assert!(demo_request_timeout(usize::MAX) >= DEMO_SAMPLE_TIMEOUT * u32::MAX);
    }
}
