use super::types::{GetResponse, IndexResponse};
use crate::document_store::{DocVersion, DocumentStore, Versioned, WriteCondition};
use crate::error::{StoreError, StoreResult};
use lifecycle_common::config::Config;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

pub struct ElasticStore {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    refresh: bool,
}

impl ElasticStore {
    pub fn try_new(config: &Config) -> StoreResult<Self> {
        let base_url = Url::parse(&config.elastic_url)
            .map_err(|_| StoreError::InvalidUrl(config.elastic_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidUrl(config.elastic_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.elastic_timeout_ms))
            .build()?;

        debug!("Elasticsearch store at {}", base_url);

        Ok(Self {
            client,
            base_url,
            api_key: config.elastic_api_key.clone(),
            refresh: config.elastic_refresh,
        })
    }

    fn doc_url(&self, index: &str, id: &str) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend([index, "_doc", id]);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(AUTHORIZATION, format!("ApiKey {key}")),
            None => request,
        }
    }

    fn write_params(&self, condition: WriteCondition) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        match condition {
            WriteCondition::Any => {}
            WriteCondition::Absent => params.push(("op_type", "create".to_string())),
            WriteCondition::Matches(version) => {
                params.push(("if_seq_no", version.seq_no.to_string()));
                params.push(("if_primary_term", version.primary_term.to_string()));
            }
        }
        if self.refresh {
            params.push(("refresh", "wait_for".to_string()));
        }
        params
    }
}

async fn server_error(response: Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    warn!("Elasticsearch answered {status}: {body}");
    StoreError::Server { status, body }
}

impl DocumentStore for ElasticStore {
    async fn get<T>(&self, index: &str, id: &str) -> StoreResult<Option<Versioned<T>>>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        let url = self.doc_url(index, id)?;
        let response = self.authorize(self.client.get(url)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("{index}/{id} not found, elapsed: {:?}", started.elapsed());
                Ok(None)
            }
            status if status.is_success() => {
                let body: GetResponse = response.json().await?;
                let (true, Some(source)) = (body.found, body.source) else {
                    return Ok(None);
                };
                let version = DocVersion {
                    seq_no: body.seq_no.unwrap_or_default(),
                    primary_term: body.primary_term.unwrap_or_default(),
                };
                let document = serde_json::from_value(source)
                    .map_err(|e| StoreError::serialization(index, id, e))?;

                debug!("read {index}/{id}, elapsed: {:?}", started.elapsed());
                Ok(Some(Versioned { document, version }))
            }
            _ => Err(server_error(response).await),
        }
    }

    async fn put<T>(
        &self,
        index: &str,
        id: &str,
        document: &T,
        condition: WriteCondition,
    ) -> StoreResult<DocVersion>
    where
        T: Serialize + Sync,
    {
        let started = Instant::now();
        let url = self.doc_url(index, id)?;
        let body =
            serde_json::to_vec(document).map_err(|e| StoreError::serialization(index, id, e))?;

        let request = self
            .client
            .put(url)
            .query(&self.write_params(condition))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.authorize(request).send().await?;

        match response.status() {
            StatusCode::CONFLICT => {
                debug!("version conflict on {index}/{id} ({condition:?})");
                Err(StoreError::conflict(index, id))
            }
            status if status.is_success() => {
                let body: IndexResponse = response.json().await?;
                debug!(
                    "{} {index}/{id} at seq_no {}, elapsed: {:?}",
                    body.result,
                    body.seq_no,
                    started.elapsed()
                );
                Ok(DocVersion {
                    seq_no: body.seq_no,
                    primary_term: body.primary_term,
                })
            }
            _ => Err(server_error(response).await),
        }
    }

    fn backend_name(&self) -> &'static str {
        "elasticsearch"
    }
}
