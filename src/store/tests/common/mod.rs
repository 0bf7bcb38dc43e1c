use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const PRIMARY_TERM: u64 = 1;

#[derive(Default)]
struct Inner {
    documents: HashMap<(String, String), (Value, u64)>,
    next_seq_no: u64,
    authorization: Vec<String>,
    fail_with: Option<u16>,
}

/// Just enough of the Elasticsearch `_doc` API to exercise `ElasticStore`.
#[derive(Clone, Default)]
pub struct FakeElastic {
    inner: Arc<Mutex<Inner>>,
}

pub struct RunningFake {
    pub fake: FakeElastic,
    pub addr: SocketAddr,
    handle: JoinHandle<std::io::Result<()>>,
}

impl RunningFake {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for RunningFake {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl FakeElastic {
    pub async fn launch() -> RunningFake {
        let fake = FakeElastic::default();
        let router = Router::new()
            .route("/{index}/_doc/{id}", get(get_doc).put(put_doc))
            .with_state(fake.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(axum::serve(listener, router).into_future());

        RunningFake { fake, addr, handle }
    }

    pub fn fail_with(&self, status: u16) {
        self.inner.lock().unwrap().fail_with = Some(status);
    }

    pub fn source(&self, index: &str, id: &str) -> Option<Value> {
        self.inner
            .lock()
            .unwrap()
            .documents
            .get(&(index.to_string(), id.to_string()))
            .map(|(source, _)| source.clone())
    }

    pub fn authorization_headers(&self) -> Vec<String> {
        self.inner.lock().unwrap().authorization.clone()
    }

    fn record_auth(&self, headers: &HeaderMap) {
        if let Some(value) = headers.get("authorization") {
            self.inner
                .lock()
                .unwrap()
                .authorization
                .push(value.to_str().unwrap_or_default().to_string());
        }
    }

    fn forced_failure(&self) -> Option<(StatusCode, Json<Value>)> {
        let status = self.inner.lock().unwrap().fail_with?;
        Some((
            StatusCode::from_u16(status).unwrap(),
            Json(json!({ "error": "forced failure" })),
        ))
    }
}

async fn get_doc(
    State(fake): State<FakeElastic>,
    Path((index, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> impl IntoResponse {
    fake.record_auth(&headers);
    if let Some(failure) = fake.forced_failure() {
        return failure;
    }

    let inner = fake.inner.lock().unwrap();
    match inner.documents.get(&(index.clone(), id.clone())) {
        Some((source, seq_no)) => (
            StatusCode::OK,
            Json(json!({
                "_index": index,
                "_id": id,
                "_seq_no": seq_no,
                "_primary_term": PRIMARY_TERM,
                "found": true,
                "_source": source,
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "_index": index, "_id": id, "found": false })),
        ),
    }
}

async fn put_doc(
    State(fake): State<FakeElastic>,
    Path((index, id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(source): Json<Value>,
) -> impl IntoResponse {
    fake.record_auth(&headers);
    if let Some(failure) = fake.forced_failure() {
        return failure;
    }

    let mut inner = fake.inner.lock().unwrap();
    let key = (index.clone(), id.clone());
    let existing = inner.documents.get(&key).map(|(_, seq_no)| *seq_no);

    let conflict = match (params.get("op_type"), params.get("if_seq_no")) {
        (Some(op), _) if op == "create" => existing.is_some(),
        (_, Some(expected)) => existing.map(|seq| seq.to_string()) != Some(expected.clone()),
        _ => false,
    };
    if conflict {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": { "type": "version_conflict_engine_exception" } })),
        );
    }

    let seq_no = inner.next_seq_no;
    inner.next_seq_no += 1;
    inner.documents.insert(key, (source, seq_no));

    let (status, result) = match existing {
        Some(_) => (StatusCode::OK, "updated"),
        None => (StatusCode::CREATED, "created"),
    };
    (
        status,
        Json(json!({
            "_index": index,
            "_id": id,
            "_seq_no": seq_no,
            "_primary_term": PRIMARY_TERM,
            "result": result,
        })),
    )
}
