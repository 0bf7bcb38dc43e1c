use crate::state::DaemonState;
use crate::structs::HealthResponse;
use axum::extract::State;
use axum::Json;

pub const HEALTH_ENDPOINT: &str = "/health";

pub async fn health(State(state): State<DaemonState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: state.store_backend().to_string(),
    })
}
