use crate::error::ApiError;
use crate::state::DaemonState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lifecycle_common::ProcessIdentity;

pub const STOP_ENDPOINT: &str = "/stop";

pub async fn stop(
    State(state): State<DaemonState>,
    identity: Result<Json<ProcessIdentity>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(identity) = identity?;
    state.coordinator().stop(&identity).await?;
    Ok(StatusCode::OK)
}
