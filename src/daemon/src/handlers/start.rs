use crate::error::ApiError;
use crate::state::DaemonState;
use crate::structs::StartResponse;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use lifecycle_common::ProcessIdentity;

pub const START_ENDPOINT: &str = "/start";

pub async fn start(
    State(state): State<DaemonState>,
    identity: Result<Json<ProcessIdentity>, JsonRejection>,
) -> Result<Json<StartResponse>, ApiError> {
    let Json(identity) = identity?;
    let process_id = state.coordinator().start(&identity).await?;
    Ok(Json(StartResponse { process_id }))
}
