use crate::error::ApiError;
use crate::state::DaemonState;
use axum::extract::{Path, State};
use axum::Json;
use lifecycle_client::LifecycleError;
use lifecycle_common::{Fingerprint, ProcessRecord};

pub const PROCESS_ENDPOINT: &str = "/process/{process_id}";

pub async fn process(
    State(state): State<DaemonState>,
    Path(process_id): Path<String>,
) -> Result<Json<ProcessRecord>, ApiError> {
    let fingerprint: Fingerprint = process_id.parse()?;
    match state.coordinator().get(&fingerprint).await? {
        Some(record) => Ok(Json(record)),
        None => Err(LifecycleError::NotFound { fingerprint }.into()),
    }
}
