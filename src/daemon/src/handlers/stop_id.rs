use crate::error::ApiError;
use crate::state::DaemonState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use lifecycle_common::Fingerprint;

pub const STOP_ID_ENDPOINT: &str = "/stop/{process_id}";

/// Stops a process by the id `/start` handed out, without resending the
/// identity tuple.
pub async fn stop_id(
    State(state): State<DaemonState>,
    Path(process_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let fingerprint: Fingerprint = process_id.parse()?;
    state.coordinator().stop_fingerprint(&fingerprint).await?;
    Ok(StatusCode::OK)
}
