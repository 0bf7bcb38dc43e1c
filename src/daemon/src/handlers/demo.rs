use crate::error::ApiError;
use crate::state::DaemonState;
use crate::structs::DemoParams;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::info;

pub const CREATE_DEMO_DATA_ENDPOINT: &str = "/create_demo_data";

pub async fn create_demo_data(
    State(state): State<DaemonState>,
    params: Result<Query<DemoParams>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(params) = params?;
    let limit = state.config().demo_max_samples;
    if params.num_samples > limit {
        return Err(ApiError::BadRequest(format!(
            "numSamples {} exceeds the limit of {}",
            params.num_samples, limit
        )));
    }

    let written = state.demo().generate(params.num_samples).await?;
    info!("demo data request completed with {} records", written);
    Ok(StatusCode::OK)
}
