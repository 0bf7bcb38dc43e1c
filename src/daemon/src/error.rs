use crate::structs::ErrorBody;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lifecycle_client::LifecycleError;
use lifecycle_common::FingerprintError;
use thiserror::Error;
use tracing::{debug, error};

/// Failure of a request handler, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("malformed process id: {0}")]
    MalformedId(#[from] FingerprintError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Lifecycle(LifecycleError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Lifecycle(LifecycleError::InvalidState { .. })
            | ApiError::Lifecycle(LifecycleError::Conflict { .. }) => StatusCode::CONFLICT,
            ApiError::Lifecycle(LifecycleError::StoreUnavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::MalformedId(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        } else {
            debug!("request rejected with {}: {}", status, self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lifecycle_client::InvalidState;
    use lifecycle_common::Fingerprint;
    use lifecycle_store::StoreError;
    use rstest::rstest;

    fn fingerprint() -> Fingerprint {
        Fingerprint::derive(["A", "B", "C", "D", "E"])
    }

    fn invalid(reason: InvalidState) -> ApiError {
        ApiError::Lifecycle(LifecycleError::InvalidState {
            fingerprint: fingerprint(),
            reason,
        })
    }

    #[rstest]
    #[case::not_found(
        ApiError::Lifecycle(LifecycleError::NotFound { fingerprint: fingerprint() }),
        StatusCode::NOT_FOUND
    )]
    #[case::already_started(invalid(InvalidState::AlreadyStarted), StatusCode::CONFLICT)]
    #[case::already_stopped(invalid(InvalidState::AlreadyStopped), StatusCode::CONFLICT)]
    #[case::negative_duration(
        invalid(InvalidState::NegativeDuration {
            start: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 10).unwrap(),
            stop: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }),
        StatusCode::CONFLICT
    )]
    #[case::conflict(
        ApiError::Lifecycle(LifecycleError::Conflict { fingerprint: fingerprint() }),
        StatusCode::CONFLICT
    )]
    #[case::store(
        ApiError::Lifecycle(LifecycleError::StoreUnavailable(StoreError::Unavailable("down".into()))),
        StatusCode::SERVICE_UNAVAILABLE
    )]
    #[case::malformed_id(
        ApiError::MalformedId(FingerprintError::Length(3)),
        StatusCode::BAD_REQUEST
    )]
    #[case::bad_request(ApiError::BadRequest("too many".into()), StatusCode::BAD_REQUEST)]
    fn test_status_mapping(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status(), expected);
        assert_eq!(error.into_response().status(), expected);
    }
}
