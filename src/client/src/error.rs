use chrono::{DateTime, Utc};
use lifecycle_common::Fingerprint;
use lifecycle_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Stop or lookup for a fingerprint that has no record.
    #[error("no process record found for {fingerprint}")]
    NotFound { fingerprint: Fingerprint },

    #[error("process {fingerprint} cannot transition: {reason}")]
    InvalidState {
        fingerprint: Fingerprint,
        reason: InvalidState,
    },

    /// A conditional write lost against a concurrent start or stop.
    #[error("process {fingerprint} was modified concurrently")]
    Conflict { fingerprint: Fingerprint },

    #[error("document store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidState {
    #[error("stop time {stop} precedes start time {start}")]
    NegativeDuration {
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    },
    #[error("a record already exists for this process")]
    AlreadyStarted,
    #[error("the record is already closed")]
    AlreadyStopped,
}

impl LifecycleError {
    /// True for failures caused by the caller (unknown process, bad state),
    /// as opposed to the store failing.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LifecycleError::StoreUnavailable(_))
    }
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
