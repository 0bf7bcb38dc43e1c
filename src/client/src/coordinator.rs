use crate::error::{InvalidState, LifecycleError, LifecycleResult};
use chrono::TimeDelta;
use lifecycle_common::clock::{Clock, SystemClock};
use lifecycle_common::config::{Config, LifecyclePolicy};
use lifecycle_common::record::RecordState;
use lifecycle_common::{Fingerprint, ProcessIdentity, ProcessRecord};
use lifecycle_store::{DocumentStore, StoreError, Versioned, WriteCondition};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Drives the absent -> open -> closed lifecycle of process records.
///
/// Start and stop are independent calls correlated only through the
/// fingerprint of the identity tuple; the coordinator keeps no state of its
/// own between them.
pub struct LifecycleCoordinator<S> {
    store: Arc<S>,
    index: String,
    policy: LifecyclePolicy,
    clock: Arc<dyn Clock>,
}

impl<S: DocumentStore> LifecycleCoordinator<S> {
    pub fn new(store: Arc<S>, index: impl Into<String>, policy: LifecyclePolicy) -> Self {
        Self {
            store,
            index: index.into(),
            policy,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(store: Arc<S>, config: &Config) -> Self {
        Self::new(store, config.process_index.clone(), config.lifecycle_policy)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn policy(&self) -> LifecyclePolicy {
        self.policy
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Records the start of a process and returns its fingerprint.
    ///
    /// Lenient: an existing record under the same fingerprint is overwritten,
    /// which resets its start timestamp (and reopens a closed record).
    /// Strict: any existing record rejects the start with
    /// `InvalidState::AlreadyStarted`.
    pub async fn start(&self, identity: &ProcessIdentity) -> LifecycleResult<Fingerprint> {
        let fingerprint = identity.fingerprint();
        let record = ProcessRecord::open(fingerprint.clone(), identity.clone(), self.clock.now());

        let condition = match self.policy {
            LifecyclePolicy::Lenient => WriteCondition::Any,
            LifecyclePolicy::Strict => WriteCondition::Absent,
        };

        self.store
            .put(&self.index, fingerprint.as_str(), &record, condition)
            .await
            .map_err(|e| match e {
                StoreError::Conflict { .. } => LifecycleError::InvalidState {
                    fingerprint: fingerprint.clone(),
                    reason: InvalidState::AlreadyStarted,
                },
                other => store_failure(&fingerprint, other),
            })?;

        info!(
            "process {} started at {}",
            fingerprint, record.start_timestamp
        );
        Ok(fingerprint)
    }

    /// Closes the record started with the same identity tuple.
    pub async fn stop(&self, identity: &ProcessIdentity) -> LifecycleResult<ProcessRecord> {
        self.close(identity.fingerprint()).await
    }

    /// Closes a record addressed by the fingerprint `start` returned.
    pub async fn stop_fingerprint(&self, fingerprint: &Fingerprint) -> LifecycleResult<ProcessRecord> {
        self.close(fingerprint.clone()).await
    }

    pub async fn get(&self, fingerprint: &Fingerprint) -> LifecycleResult<Option<ProcessRecord>> {
        let found = self
            .store
            .get::<ProcessRecord>(&self.index, fingerprint.as_str())
            .await
            .map_err(|e| store_failure(fingerprint, e))?;
        Ok(found.map(|versioned| versioned.document))
    }

    async fn close(&self, fingerprint: Fingerprint) -> LifecycleResult<ProcessRecord> {
        let Versioned { document, version } = self
            .store
            .get::<ProcessRecord>(&self.index, fingerprint.as_str())
            .await
            .map_err(|e| store_failure(&fingerprint, e))?
            .ok_or_else(|| {
                warn!("stop for {} without a recorded start", fingerprint);
                LifecycleError::NotFound {
                    fingerprint: fingerprint.clone(),
                }
            })?;

        let previous_state = document.state();
        if previous_state == RecordState::Closed {
            match self.policy {
                LifecyclePolicy::Strict => {
                    return Err(LifecycleError::InvalidState {
                        fingerprint,
                        reason: InvalidState::AlreadyStopped,
                    })
                }
                LifecyclePolicy::Lenient => {
                    debug!("process {} already closed, recomputing duration", fingerprint)
                }
            }
        }

        let start = document.start_timestamp;
        let stop = self.clock.now();
        let duration = stop - start;
        if duration < TimeDelta::zero() {
            warn!(
                "refusing to close {}: stop {} precedes start {}",
                fingerprint, stop, start
            );
            return Err(LifecycleError::InvalidState {
                fingerprint,
                reason: InvalidState::NegativeDuration { start, stop },
            });
        }

        let closed = document.close(stop, duration);
        let condition = match self.policy {
            LifecyclePolicy::Lenient => WriteCondition::Any,
            LifecyclePolicy::Strict => WriteCondition::Matches(version),
        };

        self.store
            .put(&self.index, fingerprint.as_str(), &closed, condition)
            .await
            .map_err(|e| match e {
                StoreError::Conflict { .. } => LifecycleError::Conflict {
                    fingerprint: fingerprint.clone(),
                },
                other => store_failure(&fingerprint, other),
            })?;

        info!(
            "process {} stopped after {} (was {})",
            fingerprint, duration, previous_state
        );
        Ok(closed)
    }
}

fn store_failure(fingerprint: &Fingerprint, error: StoreError) -> LifecycleError {
    warn!("store failure for {}: {}", fingerprint, error);
    LifecycleError::StoreUnavailable(error)
}
