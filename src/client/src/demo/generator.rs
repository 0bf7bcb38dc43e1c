use super::names::pronounceable_name;
use crate::error::{LifecycleError, LifecycleResult};
use chrono::{DateTime, TimeDelta, Utc};
use lifecycle_common::clock::{Clock, SystemClock};
use lifecycle_common::config::Config;
use lifecycle_common::DemoRecord;
use lifecycle_store::{DocumentStore, WriteCondition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, warn};

const MAX_DAYS: i64 = 14;
const MAX_STOP_OFFSET_SECS: i64 = MAX_DAYS * 24 * 60 * 60;
const MAX_EDITION: u8 = 4;

/// Job duration built from independently drawn days, hours and minutes.
///
/// Each component is uniform, so the total is not uniform over
/// `[0, 14 days)`; dashboards built on the demo data rely on that shape.
pub fn sample_job_duration<R: Rng + ?Sized>(rng: &mut R) -> TimeDelta {
    let days = rng.random_range(0..MAX_DAYS);
    let hours = rng.random_range(0..24);
    let minutes = rng.random_range(0..60);
    TimeDelta::days(days) + TimeDelta::hours(hours) + TimeDelta::minutes(minutes)
}

/// Draws one completed demo record that stopped at most 14 days before `now`.
pub fn sample_record<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DemoRecord {
    let product_name = pronounceable_name(rng);
    let status_name = pronounceable_name(rng);
    let duration = sample_job_duration(rng);

    let stop_timestamp = now - TimeDelta::seconds(rng.random_range(0..=MAX_STOP_OFFSET_SECS));
    let start_timestamp = stop_timestamp - duration;

    let edition_number = rng.random_range(0..=MAX_EDITION);
    let update_number = rng.random_range(0..=MAX_EDITION);
    let is_releasable = rng.random_bool(0.5);

    DemoRecord {
        id: DemoRecord::fingerprint_for(&product_name, edition_number, update_number, is_releasable),
        product_name,
        status_name,
        edition_number,
        update_number,
        is_releasable,
        start_timestamp,
        stop_timestamp,
        duration,
        is_complete: true,
    }
}

pub struct DemoGenerator<S> {
    store: Arc<S>,
    index: String,
    clock: Arc<dyn Clock>,
}

impl<S: DocumentStore> DemoGenerator<S> {
    pub fn new(store: Arc<S>, index: impl Into<String>) -> Self {
        Self {
            store,
            index: index.into(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(store: Arc<S>, config: &Config) -> Self {
        Self::new(store, config.demo_index.clone())
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Writes `count` random records one after the other and returns how
    /// many were persisted.
    pub async fn generate(&self, count: usize) -> LifecycleResult<usize> {
        let mut rng = StdRng::from_os_rng();
        self.generate_with(count, &mut rng).await
    }

    /// Like `generate`, drawing from the given generator. The first failed
    /// write aborts the run; records written before it stay in the store.
    pub async fn generate_with<R>(&self, count: usize, rng: &mut R) -> LifecycleResult<usize>
    where
        R: Rng + Send + ?Sized,
    {
        for written in 0..count {
            let record = sample_record(rng, self.clock.now());
            if let Err(e) = self
                .store
                .put(&self.index, record.id.as_str(), &record, WriteCondition::Any)
                .await
            {
                warn!(
                    "demo generation aborted after {} of {} records: {}",
                    written, count, e
                );
                return Err(LifecycleError::StoreUnavailable(e));
            }
            debug!("demo record {} ({})", record.id, record.product_name);
        }

        info!("wrote {} demo records to {}", count, self.index);
        Ok(count)
    }
}
