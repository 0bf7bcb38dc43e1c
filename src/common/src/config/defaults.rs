use crate::config::{Config, LifecyclePolicy, StoreBackend};
use crate::constants::{
    DEFAULT_DAEMON_PORT, DEMO_INDEX, DEMO_MAX_SAMPLES, ELASTIC_TIMEOUT_MS, ELASTIC_URL, LOG_LEVEL,
    PROCESS_INDEX, WORKING_DIR,
};

impl Default for Config {
    fn default() -> Self {
        Self {
            server: format!("127.0.0.1:{}", DEFAULT_DAEMON_PORT),
            store: StoreBackend::Elasticsearch,

            elastic_url: ELASTIC_URL.to_string(),
            elastic_api_key: None,
            elastic_timeout_ms: ELASTIC_TIMEOUT_MS,
            elastic_refresh: false,

            process_index: PROCESS_INDEX.to_string(),
            demo_index: DEMO_INDEX.to_string(),

            lifecycle_policy: LifecyclePolicy::Lenient,
            demo_max_samples: DEMO_MAX_SAMPLES,

            log_dir: WORKING_DIR.to_string(),
            log_level: LOG_LEVEL.to_string(),
        }
    }
}
