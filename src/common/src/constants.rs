pub const DEFAULT_DAEMON_PORT: u16 = 8722;
pub const WORKING_DIR: &str = "/tmp/lifecycle";
pub const LOG_FILE_NAME: &str = "daemon.log";
pub const DEFAULT_CONFIG_FILE: &str = "lifecycle.toml";
pub const ENV_PREFIX: &str = "LIFECYCLE";

pub const ELASTIC_URL: &str = "http://localhost:9200";
pub const ELASTIC_TIMEOUT_MS: u64 = 10_000;
pub const PROCESS_INDEX: &str = "addsmonitoring";
pub const DEMO_INDEX: &str = "addsdemodata";

pub const DEMO_MAX_SAMPLES: usize = 10_000;
pub const LOG_LEVEL: &str = "info";
