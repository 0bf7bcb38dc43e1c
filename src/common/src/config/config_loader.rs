use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use config::{Config as RConfig, Environment, File};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Elasticsearch,
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Elasticsearch => f.write_str("elasticsearch"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// How the coordinator treats repeated starts and stops.
///
/// `Lenient` overwrites on a repeated start and recomputes on a repeated
/// stop. `Strict` rejects both and makes the open -> closed write conditional
/// on the version that was read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePolicy {
    #[default]
    Lenient,
    Strict,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub server: String,
    pub store: StoreBackend,

    pub elastic_url: String,
    #[serde(skip_serializing)]
    pub elastic_api_key: Option<String>,
    pub elastic_timeout_ms: u64,
    pub elastic_refresh: bool,

    pub process_index: String,
    pub demo_index: String,

    pub lifecycle_policy: LifecyclePolicy,
    pub demo_max_samples: usize,

    pub log_dir: String,
    pub log_level: String,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Layers defaults, an optional TOML file and `LIFECYCLE_*` environment
    /// variables, in that order of precedence.
    ///
    /// An explicit `path` must exist; without one, `lifecycle.toml` in the
    /// working directory is read when present.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let defaults = Config::default();

        let mut builder = RConfig::builder()
            .set_default("server", defaults.server)?
            .set_default("store", defaults.store.to_string())?
            .set_default("elastic_url", defaults.elastic_url)?
            .set_default("elastic_timeout_ms", defaults.elastic_timeout_ms)?
            .set_default("elastic_refresh", defaults.elastic_refresh)?
            .set_default("process_index", defaults.process_index)?
            .set_default("demo_index", defaults.demo_index)?
            .set_default("lifecycle_policy", "lenient")?
            .set_default("demo_max_samples", defaults.demo_max_samples as u64)?
            .set_default("log_dir", defaults.log_dir)?
            .set_default("log_level", defaults.log_level)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
        };

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let config: Config = builder
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("failed to parse config file")?;

        Ok(config)
    }
}
