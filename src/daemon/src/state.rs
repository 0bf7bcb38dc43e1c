use lifecycle_client::{DemoGenerator, LifecycleCoordinator};
use lifecycle_common::config::Config;
use lifecycle_store::{DocumentStore, StoreEnum};
use std::sync::Arc;

#[derive(Clone)]
pub struct DaemonState {
    coordinator: Arc<LifecycleCoordinator<StoreEnum>>,
    demo: Arc<DemoGenerator<StoreEnum>>,
    store: Arc<StoreEnum>,
    config: Arc<Config>,
}

impl DaemonState {
    pub fn new(config: Config, store: Arc<StoreEnum>) -> Self {
        let coordinator = LifecycleCoordinator::from_config(store.clone(), &config);
        let demo = DemoGenerator::from_config(store.clone(), &config);

        Self {
            coordinator: Arc::new(coordinator),
            demo: Arc::new(demo),
            store,
            config: Arc::new(config),
        }
    }

    pub fn coordinator(&self) -> &LifecycleCoordinator<StoreEnum> {
        &self.coordinator
    }

    pub fn demo(&self) -> &DemoGenerator<StoreEnum> {
        &self.demo
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }
}
