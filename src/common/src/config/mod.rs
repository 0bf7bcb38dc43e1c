mod config_loader;
mod defaults;

pub use config_loader::{Config, ConfigLoader, LifecyclePolicy, StoreBackend};
