pub mod coordinator;
pub mod demo;
mod error;

pub use coordinator::LifecycleCoordinator;
pub use demo::DemoGenerator;
pub use error::{InvalidState, LifecycleError, LifecycleResult};
