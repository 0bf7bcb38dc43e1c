pub mod clock;
pub mod config;
pub mod constants;
pub mod fingerprint;
pub mod identity;
pub mod record;
pub mod timespan;

pub use fingerprint::{Fingerprint, FingerprintError};
pub use identity::ProcessIdentity;
pub use record::{DemoRecord, ProcessRecord};
