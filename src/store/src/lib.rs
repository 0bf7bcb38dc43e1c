//! Document store abstraction used to persist lifecycle records.
//!
//! Records are addressed by `(index, id)` and written whole; a write may be
//! made conditional on the document being absent or on the version read
//! earlier, which is how the strict lifecycle policy gets atomic transitions.

mod document_store;
pub mod elastic;
mod error;
pub mod memory;

pub use document_store::{DocVersion, DocumentStore, StoreEnum, Versioned, WriteCondition};
pub use elastic::ElasticStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
