use crate::elastic::ElasticStore;
use crate::error::StoreResult;
use crate::memory::MemoryStore;
use lifecycle_common::config::{Config, StoreBackend};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Optimistic concurrency token of a stored document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DocVersion {
    pub seq_no: u64,
    pub primary_term: u64,
}

/// A document together with the version it was read at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Versioned<T> {
    pub document: T,
    pub version: DocVersion,
}

/// Precondition attached to a write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteCondition {
    /// Plain upsert: create or overwrite.
    #[default]
    Any,
    /// Create only; fails if a document already exists under the id.
    Absent,
    /// Overwrite only the exact version given.
    Matches(DocVersion),
}

#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Point lookup; `Ok(None)` when no document exists under `id`.
    async fn get<T>(&self, index: &str, id: &str) -> StoreResult<Option<Versioned<T>>>
    where
        T: DeserializeOwned;

    /// Whole-document write. A failed precondition is `StoreError::Conflict`.
    async fn put<T>(
        &self,
        index: &str,
        id: &str,
        document: &T,
        condition: WriteCondition,
    ) -> StoreResult<DocVersion>
    where
        T: Serialize + Sync;

    fn backend_name(&self) -> &'static str;
}

pub enum StoreEnum {
    Elastic(ElasticStore),
    Memory(MemoryStore),
}

impl StoreEnum {
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        Ok(match config.store {
            StoreBackend::Elasticsearch => StoreEnum::Elastic(ElasticStore::try_new(config)?),
            StoreBackend::Memory => StoreEnum::Memory(MemoryStore::new()),
        })
    }
}

impl DocumentStore for StoreEnum {
    async fn get<T>(&self, index: &str, id: &str) -> StoreResult<Option<Versioned<T>>>
    where
        T: DeserializeOwned,
    {
        match self {
            StoreEnum::Elastic(store) => store.get(index, id).await,
            StoreEnum::Memory(store) => store.get(index, id).await,
        }
    }

    async fn put<T>(
        &self,
        index: &str,
        id: &str,
        document: &T,
        condition: WriteCondition,
    ) -> StoreResult<DocVersion>
    where
        T: Serialize + Sync,
    {
        match self {
            StoreEnum::Elastic(store) => store.put(index, id, document, condition).await,
            StoreEnum::Memory(store) => store.put(index, id, document, condition).await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            StoreEnum::Elastic(store) => store.backend_name(),
            StoreEnum::Memory(store) => store.backend_name(),
        }
    }
}
