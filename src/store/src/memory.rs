use crate::document_store::{DocVersion, DocumentStore, Versioned, WriteCondition};
use crate::error::{StoreError, StoreResult};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use tracing::debug;

const PRIMARY_TERM: u64 = 1;

struct StoredDocument {
    source: Value,
    version: DocVersion,
}

/// Process-local document store. Documents are kept as JSON so reads go
/// through the same serde path as the Elasticsearch backend.
#[derive(Default)]
pub struct MemoryStore {
    documents: DashMap<(String, String), StoredDocument>,
    next_seq_no: AtomicU64,
    writes: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn document_count(&self, index: &str) -> usize {
        self.documents
            .iter()
            .filter(|entry| entry.key().0 == index)
            .count()
    }

    /// Raw stored JSON, for checking the persisted layout.
    pub fn raw(&self, index: &str, id: &str) -> Option<Value> {
        self.documents
            .get(&(index.to_string(), id.to_string()))
            .map(|doc| doc.source.clone())
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }

    fn next_version(&self) -> DocVersion {
        DocVersion {
            seq_no: self.next_seq_no.fetch_add(1, Ordering::SeqCst),
            primary_term: PRIMARY_TERM,
        }
    }
}

impl DocumentStore for MemoryStore {
    async fn get<T>(&self, index: &str, id: &str) -> StoreResult<Option<Versioned<T>>>
    where
        T: DeserializeOwned,
    {
        self.check_available()?;

        let Some((source, version)) = self
            .documents
            .get(&(index.to_string(), id.to_string()))
            .map(|doc| (doc.source.clone(), doc.version))
        else {
            debug!("memory store: {index}/{id} not found");
            return Ok(None);
        };

        let document =
            serde_json::from_value(source).map_err(|e| StoreError::serialization(index, id, e))?;
        Ok(Some(Versioned { document, version }))
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
        self.check_available()?;

        let source =
            serde_json::to_value(document).map_err(|e| StoreError::serialization(index, id, e))?;

        // check and write under the shard lock taken by `entry`
        let version = match self.documents.entry((index.to_string(), id.to_string())) {
            Entry::Occupied(mut entry) => {
                let allowed = match condition {
                    WriteCondition::Any => true,
                    WriteCondition::Absent => false,
                    WriteCondition::Matches(expected) => entry.get().version == expected,
                };
                if !allowed {
                    return Err(StoreError::conflict(index, id));
                }
                let version = self.next_version();
                entry.insert(StoredDocument { source, version });
                version
            }
            Entry::Vacant(entry) => {
                if let WriteCondition::Matches(_) = condition {
                    return Err(StoreError::conflict(index, id));
                }
                let version = self.next_version();
                entry.insert(StoredDocument { source, version });
                version
            }
        };

        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!("memory store: wrote {index}/{id} at seq_no {}", version.seq_no);
        Ok(version)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const INDEX: &str = "things";

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        let found: Option<Versioned<Value>> = store.get(INDEX, "nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_upsert_overwrites_and_bumps_version() {
        let store = MemoryStore::new();
        let first = store
            .put(INDEX, "a", &json!({"n": 1}), WriteCondition::Any)
            .await
            .unwrap();
        let second = store
            .put(INDEX, "a", &json!({"n": 2}), WriteCondition::Any)
            .await
            .unwrap();

        assert!(second.seq_no > first.seq_no);
        let read: Versioned<Value> = store.get(INDEX, "a").await.unwrap().unwrap();
        assert_eq!(read.document, json!({"n": 2}));
        assert_eq!(read.version, second);
        assert_eq!(store.document_count(INDEX), 1);
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn test_create_only_conflicts_on_existing() {
        let store = MemoryStore::new();
        store
            .put(INDEX, "a", &json!({}), WriteCondition::Absent)
            .await
            .unwrap();
        let err = store
            .put(INDEX, "a", &json!({}), WriteCondition::Absent)
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_conditional_write_requires_matching_version() {
        let store = MemoryStore::new();
        let version = store
            .put(INDEX, "a", &json!({"n": 1}), WriteCondition::Any)
            .await
            .unwrap();
        store
            .put(INDEX, "a", &json!({"n": 2}), WriteCondition::Any)
            .await
            .unwrap();

        let stale = store
            .put(INDEX, "a", &json!({"n": 3}), WriteCondition::Matches(version))
            .await
            .unwrap_err();
        assert!(stale.is_conflict());

        let missing = store
            .put(INDEX, "b", &json!({}), WriteCondition::Matches(version))
            .await
            .unwrap_err();
        assert!(missing.is_conflict());
        assert_eq!(store.raw(INDEX, "a"), Some(json!({"n": 2})));
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        let read = store.get::<Value>(INDEX, "a").await;
        let write = store.put(INDEX, "a", &json!({}), WriteCondition::Any).await;

        assert!(matches!(read, Err(StoreError::Unavailable(_))));
        assert!(matches!(write, Err(StoreError::Unavailable(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_indices_are_separate() {
        let store = MemoryStore::new();
        store
            .put("one", "a", &json!({}), WriteCondition::Any)
            .await
            .unwrap();
        assert_eq!(store.document_count("one"), 1);
        assert_eq!(store.document_count("two"), 0);
        assert!(store.get::<Value>("two", "a").await.unwrap().is_none());
    }
}
