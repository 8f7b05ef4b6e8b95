//! In-memory connection store using DashMap.
//!
//! Records are lost when the process exits. Used for local runs and tests;
//! every delete call is logged so callers can assert on it.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::connection::{ConnectionId, ConnectionRecord};

use super::{ConnectionStore, StoreError};

#[derive(Default)]
pub struct MemoryConnectionStore {
    records: DashMap<ConnectionId, ConnectionRecord>,
    /// Every delete call in arrival order, including failed ones
    delete_calls: Mutex<Vec<ConnectionId>>,
    /// When set, deletes fail without touching records
    failing: AtomicBool,
}

impl MemoryConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: ConnectionRecord) {
        self.records.insert(record.connection_id.clone(), record);
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.records.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    pub async fn delete_calls(&self) -> Vec<ConnectionId> {
        self.delete_calls.lock().await.clone()
    }
}

#[async_trait]
impl ConnectionStore for MemoryConnectionStore {
    fn backend_type(&self) -> &'static str {
        "memory"
    }

    async fn delete(&self, connection_id: &ConnectionId) -> Result<(), StoreError> {
        self.delete_calls.lock().await.push(connection_id.clone());

        if self.failing.load(Ordering::Relaxed) {
            return Err(StoreError::Backend("memory store set to fail".to_string()));
        }

        let removed = self.records.remove(connection_id).is_some();
        tracing::trace!(connection_id = %connection_id, removed, "Memory store delete");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let store = MemoryConnectionStore::new();
        store.insert(ConnectionRecord::new("a"));
        store.insert(ConnectionRecord::new("b"));

        store.delete(&"a".into()).await.unwrap();
        assert!(!store.contains(&"a".into()));
        assert!(store.contains(&"b".into()));

        // Missing key is not an error
        store.delete(&"a".into()).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.delete_calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failing_store_keeps_records() {
        let store = MemoryConnectionStore::new();
        store.insert(ConnectionRecord::new("a"));
        store.set_failing(true);

        assert!(store.delete(&"a".into()).await.is_err());
        assert!(store.contains(&"a".into()));
        assert_eq!(store.delete_calls().await, vec![ConnectionId::new("a")]);
    }
}
