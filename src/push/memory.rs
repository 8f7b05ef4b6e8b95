//! In-memory push backend that records every post.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashSet;
use tokio::sync::Mutex;

use crate::connection::ConnectionId;

use super::{ConnectionPusher, PushError};

/// A frame accepted by the memory pusher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    pub connection_id: ConnectionId,
    pub data: String,
}

#[derive(Default)]
pub struct MemoryConnectionPusher {
    posted: Mutex<Vec<PostedMessage>>,
    /// Connections that answer like a closed socket (410)
    gone: DashSet<ConnectionId>,
    failing: AtomicBool,
}

impl MemoryConnectionPusher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_gone(&self, connection_id: impl Into<ConnectionId>) {
        self.gone.insert(connection_id.into());
    }

    /// Make every post fail with a backend error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    pub async fn posted(&self) -> Vec<PostedMessage> {
        self.posted.lock().await.clone()
    }
}

#[async_trait]
impl ConnectionPusher for MemoryConnectionPusher {
    fn backend_type(&self) -> &'static str {
        "memory"
    }

    async fn post_to_connection(
        &self,
        connection_id: &ConnectionId,
        data: &str,
    ) -> Result<(), PushError> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(PushError::Backend("memory pusher set to fail".to_string()));
        }
        if self.gone.contains(connection_id) {
            return Err(PushError::Gone(connection_id.clone()));
        }

        self.posted.lock().await.push(PostedMessage {
            connection_id: connection_id.clone(),
            data: data.to_string(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_posts_in_order() {
        let pusher = MemoryConnectionPusher::new();
        pusher.post_to_connection(&"a".into(), "one").await.unwrap();
        pusher.post_to_connection(&"b".into(), "two").await.unwrap();

        let posted = pusher.posted().await;
        assert_eq!(posted.len(), 2);
        assert_eq!(posted[0].connection_id.as_str(), "a");
        assert_eq!(posted[1].data, "two");
    }

    #[tokio::test]
    async fn test_gone_and_failing() {
        let pusher = MemoryConnectionPusher::new();
        pusher.mark_gone("stale");

        let err = pusher.post_to_connection(&"stale".into(), "x").await.unwrap_err();
        assert!(err.is_gone());

        pusher.set_failing(true);
        let err = pusher.post_to_connection(&"live".into(), "x").await.unwrap_err();
        assert!(!err.is_gone());

        assert!(pusher.posted().await.is_empty());
    }
}
