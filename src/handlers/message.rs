//! `message` route: echo the inbound event back to its sender.

use std::sync::Arc;

use serde_json::Value;

use crate::connection::ConnectionId;
use crate::error::{AppError, Result};
use crate::event::render;
use crate::push::{ConnectionPusher, PushError};
use crate::store::ConnectionStore;

use super::types::GatewayResponse;

pub struct MessageHandler {
    pusher: Arc<dyn ConnectionPusher>,
    store: Arc<dyn ConnectionStore>,
    prune_stale_connections: bool,
}

impl MessageHandler {
    pub fn new(pusher: Arc<dyn ConnectionPusher>, store: Arc<dyn ConnectionStore>) -> Self {
        Self {
            pusher,
            store,
            prune_stale_connections: false,
        }
    }

    /// Delete the record of a connection the gateway reports gone instead of
    /// failing the invocation.
    pub fn with_stale_pruning(mut self, enabled: bool) -> Self {
        self.prune_stale_connections = enabled;
        self
    }

    #[tracing::instrument(name = "ws.message", skip(self, event))]
    pub async fn handle(&self, event: Value) -> Result<GatewayResponse> {
        tracing::info!(event = %event, "Message event received");

        let connection_id = ConnectionId::from_event(&event)?;
        let payload = echo_payload(&event);

        match self.pusher.post_to_connection(&connection_id, &payload).await {
            Ok(()) => {}
            Err(PushError::Gone(_)) if self.prune_stale_connections => {
                tracing::info!(
                    connection_id = %connection_id,
                    "Found stale connection, deleting"
                );
                self.store.delete(&connection_id).await?;
            }
            Err(e) => return Err(AppError::Push(e)),
        }

        Ok(GatewayResponse::ok())
    }
}

/// Reply body: the echo text encoded as a JSON string literal.
pub fn echo_payload(event: &Value) -> String {
    let text = format!("Responding to: {}", render(event));
    Value::String(text).to_string()
}
