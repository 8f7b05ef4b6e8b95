//! `$disconnect` route: drop the connection record.
//!
//! The socket is already closed when this runs, so the gateway always gets a
//! 200. Cleanup is best effort: a missing connection id or a failed delete is
//! swallowed without being reported.

use std::sync::Arc;

use serde_json::Value;

use crate::connection::ConnectionId;
use crate::error::Result;
use crate::store::ConnectionStore;

use super::types::{BestEffort, GatewayResponse};

pub struct DisconnectHandler {
    store: Arc<dyn ConnectionStore>,
}

impl DisconnectHandler {
    pub fn new(store: Arc<dyn ConnectionStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "ws.disconnect", skip(self, event))]
    pub async fn handle(&self, event: Value) -> GatewayResponse {
        tracing::info!(event = %event, "Disconnect event received");

        match BestEffort::from_result(self.delete_record(&event).await) {
            BestEffort::Completed => {
                tracing::debug!(
                    backend = self.store.backend_type(),
                    "Connection record removed"
                );
            }
            BestEffort::Suppressed => {
                tracing::debug!(
                    backend = self.store.backend_type(),
                    "Connection cleanup skipped"
                );
            }
        }

        GatewayResponse::ok()
    }

    async fn delete_record(&self, event: &Value) -> Result<()> {
        let connection_id = ConnectionId::from_event(event)?;
        self.store.delete(&connection_id).await?;
        Ok(())
    }
}
