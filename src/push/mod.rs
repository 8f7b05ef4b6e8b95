//! Delivery of server-initiated frames to open gateway connections.

mod apigateway;
mod factory;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::connection::ConnectionId;

pub use apigateway::ApiGatewayConnectionPusher;
pub use factory::create_connection_pusher;
pub use memory::{MemoryConnectionPusher, PostedMessage};

#[derive(Error, Debug)]
pub enum PushError {
    /// The gateway no longer knows the connection (HTTP 410)
    #[error("Connection {0} is gone")]
    Gone(ConnectionId),

    #[error("Push backend error: {0}")]
    Backend(String),
}

impl PushError {
    pub fn is_gone(&self) -> bool {
        matches!(self, PushError::Gone(_))
    }
}

/// Post-to-connection API of the gateway
#[async_trait]
pub trait ConnectionPusher: Send + Sync {
    /// Backend name, for logs
    fn backend_type(&self) -> &'static str;

    /// Send `data` to a single connection.
    async fn post_to_connection(
        &self,
        connection_id: &ConnectionId,
        data: &str,
    ) -> Result<(), PushError>;
}
