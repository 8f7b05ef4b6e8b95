//! Connection table access.
//!
//! The table is keyed by `ConnectionId` alone. Records are written by the
//! connect route and removed here on disconnect or when the push API reports
//! the connection gone.

mod dynamodb;
mod factory;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::connection::ConnectionId;

pub use dynamodb::DynamoDbConnectionStore;
pub use factory::create_connection_store;
pub use memory::MemoryConnectionStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Key-value store holding one record per open connection
#[async_trait]
pub trait ConnectionStore: Send + Sync {
    /// Backend name, for logs
    fn backend_type(&self) -> &'static str;

    /// Delete the record for a connection.
    ///
    /// Deleting a key that does not exist succeeds.
    async fn delete(&self, connection_id: &ConnectionId) -> Result<(), StoreError>;
}
