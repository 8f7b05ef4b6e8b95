//! Connection store factory

use std::sync::Arc;

use aws_config::SdkConfig;

use crate::config::Settings;
use crate::error::AppError;

use super::dynamodb::DynamoDbConnectionStore;
use super::memory::MemoryConnectionStore;
use super::ConnectionStore;

/// Create a connection store based on configuration.
///
/// - `"memory"`: returns a `MemoryConnectionStore`
/// - `"dynamodb"` (default): returns a `DynamoDbConnectionStore` if an AWS
///   SDK config is provided, otherwise falls back to memory
///
/// Fails when `TABLE_NAME` is not configured, whatever the backend.
pub fn create_connection_store(
    settings: &Settings,
    sdk_config: Option<&SdkConfig>,
) -> Result<Arc<dyn ConnectionStore>, AppError> {
    let table_name = settings.table_name()?;

    let store: Arc<dyn ConnectionStore> = match settings.store_backend.as_str() {
        "memory" => {
            tracing::info!(backend = "memory", "Creating memory connection store");
            Arc::new(MemoryConnectionStore::new())
        }
        _ => {
            if let Some(config) = sdk_config {
                tracing::info!(
                    backend = "dynamodb",
                    table = %table_name,
                    "Creating DynamoDB connection store"
                );
                Arc::new(DynamoDbConnectionStore::from_sdk_config(config, table_name))
            } else {
                tracing::warn!(
                    "DynamoDB store requested but no AWS config provided, falling back to memory"
                );
                Arc::new(MemoryConnectionStore::new())
            }
        }
    };

    Ok(store)
}
