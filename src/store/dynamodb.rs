use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::connection::{ConnectionId, CONNECTION_ID_ATTRIBUTE};

use super::{ConnectionStore, StoreError};

/// Connection table stored in DynamoDB
pub struct DynamoDbConnectionStore {
    client: Client,
    table_name: String,
}

impl DynamoDbConnectionStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn from_sdk_config(config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self::new(Client::new(config), table_name)
    }
}

#[async_trait]
impl ConnectionStore for DynamoDbConnectionStore {
    fn backend_type(&self) -> &'static str {
        "dynamodb"
    }

    async fn delete(&self, connection_id: &ConnectionId) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                CONNECTION_ID_ATTRIBUTE,
                AttributeValue::S(connection_id.to_string()),
            )
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(
            table = %self.table_name,
            connection_id = %connection_id,
            "Deleted connection record"
        );

        Ok(())
    }
}
