use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_apigatewaymanagement::config::Builder;
use aws_sdk_apigatewaymanagement::error::DisplayErrorContext;
use aws_sdk_apigatewaymanagement::primitives::Blob;
use aws_sdk_apigatewaymanagement::Client;

use crate::connection::ConnectionId;

use super::{ConnectionPusher, PushError};

/// API Gateway Management API client bound to one deployed stage
pub struct ApiGatewayConnectionPusher {
    client: Client,
}

impl ApiGatewayConnectionPusher {
    /// Build a client whose requests go to `endpoint_url`, e.g.
    /// `https://{api-id}.execute-api.{region}.amazonaws.com/{stage}`.
    pub fn new(sdk_config: &SdkConfig, endpoint_url: impl Into<String>) -> Self {
        let config = Builder::from(sdk_config)
            .endpoint_url(endpoint_url.into())
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }
}

#[async_trait]
impl ConnectionPusher for ApiGatewayConnectionPusher {
    fn backend_type(&self) -> &'static str {
        "apigateway"
    }

    async fn post_to_connection(
        &self,
        connection_id: &ConnectionId,
        data: &str,
    ) -> Result<(), PushError> {
        self.client
            .post_to_connection()
            .connection_id(connection_id.as_str())
            .data(Blob::new(data.as_bytes()))
            .send()
            .await
            .map_err(|e| {
                let gone = e
                    .as_service_error()
                    .is_some_and(|err| err.is_gone_exception());
                if gone {
                    PushError::Gone(connection_id.clone())
                } else {
                    PushError::Backend(DisplayErrorContext(&e).to_string())
                }
            })?;

        tracing::debug!(
            connection_id = %connection_id,
            bytes = data.len(),
            "Posted to connection"
        );

        Ok(())
    }
}
