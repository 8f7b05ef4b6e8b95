//! Connection pusher factory

use std::sync::Arc;

use aws_config::SdkConfig;

use crate::config::Settings;
use crate::error::AppError;

use super::apigateway::ApiGatewayConnectionPusher;
use super::memory::MemoryConnectionPusher;
use super::ConnectionPusher;

/// Create a connection pusher based on configuration.
///
/// - `"memory"`: returns a `MemoryConnectionPusher`
/// - `"apigateway"` (default): returns an `ApiGatewayConnectionPusher` bound to
///   `ENDPOINT_URL`, falling back to memory when no AWS SDK config is provided
///
/// Fails when `ENDPOINT_URL` is not configured, whatever the backend.
pub fn create_connection_pusher(
    settings: &Settings,
    sdk_config: Option<&SdkConfig>,
) -> Result<Arc<dyn ConnectionPusher>, AppError> {
    let endpoint_url = settings.endpoint_url()?;

    let pusher: Arc<dyn ConnectionPusher> = match settings.push_backend.as_str() {
        "memory" => {
            tracing::info!(backend = "memory", "Creating memory connection pusher");
            Arc::new(MemoryConnectionPusher::new())
        }
        _ => {
            if let Some(config) = sdk_config {
                tracing::info!(
                    backend = "apigateway",
                    endpoint_url = %endpoint_url,
                    "Creating API Gateway connection pusher"
                );
                Arc::new(ApiGatewayConnectionPusher::new(config, endpoint_url))
            } else {
                tracing::warn!(
                    "API Gateway pusher requested but no AWS config provided, \
                     falling back to memory"
                );
                Arc::new(MemoryConnectionPusher::new())
            }
        }
    };

    Ok(pusher)
}
