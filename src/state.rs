use std::sync::Arc;

use aws_config::{BehaviorVersion, SdkConfig};

use crate::config::Settings;
use crate::error::AppError;
use crate::push::{create_connection_pusher, ConnectionPusher};
use crate::store::{create_connection_store, ConnectionStore};

/// Process-wide resources, built once at cold start and shared by every
/// invocation.
#[derive(Clone)]
pub struct HandlerState {
    pub settings: Arc<Settings>,
    sdk_config: Option<SdkConfig>,
}

impl HandlerState {
    /// Load the AWS SDK config, unless every backend is in-memory.
    pub async fn new(settings: Settings) -> Self {
        let needs_aws = settings.store_backend != "memory" || settings.push_backend != "memory";
        let sdk_config = if needs_aws {
            Some(aws_config::load_defaults(BehaviorVersion::latest()).await)
        } else {
            None
        };

        if let Some(config) = &sdk_config {
            tracing::info!(region = ?config.region(), "AWS SDK config loaded");
        }

        Self::with_sdk_config(settings, sdk_config)
    }

    pub fn with_sdk_config(settings: Settings, sdk_config: Option<SdkConfig>) -> Self {
        Self {
            settings: Arc::new(settings),
            sdk_config,
        }
    }

    pub fn connection_store(&self) -> Result<Arc<dyn ConnectionStore>, AppError> {
        create_connection_store(&self.settings, self.sdk_config.as_ref())
    }

    pub fn connection_pusher(&self) -> Result<Arc<dyn ConnectionPusher>, AppError> {
        create_connection_pusher(&self.settings, self.sdk_config.as_ref())
    }
}
