use thiserror::Error;

use crate::push::PushError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Event has no requestContext.connectionId")]
    MissingConnectionId,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Push error: {0}")]
    Push(#[from] PushError),
}

pub type Result<T> = std::result::Result<T, AppError>;
