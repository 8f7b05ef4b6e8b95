//! Connection identity as assigned by the WebSocket gateway.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Partition key attribute of the connection table
pub const CONNECTION_ID_ATTRIBUTE: &str = "ConnectionId";

/// Gateway-assigned identifier of an open WebSocket connection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read `requestContext.connectionId` from a gateway event.
    pub fn from_event(event: &Value) -> Result<Self, AppError> {
        event
            .pointer("/requestContext/connectionId")
            .and_then(Value::as_str)
            .map(Self::new)
            .ok_or(AppError::MissingConnectionId)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConnectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Stored row of the connection table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    #[serde(rename = "ConnectionId")]
    pub connection_id: ConnectionId,
}

impl ConnectionRecord {
    pub fn new(connection_id: impl Into<ConnectionId>) -> Self {
        Self {
            connection_id: connection_id.into(),
        }
    }
}
