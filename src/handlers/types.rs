use serde::{Deserialize, Serialize};

/// Integration response returned to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
}

impl GatewayResponse {
    pub fn ok() -> Self {
        Self { status_code: 200 }
    }
}

/// Outcome of an operation whose failure is deliberately ignored.
///
/// Records only whether the operation went through; error detail is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestEffort {
    Completed,
    Suppressed,
}

impl BestEffort {
    pub fn from_result<T, E>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => BestEffort::Completed,
            Err(_) => BestEffort::Suppressed,
        }
    }

    pub fn is_completed(self) -> bool {
        self == BestEffort::Completed
    }
}
