//! Push delivery port interface

use async_trait::async_trait;
use thiserror::Error;

/// Push delivery errors
#[derive(Debug, Clone, Error)]
pub enum ReceiveError {
    #[error("Invalid API key")]
    Unauthorized,

    #[error("Worker is not registered with the push service")]
    NotRegistered,

    #[error("Push service request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse push service response: {0}")]
    ParseError(String),

    #[error("Push service error: {0}")]
    ServiceError(String),
}

/// Port for the hosted push-delivery service
#[async_trait]
pub trait PushSource: Send + Sync {
    /// Register this worker with the push service.
    ///
    /// Registration is idempotent: repeat calls after a successful
    /// registration must be no-ops.
    async fn register(&self) -> Result<(), ReceiveError>;

    /// Wait for the next delivered message.
    ///
    /// # Returns
    /// The raw vendor envelope, or `None` when the delivery window
    /// closed without a message.
    async fn next_message(&self) -> Result<Option<serde_json::Value>, ReceiveError>;
}
