//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to display notification: {0}")]
    DisplayFailed(String),
}

/// Port for desktop notifications.
///
/// This is a one-way capability: an implementation hands the request to
/// the host platform and returns. Callers never learn whether the
/// notification was actually shown on screen.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Request display of a desktop notification.
    ///
    /// # Arguments
    /// * `heading` - The notification heading
    /// * `detail` - Supporting detail text (may be empty)
    /// * `icon` - Icon reference (file path or freedesktop icon name)
    ///
    /// # Returns
    /// Ok(()) once the request was handed off, error otherwise
    async fn display(
        &self,
        heading: &str,
        detail: &str,
        icon: &str,
    ) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn display(
        &self,
        heading: &str,
        detail: &str,
        icon: &str,
    ) -> Result<(), NotificationError> {
        self.as_ref().display(heading, detail, icon).await
    }
}
