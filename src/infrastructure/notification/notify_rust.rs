//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: "PushBridge".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn display(
        &self,
        heading: &str,
        detail: &str,
        icon: &str,
    ) -> Result<(), NotificationError> {
        let heading = heading.to_owned();
        let detail = detail.to_owned();
        let icon = icon.to_owned();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&heading)
                .body(&detail)
                .icon(&icon)
                .show()
                .map_err(|e| NotificationError::DisplayFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::DisplayFailed(format!("Task join error: {}", e)))?
    }
}
