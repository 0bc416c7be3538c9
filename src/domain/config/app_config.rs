//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Icon reference attached to every notification the bridge requests
pub const DEFAULT_ICON: &str = "/icons/Icon-192.png";

/// Notifier tool used when none is configured
pub const DEFAULT_NOTIFIER: &str = "auto";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub project_id: Option<String>,
    pub sender_id: Option<String>,
    pub app_id: Option<String>,
    pub service_url: Option<String>,
    pub icon: Option<String>,
    pub notifier: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            project_id: None,
            sender_id: None,
            app_id: None,
            service_url: None,
            icon: Some(DEFAULT_ICON.to_string()),
            notifier: Some(DEFAULT_NOTIFIER.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            project_id: other.project_id.or(self.project_id),
            sender_id: other.sender_id.or(self.sender_id),
            app_id: other.app_id.or(self.app_id),
            service_url: other.service_url.or(self.service_url),
            icon: other.icon.or(self.icon),
            notifier: other.notifier.or(self.notifier),
        }
    }

    /// Get the notification icon, or the built-in default if not set
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Get the notifier tool preference, or "auto" if not set
    pub fn notifier_or_default(&self) -> &str {
        self.notifier.as_deref().unwrap_or(DEFAULT_NOTIFIER)
    }
}
