//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::infrastructure::notification::NotifierToolPreference;

/// PushBridge - desktop notifications for hosted push messages
#[derive(Parser, Debug)]
#[command(name = "push-bridge")]
#[command(version)]
#[command(about = "Background bridge that shows hosted push messages as desktop notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Icon reference attached to every notification
    #[arg(long, value_name = "PATH")]
    pub icon: Option<String>,

    /// Notification tool to use (auto, notify-rust, notify-send)
    #[arg(long, value_name = "TOOL")]
    pub notifier: Option<String>,

    /// Push service base URL (self-hosted deployments)
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Subcommand; without one the bridge worker runs in the foreground
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Show one local test notification and exit
    Send {
        /// Notification heading
        #[arg(long)]
        title: String,
        /// Supporting detail text
        #[arg(long, default_value = "")]
        body: String,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed bridge options
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub icon: String,
    pub notifier: NotifierToolPreference,
    pub service_url: Option<String>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "project_id",
    "sender_id",
    "app_id",
    "service_url",
    "icon",
    "notifier",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
