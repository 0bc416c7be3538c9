//! Notification tool factory with automatic detection

use std::fmt;
use std::process::Stdio;
use std::str::FromStr;

use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};

use super::notify_rust::NotifyRustNotifier;
use super::notify_send::NotifySendNotifier;

/// Available notification tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierTool {
    /// Cross-platform notify-rust library
    NotifyRust,
    /// notify-send binary (Linux/BSD desktops)
    NotifySend,
}

impl fmt::Display for NotifierTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierTool::NotifyRust => write!(f, "notify-rust"),
            NotifierTool::NotifySend => write!(f, "notify-send"),
        }
    }
}

/// User preference for notification tool selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierToolPreference {
    /// Auto-detect: notify-send when present, notify-rust otherwise
    #[default]
    Auto,
    /// Always use the notify-rust library
    NotifyRust,
    /// Always use the notify-send binary
    NotifySend,
}

impl fmt::Display for NotifierToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierToolPreference::Auto => write!(f, "auto"),
            NotifierToolPreference::NotifyRust => write!(f, "notify-rust"),
            NotifierToolPreference::NotifySend => write!(f, "notify-send"),
        }
    }
}

/// Error type for parsing notifier tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNotifierToolError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseNotifierToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid notifier tool '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseNotifierToolError {}

impl FromStr for NotifierToolPreference {
    type Err = ParseNotifierToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(NotifierToolPreference::Auto),
            "notify-rust" => Ok(NotifierToolPreference::NotifyRust),
            "notify-send" => Ok(NotifierToolPreference::NotifySend),
            _ => Err(ParseNotifierToolError {
                value: s.to_string(),
                valid_options: "auto, notify-rust, notify-send",
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Detect the best available notification tool.
///
/// Prefers the native notify-send binary when present, falling back to
/// the notify-rust library which needs no external tool.
pub async fn detect_notifier_tool() -> NotifierTool {
    if is_tool_available("notify-send").await {
        NotifierTool::NotifySend
    } else {
        NotifierTool::NotifyRust
    }
}

/// Create a notifier adapter using the specified preference.
///
/// Returns the adapter and the selected tool, or an error if the
/// explicitly requested tool is not available.
pub async fn create_notifier(
    preference: NotifierToolPreference,
) -> Result<(Box<dyn Notifier>, NotifierTool), NotificationError> {
    match preference {
        NotifierToolPreference::Auto => match detect_notifier_tool().await {
            NotifierTool::NotifySend => Ok((
                Box::new(NotifySendNotifier::new()) as Box<dyn Notifier>,
                NotifierTool::NotifySend,
            )),
            NotifierTool::NotifyRust => Ok((
                Box::new(NotifyRustNotifier::new()) as Box<dyn Notifier>,
                NotifierTool::NotifyRust,
            )),
        },
        NotifierToolPreference::NotifyRust => Ok((
            Box::new(NotifyRustNotifier::new()) as Box<dyn Notifier>,
            NotifierTool::NotifyRust,
        )),
        NotifierToolPreference::NotifySend => {
            if is_tool_available("notify-send").await {
                Ok((
                    Box::new(NotifySendNotifier::new()) as Box<dyn Notifier>,
                    NotifierTool::NotifySend,
                ))
            } else {
                Err(NotificationError::NotifySendNotFound)
            }
        }
    }
}
