//! Notification infrastructure module
//!
//! Provides desktop notification support through the notify-send binary
//! or the cross-platform notify-rust library, with automatic detection.

mod factory;
mod notify_rust;
mod notify_send;

pub use factory::{
    create_notifier, detect_notifier_tool, NotifierTool, NotifierToolPreference,
    ParseNotifierToolError,
};
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;
