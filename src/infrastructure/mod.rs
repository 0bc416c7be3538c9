//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the hosted push-delivery
//! service and the desktop notification stack.

pub mod config;
pub mod notification;
pub mod push;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_notifier, NotifierTool, NotifierToolPreference, NotifyRustNotifier, NotifySendNotifier,
};
pub use push::HostedPushSource;
