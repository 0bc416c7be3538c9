//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod bridge;
pub mod config;
pub mod error;
pub mod push;

// Re-export common types
pub use bridge::{BridgeSession, BridgeState};
pub use config::{AppConfig, DEFAULT_ICON};
pub use error::*;
pub use push::{MalformedReason, PushPayload, ServiceCredentials};
