//! PushBridge - background push-to-desktop notification bridge
//!
//! This crate keeps a long-lived worker connected to a hosted push-delivery
//! service and turns each message delivered while no foreground client is
//! attending into a desktop notification.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (hosted delivery client, desktop notifiers, config store)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
